//! Sign-in dialog state machine.
//!
//! ```text
//! SelectMethod --email--> EmailEntry --code sent--> OtpEntry --verified--> Authenticated
//!      |        --phone--> PhoneEntry --code sent--^
//!      +--widget ok---------------------------------------------------> Authenticated
//! ```
//!
//! Network calls are split into `begin_*` / `complete_*` pairs so the state
//! never has to be borrowed across an await. Each `begin_*` hands out a
//! [`Ticket`] stamped with the current generation; opening or closing the
//! dialog bumps the generation, so a completion that arrives after the user
//! moved on is dropped instead of mutating a flow it no longer belongs to.

use super::error::AuthError;
use super::types::{Identifier, Session};

const WIDGET_FAILED: &str = "Google login failed";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogStep {
    #[default]
    SelectMethod,
    EmailEntry,
    PhoneEntry,
    OtpEntry,
}

/// Code-based sign-in methods offered on the first step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Email,
    Phone,
}

/// Terminal result handed to the dialog's opener
#[derive(Clone, Debug, PartialEq)]
pub enum DialogOutcome {
    /// Code verified; carries the new session
    Verified(Session),
    /// OAuth widget reported success
    WidgetSignedIn,
}

/// Proof that a request was started in a particular generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// A code request ready to send
#[derive(Clone, Debug, PartialEq)]
pub struct CodeRequest {
    pub ticket: Ticket,
    pub identifier: Identifier,
}

/// A verification ready to send
#[derive(Clone, Debug, PartialEq)]
pub struct Verification {
    pub ticket: Ticket,
    pub identifier: Identifier,
    pub code: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthDialog {
    step: DialogStep,
    email: String,
    phone: String,
    code: String,
    pending: Option<Identifier>,
    error: Option<String>,
    message: Option<String>,
    busy: bool,
    generation: u64,
}

impl AuthDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> DialogStep {
        self.step
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn pending(&self) -> Option<&Identifier> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Start a fresh flow. Anything still in flight becomes stale.
    pub fn open(&mut self) {
        let generation = self.generation + 1;
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    /// Stop accepting completions for the current flow
    pub fn close(&mut self) {
        self.generation += 1;
        self.busy = false;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    pub fn set_code(&mut self, value: impl Into<String>) {
        self.code = value.into();
    }

    /// Pick email or phone on the method-selection step
    pub fn choose(&mut self, method: Method) {
        if self.busy || self.step != DialogStep::SelectMethod {
            return;
        }
        self.step = match method {
            Method::Email => DialogStep::EmailEntry,
            Method::Phone => DialogStep::PhoneEntry,
        };
        self.clear_banners();
    }

    /// "Back to options" from any form step
    pub fn back(&mut self) {
        if self.busy {
            return;
        }
        self.step = DialogStep::SelectMethod;
        self.clear_banners();
    }

    /// Validate the current email/phone form and mark a request in flight.
    ///
    /// Returns `None` when not on an entry step, already busy, or the field
    /// is blank.
    pub fn begin_code_request(&mut self) -> Option<CodeRequest> {
        if self.busy {
            return None;
        }
        let identifier = match self.step {
            DialogStep::EmailEntry => Identifier::Email(non_blank(&self.email)?),
            DialogStep::PhoneEntry => Identifier::Phone(non_blank(&self.phone)?),
            DialogStep::SelectMethod | DialogStep::OtpEntry => return None,
        };

        self.start_request();
        Some(CodeRequest {
            ticket: self.ticket(),
            identifier,
        })
    }

    /// Apply the result of a code request. Returns `false` if the ticket is stale.
    pub fn complete_code_request(
        &mut self,
        request: &CodeRequest,
        result: Result<(), AuthError>,
    ) -> bool {
        if !self.accepts(request.ticket) {
            return false;
        }
        self.busy = false;

        match result {
            Ok(()) => {
                self.message = Some(request.identifier.sent_message().to_string());
                self.pending = Some(request.identifier.clone());
                self.step = DialogStep::OtpEntry;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Validate the code form against the pending identifier
    pub fn begin_verification(&mut self) -> Option<Verification> {
        if self.busy || self.step != DialogStep::OtpEntry {
            return None;
        }
        let identifier = self.pending.clone()?;
        let code = non_blank(&self.code)?;

        self.start_request();
        Some(Verification {
            ticket: self.ticket(),
            identifier,
            code,
        })
    }

    /// Apply a verification result. `Some` only for a current, successful one.
    pub fn complete_verification(
        &mut self,
        verification: &Verification,
        result: Result<Session, AuthError>,
    ) -> Option<DialogOutcome> {
        if !self.accepts(verification.ticket) {
            return None;
        }
        self.busy = false;

        match result {
            Ok(session) => Some(DialogOutcome::Verified(session)),
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// OAuth widget callback: success skips the code exchange entirely
    pub fn widget_succeeded(&self) -> Option<DialogOutcome> {
        (self.step == DialogStep::SelectMethod).then_some(DialogOutcome::WidgetSignedIn)
    }

    pub fn widget_failed(&mut self, reason: Option<&str>) {
        if let Some(reason) = reason {
            tracing::debug!("Widget sign-in failed: {}", reason);
        }
        self.show_error(&AuthError::Widget(WIDGET_FAILED.to_string()));
    }

    /// Show an error that did not come from a ticketed request
    pub fn show_error(&mut self, err: &AuthError) {
        self.error = Some(err.to_string());
    }

    fn start_request(&mut self) {
        self.busy = true;
        self.error = None;
    }

    fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation,
        }
    }

    fn accepts(&self, ticket: Ticket) -> bool {
        let current = ticket.generation == self.generation;
        if !current {
            tracing::debug!(
                ticket = ticket.generation,
                generation = self.generation,
                "Discarding stale auth completion"
            );
        }
        current
    }

    fn clear_banners(&mut self) {
        self.error = None;
        self.message = None;
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
