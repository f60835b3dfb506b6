//! Async drivers connecting [`AuthDialog`] to an [`AuthClient`].
//!
//! The dialog state is only touched between awaits, through [`DialogState`],
//! so the same drivers work over a Dioxus signal or a plain `RefCell`.

use std::cell::RefCell;
use std::rc::Rc;

use super::client::AuthClient;
use super::dialog::{AuthDialog, DialogOutcome};
use super::types::CodeOptions;

/// Short-lived mutable access to dialog state
pub trait DialogState {
    fn update<R>(&mut self, f: impl FnOnce(&mut AuthDialog) -> R) -> R;
}

impl DialogState for Rc<RefCell<AuthDialog>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut AuthDialog) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Submit the email/phone form. Returns `true` if a code request was sent and
/// its result applied.
pub async fn submit_identifier<S: DialogState>(
    state: &mut S,
    client: &dyn AuthClient,
    options: &CodeOptions,
) -> bool {
    let Some(request) = state.update(AuthDialog::begin_code_request) else {
        return false;
    };

    let result = client.request_code(&request.identifier, options).await;
    if let Err(e) = &result {
        tracing::warn!("Code request failed: {}", e);
    }
    state.update(|dialog| dialog.complete_code_request(&request, result))
}

/// Submit the OTP form. Returns the outcome the opener should act on.
pub async fn submit_code<S: DialogState>(
    state: &mut S,
    client: &dyn AuthClient,
) -> Option<DialogOutcome> {
    let verification = state.update(AuthDialog::begin_verification)?;

    let purpose = verification.identifier.verification_purpose();
    let result = client
        .verify_code(&verification.identifier, &verification.code, purpose)
        .await;
    if let Err(e) = &result {
        tracing::warn!("Code verification failed: {}", e);
    }
    state.update(|dialog| dialog.complete_verification(&verification, result))
}
