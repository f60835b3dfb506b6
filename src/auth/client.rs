//! The auth capability the UI depends on.
//!
//! Components only see this trait; the concrete provider client is injected
//! through the auth context so tests can substitute a scripted one.

use std::rc::Rc;

use async_trait::async_trait;

use super::error::AuthError;
use super::session::{SessionListener, Subscription};
use super::types::{CodeOptions, Identifier, OtpPurpose, Session};

/// External authentication provider operations.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait AuthClient {
    /// Ask the provider to deliver a one-time code to the identifier's channel
    async fn request_code(
        &self,
        identifier: &Identifier,
        options: &CodeOptions,
    ) -> Result<(), AuthError>;

    /// Exchange a delivered code for a session
    async fn verify_code(
        &self,
        identifier: &Identifier,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<Session, AuthError>;

    /// The live session, if any
    fn current_session(&self) -> Option<Session>;

    /// Push notification on every session transition
    fn on_session_change(&self, listener: SessionListener) -> Subscription;
}

/// Shared handle stored in UI context
pub type SharedAuthClient = Rc<dyn AuthClient>;
