//! Passwordless sign-in against an external auth provider.
//!
//! - `types` / `error` - value types and the single error kind
//! - `client` - the [`AuthClient`] capability the UI is written against
//! - `gotrue` - concrete client for the GoTrue REST API
//! - `dialog` / `flow` - sign-in dialog state machine and its async drivers

pub mod client;
pub mod dialog;
pub mod error;
pub mod flow;
pub mod gotrue;
pub mod session;
pub mod storage;
pub mod transport;
pub mod types;

pub use client::{AuthClient, SharedAuthClient};
pub use dialog::{AuthDialog, DialogOutcome, DialogStep, Method};
pub use error::AuthError;
pub use gotrue::GoTrueClient;
pub use session::{SessionHub, SessionListener, Subscription};
pub use types::{AuthChangeEvent, CodeOptions, Identifier, OtpPurpose, PublicAuthConfig, Session};
