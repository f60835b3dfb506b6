//! Auth error type.
//!
//! Every variant renders as the text shown in the dialog's error banner.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// The provider answered with an error body
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// The request never produced a response
    #[error("{0}")]
    Network(String),

    /// The provider answered with something we could not read
    #[error("Unexpected response from auth provider: {0}")]
    Decode(String),

    /// Capability missing in this environment (e.g. called during SSR)
    #[error("{0}")]
    Unavailable(String),

    #[error("Sign-in is not available right now")]
    NotConfigured,

    /// OAuth widget reported failure
    #[error("{0}")]
    Widget(String),
}

impl AuthError {
    /// Build a provider error from a non-2xx response body.
    ///
    /// Takes the first of `msg`, `message`, `error_description`, `error`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                ["msg", "message", "error_description", "error"]
                    .iter()
                    .find_map(|key| v.get(*key).and_then(|m| m.as_str()).map(str::to_string))
            })
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        AuthError::Provider { status, message }
    }
}
