//! Shared auth value types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a one-time code is delivered.
///
/// A code can only be verified against the channel it was requested for,
/// so the pending identifier is carried as a single tagged value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identifier {
    Email(String),
    Phone(String),
}

impl Identifier {
    /// Verification type the provider expects for codes sent to this channel
    pub fn verification_purpose(&self) -> OtpPurpose {
        match self {
            Identifier::Email(_) => OtpPurpose::Signup,
            Identifier::Phone(_) => OtpPurpose::Sms,
        }
    }

    /// Informational banner shown once a code is on its way
    pub fn sent_message(&self) -> &'static str {
        match self {
            Identifier::Email(_) => "Check your email for the login link!",
            Identifier::Phone(_) => "Check your phone for the OTP!",
        }
    }
}

/// Verification type sent alongside a one-time code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPurpose {
    Sms,
    Signup,
}

impl OtpPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::Sms => "sms",
            OtpPurpose::Signup => "signup",
        }
    }
}

/// Options for a code request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeOptions {
    /// Where the magic link in the email should land
    pub email_redirect_to: Option<String>,
    /// Let the provider create an account for unknown identifiers
    pub create_user: bool,
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            email_redirect_to: None,
            create_user: true,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Session issued by the provider after a successful verification.
/// Token contents are opaque to this crate.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
    /// Unix seconds; derived from `expires_in` when the provider omits it
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Fill in `expires_at` relative to `now` if the provider only sent `expires_in`
    pub fn with_expiry_from(mut self, now: DateTime<Utc>) -> Self {
        if self.expires_at.is_none() && self.expires_in > 0 {
            self.expires_at = Some(now.timestamp() + self.expires_in);
        }
        self
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(at) => at <= now.timestamp(),
            None => false,
        }
    }
}

/// Session state transitions pushed to subscribers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthChangeEvent {
    SignedIn,
    SignedOut,
}

/// Browser-visible provider settings served by `/api/auth/config`
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PublicAuthConfig {
    /// Project URL, e.g. `https://abcd.supabase.co`
    pub auth_url: String,
    /// Public (anon) API key
    pub anon_key: String,
    #[serde(default)]
    pub email_redirect_to: Option<String>,
    /// Enables the Google sign-in widget when set
    #[serde(default)]
    pub google_client_id: Option<String>,
}

impl PublicAuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.auth_url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_purpose_follows_channel() {
        let phone = Identifier::Phone("+11234567890".into());
        let email = Identifier::Email("user@example.com".into());
        assert_eq!(phone.verification_purpose(), OtpPurpose::Sms);
        assert_eq!(email.verification_purpose(), OtpPurpose::Signup);
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let session: Session = serde_json::from_str(
            r#"{"access_token":"a","refresh_token":"r","expires_in":3600}"#,
        )
        .unwrap();
        let session = session.with_expiry_from(now);

        assert_eq!(session.expires_at, Some(now.timestamp() + 3600));
        assert!(!session.is_expired_at(now));
        assert!(session.is_expired_at(now + chrono::Duration::seconds(3600)));
    }

    #[test]
    fn test_session_without_expiry_never_expires() {
        let session: Session = serde_json::from_str(r#"{"access_token":"a"}"#).unwrap();
        assert_eq!(session.token_type, "bearer");
        assert!(!session.is_expired_at(Utc::now()));
    }
}
