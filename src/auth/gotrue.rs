//! Client for the GoTrue auth REST API (the service behind Supabase Auth).
//!
//! Only the passwordless endpoints are used:
//! - `POST /auth/v1/otp`    - send a magic link / one-time code
//! - `POST /auth/v1/verify` - trade the code for a session
//!
//! The session is cached in memory, mirrored to [`SessionStorage`] under the
//! provider's usual `sb-<project-ref>-auth-token` key, and announced through a
//! [`SessionHub`].

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use url::Url;

use super::client::AuthClient;
use super::error::AuthError;
use super::session::{SessionHub, SessionListener, Subscription};
use super::storage::{BrowserStorage, SessionStorage};
use super::transport::{FetchTransport, HttpResponse, HttpTransport};
use super::types::{AuthChangeEvent, CodeOptions, Identifier, OtpPurpose, PublicAuthConfig, Session};

const CLIENT_INFO: &str = concat!("restaurant-landing/", env!("CARGO_PKG_VERSION"));

pub struct GoTrueClient<T = FetchTransport, S = BrowserStorage> {
    /// `<project url>/auth/v1`, no trailing slash
    base_url: String,
    anon_key: String,
    storage_key: String,
    transport: T,
    storage: S,
    session: RefCell<Option<Session>>,
    hub: SessionHub,
}

impl GoTrueClient {
    /// Browser client: `fetch` transport, localStorage persistence
    pub fn for_browser(config: &PublicAuthConfig) -> Result<Self, AuthError> {
        Self::new(config, FetchTransport, BrowserStorage)
    }
}

impl<T: HttpTransport, S: SessionStorage> GoTrueClient<T, S> {
    pub fn new(config: &PublicAuthConfig, transport: T, storage: S) -> Result<Self, AuthError> {
        if !config.is_configured() {
            return Err(AuthError::NotConfigured);
        }

        let project = Url::parse(config.auth_url.trim()).map_err(|e| {
            tracing::warn!("Invalid auth provider URL {}: {}", config.auth_url, e);
            AuthError::NotConfigured
        })?;
        let project_ref = project
            .host_str()
            .and_then(|host| host.split('.').next())
            .unwrap_or("local")
            .to_string();

        let client = Self {
            base_url: format!("{}/auth/v1", project.as_str().trim_end_matches('/')),
            anon_key: config.anon_key.trim().to_string(),
            storage_key: format!("sb-{}-auth-token", project_ref),
            transport,
            storage,
            session: RefCell::new(None),
            hub: SessionHub::new(),
        };
        client.restore_session();
        Ok(client)
    }

    fn restore_session(&self) {
        let Some(raw) = self.storage.load(&self.storage_key) else {
            return;
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if !session.is_expired_at(Utc::now()) => {
                tracing::debug!("Restored session from storage");
                *self.session.borrow_mut() = Some(session);
            }
            Ok(_) => {
                tracing::debug!("Stored session expired, discarding");
                self.storage.remove(&self.storage_key);
            }
            Err(e) => {
                tracing::warn!("Discarding unreadable stored session: {}", e);
                self.storage.remove(&self.storage_key);
            }
        }
    }

    fn store_session(&self, session: &Session) {
        match serde_json::to_string(session) {
            Ok(raw) => self.storage.save(&self.storage_key, &raw),
            Err(e) => tracing::warn!("Failed to serialize session: {}", e),
        }
        *self.session.borrow_mut() = Some(session.clone());
    }

    /// Drop an expired session and tell subscribers it is gone
    fn expire_session(&self) {
        self.session.borrow_mut().take();
        self.storage.remove(&self.storage_key);
        tracing::info!("Session expired");
        self.hub.notify(AuthChangeEvent::SignedOut, None);
    }

    fn endpoint(&self, path: &str, redirect_to: Option<&str>) -> String {
        match redirect_to {
            Some(to) => format!(
                "{}/{}?redirect_to={}",
                self.base_url,
                path,
                urlencoding::encode(to)
            ),
            None => format!("{}/{}", self.base_url, path),
        }
    }

    async fn post(&self, url: &str, body: serde_json::Value) -> Result<HttpResponse, AuthError> {
        let bearer = format!("Bearer {}", self.anon_key);
        let headers = [
            ("apikey", self.anon_key.as_str()),
            ("Authorization", bearer.as_str()),
            ("Content-Type", "application/json;charset=UTF-8"),
            ("X-Client-Info", CLIENT_INFO),
        ];

        let response = self.transport.post_json(url, &headers, &body).await?;
        if response.is_success() {
            Ok(response)
        } else {
            let err = AuthError::from_response(response.status, &response.body);
            tracing::warn!(status = response.status, "Auth provider rejected request: {}", err);
            Err(err)
        }
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport, S: SessionStorage> AuthClient for GoTrueClient<T, S> {
    async fn request_code(
        &self,
        identifier: &Identifier,
        options: &CodeOptions,
    ) -> Result<(), AuthError> {
        let (url, body) = match identifier {
            Identifier::Email(email) => (
                self.endpoint("otp", options.email_redirect_to.as_deref()),
                json!({ "email": email, "create_user": options.create_user }),
            ),
            Identifier::Phone(phone) => (
                self.endpoint("otp", None),
                json!({ "phone": phone, "create_user": options.create_user, "channel": "sms" }),
            ),
        };

        self.post(&url, body).await?;
        tracing::info!("One-time code requested");
        Ok(())
    }

    async fn verify_code(
        &self,
        identifier: &Identifier,
        code: &str,
        purpose: OtpPurpose,
    ) -> Result<Session, AuthError> {
        let body = match identifier {
            Identifier::Email(email) => {
                json!({ "email": email, "token": code, "type": purpose.as_str() })
            }
            Identifier::Phone(phone) => {
                json!({ "phone": phone, "token": code, "type": purpose.as_str() })
            }
        };

        let response = self.post(&self.endpoint("verify", None), body).await?;
        let session = serde_json::from_str::<Session>(&response.body)
            .map_err(|e| AuthError::Decode(e.to_string()))?
            .with_expiry_from(Utc::now());

        self.store_session(&session);
        tracing::info!("Signed in");
        self.hub.notify(AuthChangeEvent::SignedIn, Some(&session));
        Ok(session)
    }

    fn current_session(&self) -> Option<Session> {
        let cached = self.session.borrow().clone();
        match cached {
            Some(session) if session.is_expired_at(Utc::now()) => {
                self.expire_session();
                None
            }
            other => other,
        }
    }

    fn on_session_change(&self, listener: SessionListener) -> Subscription {
        self.hub.subscribe(listener)
    }
}
