//! Auth context for the shared provider client.
//!
//! The client is built in the browser once `/api/auth/config` has been
//! fetched; until then (and always during SSR) `client()` is `None`.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::auth::{CodeOptions, PublicAuthConfig, SharedAuthClient};

#[derive(Clone, Copy)]
pub struct AuthContext {
    client: Signal<Option<SharedAuthClient>>,
    config: Signal<Option<PublicAuthConfig>>,
}

impl AuthContext {
    /// The injected auth client, once available
    pub fn client(&self) -> Option<SharedAuthClient> {
        self.client.read().clone()
    }

    /// Google widget client id, if the widget is enabled
    pub fn google_client_id(&self) -> Option<String> {
        self.config
            .read()
            .as_ref()
            .and_then(|c| c.google_client_id.clone())
            .filter(|id| !id.trim().is_empty())
    }

    /// Code request options; magic links land on the configured URL or this page
    pub fn code_options(&self) -> CodeOptions {
        let redirect = self
            .config
            .read()
            .as_ref()
            .and_then(|c| c.email_redirect_to.clone());
        CodeOptions {
            email_redirect_to: redirect.or_else(crate::app::api::page_origin),
            ..CodeOptions::default()
        }
    }

    /// Replace the client (tests and alternative providers)
    pub fn install(&self, client: SharedAuthClient) {
        let mut slot = self.client;
        slot.set(Some(client));
    }

    /// Build the browser GoTrue client from server-provided settings
    pub fn configure(&self, config: PublicAuthConfig) {
        match crate::auth::GoTrueClient::for_browser(&config) {
            Ok(client) => {
                tracing::info!("Auth client ready");
                self.install(Rc::new(client));
            }
            Err(e) => tracing::warn!("Auth client unavailable: {}", e),
        }
        let mut stored = self.config;
        stored.set(Some(config));
    }
}

/// Initialize auth context provider - call once at app root
pub fn use_auth_provider() {
    let client = use_signal(|| None::<SharedAuthClient>);
    let config = use_signal(|| None::<PublicAuthConfig>);

    let ctx = AuthContext { client, config };
    use_context_provider(|| ctx);

    // Fetch provider settings from server
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            spawn(async move {
                match crate::app::api::fetch_json::<PublicAuthConfig>("/api/auth/config").await {
                    Ok(config) => ctx.configure(config),
                    Err(e) => tracing::warn!("Failed to load auth config: {}", e),
                }
            });
        });
    }
}

/// Get auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
