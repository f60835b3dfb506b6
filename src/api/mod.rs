//! HTTP API handlers

use crate::auth::PublicAuthConfig;
use crate::config::Config;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap_or_default();

        Self {
            config: Arc::new(config),
            http,
            started_at: Instant::now(),
        }
    }
}

/// API routes, merged into the Dioxus router in `main`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/api/auth/config", get(auth_config_handler))
        .with_state(state)
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub uptime_secs: u64,
    pub auth_provider_configured: bool,
    pub auth_provider_reachable: bool,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let configured = state.config.auth.is_configured();
    let reachable = if configured {
        match probe_auth_provider(&state).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Auth provider health check failed: {:#}", e);
                false
            }
        }
    } else {
        false
    };

    Json(StatusResponse {
        service: "restaurant-landing",
        version: env!("LANDING_VERSION"),
        git_sha: env!("LANDING_GIT_SHA"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        auth_provider_configured: configured,
        auth_provider_reachable: reachable,
    })
}

/// GoTrue exposes an unauthenticated-by-key health endpoint
async fn probe_auth_provider(state: &AppState) -> anyhow::Result<()> {
    let auth = &state.config.auth;
    let url = format!("{}/auth/v1/health", auth.url.trim_end_matches('/'));
    state
        .http
        .get(&url)
        .header("apikey", &auth.anon_key)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

/// GET /api/auth/config - Browser-side provider settings
pub async fn auth_config_handler(State(state): State<AppState>) -> Json<PublicAuthConfig> {
    Json(state.config.auth.public())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProviderConfig;

    fn state(auth: AuthProviderConfig) -> AppState {
        AppState::new(Config { port: 0, auth })
    }

    #[tokio::test]
    async fn test_auth_config_exposes_public_fields() {
        let state = state(AuthProviderConfig {
            url: "https://abcd.supabase.co".to_string(),
            anon_key: "anon".to_string(),
            email_redirect_to: None,
            google_client_id: Some("gid".to_string()),
        });

        let Json(public) = auth_config_handler(State(state)).await;
        assert_eq!(public.auth_url, "https://abcd.supabase.co");
        assert_eq!(public.anon_key, "anon");
        assert_eq!(public.google_client_id.as_deref(), Some("gid"));
    }

    #[tokio::test]
    async fn test_status_without_provider_skips_probe() {
        let Json(status) = status_handler(State(state(AuthProviderConfig::default()))).await;
        assert_eq!(status.service, "restaurant-landing");
        assert!(!status.auth_provider_configured);
        assert!(!status.auth_provider_reachable);
    }
}
