//! Restaurant landing page - Rust Implementation
//!
//! A Dioxus fullstack landing page whose quick actions are gated behind
//! passwordless sign-in with an external auth provider.
//!
//! This library provides:
//! - Sign-in dialog state machine and GoTrue auth client
//! - Session-gated quick actions with deferred redirects
//! - Static venue content and the Dioxus components that render it
//! - Axum API and layered configuration (server feature)

#[cfg(feature = "server")]
pub mod api;
pub mod app;
pub mod auth;
#[cfg(feature = "server")]
pub mod config;
pub mod content;
pub mod gate;
