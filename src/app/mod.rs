//! Dioxus fullstack application entry point.
//!
//! The server renders the page and the browser hydrates it; sign-in runs
//! entirely client side against the auth provider.

use dioxus::prelude::*;

pub mod api;
pub mod auth_context;
pub mod components;
pub mod navigation;
pub mod pages;
pub mod session;

use auth_context::use_auth_provider;
use pages::Landing;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Shared auth client for every component below the root
    use_auth_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}
