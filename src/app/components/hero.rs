//! Hero banner with venue details and the quick-action bar.

use dioxus::prelude::*;

use super::auth_modal::AuthModal;
use crate::app::auth_context::use_auth;
use crate::app::navigation::BrowserNavigator;
use crate::app::session::use_session_presence;
use crate::auth::{DialogOutcome, Session};
use crate::content::{QuickAction, QUICK_ACTIONS, VENUE};
use crate::gate::{ActionGate, Navigator};

#[component]
pub fn Hero() -> Element {
    let gate = use_signal(ActionGate::default);
    use_session_presence(gate);

    let dialog_open = gate.read().is_dialog_open();

    rsx! {
        div { class: "relative h-[400px]",
            img {
                class: "w-full h-full object-cover",
                src: VENUE.hero_image,
                alt: format!("{} Restaurant", VENUE.name),
            }
            div { class: "absolute inset-0 bg-black bg-opacity-40" }
        }

        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 -mt-20 relative",
            div { class: "bg-white rounded-lg shadow-xl p-6",
                VenueSummary {}
                VenueDetails {}
                div { class: "grid grid-cols-2 md:grid-cols-4 gap-4 mt-8",
                    for (index, action) in QUICK_ACTIONS.iter().enumerate() {
                        ActionTile { key: "{index}", action, gate }
                    }
                }
            }
        }

        if dialog_open {
            AuthModal {
                on_close: move |_| {
                    let mut gate = gate;
                    gate.write().dialog_closed();
                },
                on_success: move |outcome: DialogOutcome| {
                    if let DialogOutcome::Verified(Session { user: Some(user), .. }) = &outcome {
                        tracing::debug!(user = %user.id, "Signed in with a one-time code");
                    }
                    let mut gate = gate;
                    let redirect = gate.write().auth_succeeded();
                    if let Some(url) = redirect {
                        BrowserNavigator.navigate(&url);
                    }
                },
            }
        }
    }
}

#[component]
fn ActionTile(action: &'static QuickAction, gate: Signal<ActionGate>) -> Element {
    let auth = use_auth();
    let color = action.color;

    rsx! {
        button {
            class: "{color} text-white rounded-lg p-4 flex flex-col items-center justify-center transition-transform hover:scale-105",
            r#type: "button",
            onclick: move |_| {
                let mut gate = gate;
                // An expired session is only noticed when asked for
                if let Some(client) = auth.client() {
                    let active = client.current_session().is_some();
                    gate.write().session_changed(active);
                }
                let decision = gate.write().click(action.target);
                BrowserNavigator.apply(&decision);
            },
            span { class: "text-3xl", {action.icon.glyph()} }
            span { class: "mt-2 font-semibold", {action.title} }
        }
    }
}

#[component]
fn VenueSummary() -> Element {
    let rating = format!("{:.1}", VENUE.rating);

    rsx! {
        div { class: "flex justify-between items-start",
            div {
                h1 { class: "text-4xl font-bold text-gray-900", {VENUE.name} }
                p { class: "text-lg text-gray-600 mt-2", {VENUE.cuisines} }
                div { class: "flex items-center mt-2",
                    span { class: "text-yellow-400", "★" }
                    span { class: "ml-1 text-lg font-semibold", "{rating}" }
                    span { class: "mx-2 text-gray-400", "•" }
                    span { class: "text-gray-600", {VENUE.rating_count} }
                }
            }
            div { class: "flex items-center space-x-2 bg-green-50 px-3 py-1 rounded-lg",
                span { class: "text-green-600 font-bold", "✓" }
                span { class: "text-green-600 font-semibold", {VENUE.verified_by} }
                span { class: "text-green-600 font-semibold italic", "verified" }
            }
        }
    }
}

#[component]
fn VenueDetails() -> Element {
    let directions = VENUE.directions_url();
    let phone_link = format!("tel:{}", VENUE.phone.replace(' ', ""));

    rsx! {
        div { class: "mt-6 space-y-4",
            div { class: "flex items-center text-gray-600",
                span { class: "w-5 h-5 mr-2", "📍" }
                span { {VENUE.address} }
                a {
                    class: "ml-4 bg-green-600 text-white px-4 py-1 rounded-lg hover:bg-green-700 transition-colors",
                    href: "{directions}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Get Directions"
                }
            }
            div { class: "flex items-center text-gray-600",
                span { class: "w-5 h-5 mr-2", "🕒" }
                span { {VENUE.hours_label} }
            }
            div { class: "flex items-center text-gray-600",
                span { class: "w-5 h-5 mr-2", "📞" }
                a { href: "{phone_link}", {VENUE.phone} }
            }
        }
    }
}
