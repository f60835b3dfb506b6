//! Inline status banners.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BannerKind {
    Error,
    Info,
}

impl BannerKind {
    fn class(self) -> &'static str {
        match self {
            BannerKind::Error => "bg-red-50 text-red-600 p-3 rounded mb-4",
            BannerKind::Info => "bg-green-50 text-green-600 p-3 rounded mb-4",
        }
    }
}

/// A one-line banner showing an error or informational message.
#[component]
pub fn Banner(kind: BannerKind, message: String) -> Element {
    let role = match kind {
        BannerKind::Error => "alert",
        BannerKind::Info => "status",
    };

    rsx! {
        div { class: kind.class(), role: role, "{message}" }
    }
}
