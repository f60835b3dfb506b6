//! Page shell: head elements, main column and footer.

use dioxus::prelude::*;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("LANDING_VERSION");
    let title = props.title.clone();

    rsx! {
        // Dioxus hoists these to the real <head>
        document::Title { "{title}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Script { src: TAILWIND_CDN }

        main { class: "min-h-screen bg-gray-50",
            {props.children}
        }
        footer { class: "max-w-7xl mx-auto px-4 text-center py-3",
            small { class: "text-gray-400", "v{version}" }
        }
    }
}
