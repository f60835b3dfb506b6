//! Presentational page sections below the hero.

use chrono::Local;
use dioxus::prelude::*;

use crate::content::{
    FEATURES, GALLERY, MENU, MENU_ANCHOR, OPENING_HOURS, RELATED_RESTAURANTS,
};

#[component]
pub fn MenuSection() -> Element {
    rsx! {
        div { id: MENU_ANCHOR, class: "bg-white rounded-lg shadow-md p-6 mb-8",
            div { class: "flex items-center gap-2 mb-6",
                span { class: "text-gray-600 text-2xl", "🍴" }
                h2 { class: "text-2xl font-bold", "Menu" }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                for category in MENU.iter() {
                    div {
                        h3 { class: "text-xl font-semibold mb-4", {category.category} }
                        div { class: "space-y-4",
                            for item in category.items.iter() {
                                div { class: "border-b pb-4",
                                    div { class: "flex justify-between items-start",
                                        div {
                                            h4 { class: "font-medium", {item.name} }
                                            p { class: "text-sm text-gray-600", {item.description} }
                                        }
                                        span { class: "text-gray-900 font-medium", {item.price} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn InfoSection() -> Element {
    // Local time is only meaningful in the browser; SSR renders no badge
    let mut open_now = use_signal(|| None::<bool>);
    use_effect(move || open_now.set(Some(OPENING_HOURS.is_open_at(Local::now().time()))));

    let hours = OPENING_HOURS.label();

    rsx! {
        div { class: "bg-white rounded-lg shadow-md p-6 mb-8",
            div { class: "flex items-center gap-2 mb-6",
                span { class: "text-gray-600 text-2xl", "ℹ" }
                h2 { class: "text-2xl font-bold", "More Information" }
            }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-8",
                div {
                    h3 { class: "text-lg font-semibold mb-3", "Features" }
                    ul { class: "space-y-2 text-gray-700",
                        for feature in FEATURES.iter() {
                            li { "• " {*feature} }
                        }
                    }
                }
                div {
                    h3 { class: "text-lg font-semibold mb-3", "Opening Hours" }
                    ul { class: "space-y-2 text-gray-700",
                        li { {OPENING_HOURS.days} }
                        li { "{hours}" }
                        {match open_now() {
                            Some(true) => rsx! { li { class: "mt-4 text-green-600", "Open Now" } },
                            Some(false) => rsx! { li { class: "mt-4 text-red-600", "Closed Now" } },
                            None => rsx! {},
                        }}
                    }
                }
            }
        }
    }
}

#[component]
pub fn PhotoGallery() -> Element {
    rsx! {
        h2 { class: "text-2xl font-bold mb-4", "Photo Gallery" }
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4 mb-12",
            for image in GALLERY.iter() {
                img { class: "w-full h-64 object-cover rounded-lg", src: image.src, alt: image.alt }
            }
        }
    }
}

#[component]
pub fn RelatedRestaurants() -> Element {
    rsx! {
        h2 { class: "text-2xl font-bold mb-4", "Explore Other Restaurants" }
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-6",
            for restaurant in RELATED_RESTAURANTS.iter() {
                div { class: "bg-white rounded-lg shadow-md overflow-hidden",
                    img { class: "w-full h-48 object-cover", src: restaurant.image, alt: restaurant.name }
                    div { class: "p-4",
                        h3 { class: "text-xl font-semibold mb-2", {restaurant.name} }
                        p { class: "text-gray-600 mb-2", {restaurant.cuisine} }
                        div { class: "flex items-center",
                            div { class: "bg-green-600 text-white px-2 py-1 rounded flex items-center",
                                span { class: "mr-1", "★" }
                                {format!("{:.1}", restaurant.rating)}
                            }
                        }
                    }
                }
            }
        }
    }
}
