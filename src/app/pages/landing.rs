//! Landing page: hero with the gated action bar, then the content sections.

use dioxus::prelude::*;

use crate::app::components::{
    Hero, InfoSection, Layout, MenuSection, PhotoGallery, RelatedRestaurants,
};
use crate::content::VENUE;

#[component]
pub fn Landing() -> Element {
    rsx! {
        Layout { title: VENUE.name.to_string(),
            Hero {}
            div { class: "max-w-7xl mx-auto px-4 py-8",
                MenuSection {}
                InfoSection {}
                PhotoGallery {}
                RelatedRestaurants {}
            }
        }
    }
}
