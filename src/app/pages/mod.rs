//! Dioxus fullstack page components.

mod landing;

pub use landing::Landing;
