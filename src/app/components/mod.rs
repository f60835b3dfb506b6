//! UI components for the landing page.

pub mod auth_modal;
pub mod banner;
pub mod google_signin;
pub mod hero;
pub mod layout;
pub mod sections;

pub use auth_modal::AuthModal;
pub use banner::{Banner, BannerKind};
pub use hero::Hero;
pub use layout::Layout;
pub use sections::{InfoSection, MenuSection, PhotoGallery, RelatedRestaurants};
