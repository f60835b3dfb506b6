//! Static landing page content.

use chrono::NaiveTime;

use crate::gate::ActionTarget;

pub struct Venue {
    pub name: &'static str,
    pub cuisines: &'static str,
    pub rating: f32,
    pub rating_count: &'static str,
    pub verified_by: &'static str,
    pub address: &'static str,
    pub hours_label: &'static str,
    pub phone: &'static str,
    pub hero_image: &'static str,
}

impl Venue {
    /// Google Maps directions link for the venue address
    pub fn directions_url(&self) -> String {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={}",
            urlencoding::encode(self.address)
        )
    }
}

pub const VENUE: Venue = Venue {
    name: "Sher E Punjab",
    cuisines: "North Indian, Punjabi, Chinese",
    rating: 4.2,
    rating_count: "2K+ Ratings",
    verified_by: "Enerzyflow",
    address: "Kona Expressway, Howrah, West Bengal",
    hours_label: "Open 11 AM - 11 PM",
    phone: "+91 1234567890",
    hero_image: "https://images.unsplash.com/photo-1579684947550-22e945225d9a?ixlib=rb-1.2.1&auto=format&fit=crop&w=2000&q=80",
};

/// Icon shown on a quick action tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionIcon {
    Utensils,
    Coffee,
    Pizza,
    Beer,
}

impl ActionIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ActionIcon::Utensils => "🍽",
            ActionIcon::Coffee => "☕",
            ActionIcon::Pizza => "🍕",
            ActionIcon::Beer => "🍺",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct QuickAction {
    pub title: &'static str,
    pub icon: ActionIcon,
    pub target: ActionTarget,
    /// Tailwind background class
    pub color: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Order Online",
        icon: ActionIcon::Utensils,
        target: ActionTarget::Gated { url: "#order" },
        color: "bg-orange-500",
    },
    QuickAction {
        title: "Book Table",
        icon: ActionIcon::Coffee,
        target: ActionTarget::Gated { url: "#book" },
        color: "bg-blue-500",
    },
    QuickAction {
        title: "Menu",
        icon: ActionIcon::Pizza,
        target: ActionTarget::Scroll { anchor: MENU_ANCHOR },
        color: "bg-green-500",
    },
    QuickAction {
        title: "Reviews",
        icon: ActionIcon::Beer,
        target: ActionTarget::Gated { url: "#reviews" },
        color: "bg-purple-500",
    },
];

/// Element id of the menu section
pub const MENU_ANCHOR: &str = "menu";

pub struct MenuItem {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

pub struct MenuCategory {
    pub category: &'static str,
    pub items: &'static [MenuItem],
}

pub const MENU: &[MenuCategory] = &[
    MenuCategory {
        category: "Recommended",
        items: &[
            MenuItem {
                name: "Butter Chicken",
                price: "₹320",
                description: "Creamy tomato based curry with tender chicken",
            },
            MenuItem {
                name: "Veg Biryani",
                price: "₹220",
                description: "Aromatic rice with mixed vegetables",
            },
            MenuItem {
                name: "Paneer Butter Masala",
                price: "₹280",
                description: "Cottage cheese in rich tomato gravy",
            },
        ],
    },
    MenuCategory {
        category: "Chinese",
        items: &[
            MenuItem {
                name: "Chilli Chicken",
                price: "₹280",
                description: "Spicy Indo-Chinese chicken preparation",
            },
            MenuItem {
                name: "Veg Hakka Noodles",
                price: "₹180",
                description: "Stir-fried noodles with vegetables",
            },
            MenuItem {
                name: "Manchurian",
                price: "₹220",
                description: "Vegetable balls in spicy sauce",
            },
        ],
    },
];

pub const FEATURES: &[&str] = &[
    "Home Delivery Available",
    "Indoor Seating",
    "Air Conditioned",
    "Accepts Cards",
    "Family Friendly",
];

/// Daily opening window
pub struct OpeningHours {
    pub days: &'static str,
    pub opens: (u32, u32),
    pub closes: (u32, u32),
}

impl OpeningHours {
    fn time((hour, minute): (u32, u32)) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Whether `now` falls inside the window; windows past midnight wrap.
    pub fn is_open_at(&self, now: NaiveTime) -> bool {
        let opens = Self::time(self.opens);
        let closes = Self::time(self.closes);
        if opens <= closes {
            now >= opens && now < closes
        } else {
            now >= opens || now < closes
        }
    }

    /// "11:00 AM - 11:00 PM"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            Self::time(self.opens).format("%I:%M %p"),
            Self::time(self.closes).format("%I:%M %p")
        )
    }
}

pub const OPENING_HOURS: OpeningHours = OpeningHours {
    days: "Monday - Sunday",
    opens: (11, 0),
    closes: (23, 0),
};

pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage {
        src: "https://images.unsplash.com/photo-1546833999-b9f581a1996d?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        alt: "Restaurant Food",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1585937421612-70a008356fbe?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        alt: "Restaurant Food",
    },
    GalleryImage {
        src: "https://images.unsplash.com/photo-1574653853027-5382a3d23c10?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
        alt: "Restaurant Food",
    },
];

pub struct RelatedRestaurant {
    pub name: &'static str,
    pub cuisine: &'static str,
    pub rating: f32,
    pub image: &'static str,
}

pub const RELATED_RESTAURANTS: &[RelatedRestaurant] = &[
    RelatedRestaurant {
        name: "Spice Garden",
        cuisine: "North Indian, Mughlai",
        rating: 4.0,
        image: "https://images.unsplash.com/photo-1514516345957-556ca7c90a29?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
    RelatedRestaurant {
        name: "The Chinese Room",
        cuisine: "Chinese, Thai",
        rating: 4.3,
        image: "https://images.unsplash.com/photo-1525648199074-cee30ba79a4a?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
    RelatedRestaurant {
        name: "Café Boulevard",
        cuisine: "Continental, Café",
        rating: 4.1,
        image: "https://images.unsplash.com/photo-1554118811-1e0d58224f24?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
];
