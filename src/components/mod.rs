//! UI Components
//!
//! Reusable Leptos components for the site.

pub mod boundary;
pub mod contact;
pub mod faq;
pub mod featured;
pub mod footer;
pub mod hero;
pub mod loading;
pub mod menu_section;
pub mod navbar;
pub mod whatsapp;

pub use boundary::SectionBoundary;
pub use contact::ContactInfo;
pub use faq::Faq;
pub use featured::FeaturedSweets;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::Loading;
pub use menu_section::MenuSection;
pub use navbar::Navbar;
pub use whatsapp::FloatingWhatsApp;
