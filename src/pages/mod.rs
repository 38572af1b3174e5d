//! Pages
//!
//! Top-level page components, one per view.

pub mod full_menu;
pub mod gifting;
pub mod home;
pub mod legal;
pub mod story;

pub use full_menu::FullMenuPage;
pub use gifting::GiftingPage;
pub use home::HomePage;
pub use legal::LegalPage;
pub use story::StoryPage;
