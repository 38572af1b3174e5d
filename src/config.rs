//! Site Configuration
//!
//! Fixed constants for the shop plus a localStorage override for the menu
//! feed, so a staging sheet can be pointed at without a rebuild.

use crate::view::View;

/// Default Google Sheet backing the menu feed
pub const DEFAULT_SHEET_ID: &str = "1Qx7PbVqWJ3kzn0F8mRtYc2eGdHs5uLao6iBvN9jTKXw";

/// WhatsApp number for the order deep link (country code, no plus)
pub const WHATSAPP_NUMBER: &str = "919812045670";

/// Category banner used when the feed supplies no image for a category
pub const FALLBACK_CATEGORY_IMAGE: &str =
    "https://images.unsplash.com/photo-1589119908995-c6837fa14848?auto=format&fit=crop&q=80&w=800";

/// One entry in the main navigation
#[derive(Clone, Copy)]
pub struct NavItem {
    pub label: &'static str,
    pub view: View,
    pub anchor: Option<&'static str>,
}

/// Main navigation, in display order
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Home", view: View::Home, anchor: None },
    NavItem { label: "Our Story", view: View::Home, anchor: Some("story") },
    NavItem { label: "Menu", view: View::FullMenu, anchor: None },
    NavItem { label: "Gifting & Bulk", view: View::Gifting, anchor: None },
    NavItem { label: "Contact", view: View::Home, anchor: Some("contact") },
];

/// Get the menu sheet id from local storage or use the default
pub fn get_sheet_id() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(id)) = storage.get_item("madhuvan_sheet_id") {
                return id;
            }
        }
    }
    DEFAULT_SHEET_ID.to_string()
}
