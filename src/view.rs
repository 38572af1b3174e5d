//! Views
//!
//! The closed set of pages the site can display, with the address and
//! metadata contract for each. Exactly one view is active at a time.

/// Identifier of the currently displayed page
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum View {
    Home,
    FullMenu,
    Gifting,
    Story,
    Privacy,
    Terms,
    Refund,
}

impl View {
    /// Resolve a view from an address path. Prefixes are checked in fixed
    /// priority order; anything unrecognized degrades to `Home`.
    pub fn from_path(path: &str) -> View {
        if path.starts_with("/menu") {
            View::FullMenu
        } else if path.starts_with("/gifting") {
            View::Gifting
        } else if path.starts_with("/story") {
            View::Story
        } else if path.starts_with("/privacy") {
            View::Privacy
        } else if path.starts_with("/terms") {
            View::Terms
        } else if path.starts_with("/refund") {
            View::Refund
        } else {
            View::Home
        }
    }

    /// Canonical address path for this view
    pub fn path(self) -> &'static str {
        match self {
            View::Home => "/",
            View::FullMenu => "/menu",
            View::Gifting => "/gifting",
            View::Story => "/story",
            View::Privacy => "/privacy",
            View::Terms => "/terms",
            View::Refund => "/refund",
        }
    }

    /// Document title and meta-description pair for this view
    pub fn metadata(self) -> (&'static str, &'static str) {
        match self {
            View::Home => (
                "Madhuvan Sweets | Pure Desi Ghee Mithai in Haldwani",
                "Traditional Kumaoni sweets made fresh daily with 100% pure desi ghee. \
                 Visit Madhuvan Sweets in Haldwani.",
            ),
            View::FullMenu => (
                "Our Menu | Madhuvan Sweets - Fresh Mithai & Namkeen",
                "Browse the full Madhuvan Sweets menu of mithai, namkeen and seasonal \
                 specials, freshly prepared every morning.",
            ),
            View::Gifting => (
                "Gifting & Bulk Orders | Madhuvan Sweets",
                "Wedding boxes, corporate hampers and bulk sweet orders, packed and \
                 delivered across Haldwani by Madhuvan Sweets.",
            ),
            View::Story => (
                "Our Story | Madhuvan Sweets - A Family Kitchen Since 2009",
                "How a small family kitchen in the Kumaon hills grew into Haldwani's \
                 favourite sweet shop.",
            ),
            View::Privacy => (
                "Privacy Policy | Madhuvan Sweets",
                "How the Madhuvan Sweets website handles your information.",
            ),
            View::Terms => (
                "Terms of Service | Madhuvan Sweets",
                "Terms of service for orders placed with Madhuvan Sweets.",
            ),
            View::Refund => (
                "Refund Policy | Madhuvan Sweets",
                "Refund and cancellation policy for Madhuvan Sweets orders.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_canonical_path_resolves_to_its_view() {
        let views = [
            View::Home,
            View::FullMenu,
            View::Gifting,
            View::Story,
            View::Privacy,
            View::Terms,
            View::Refund,
        ];
        for view in views {
            assert_eq!(View::from_path(view.path()), view);
        }
    }

    #[test]
    fn test_unknown_paths_degrade_to_home() {
        assert_eq!(View::from_path("/checkout"), View::Home);
        assert_eq!(View::from_path(""), View::Home);
        assert_eq!(View::from_path("/menus-of-the-world"), View::FullMenu);
    }

    #[test]
    fn test_metadata_pairs_are_distinct_titles() {
        let views = [
            View::Home,
            View::FullMenu,
            View::Gifting,
            View::Story,
            View::Privacy,
            View::Terms,
            View::Refund,
        ];
        let mut titles: Vec<&str> = views.iter().map(|v| v.metadata().0).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), views.len());
    }
}
