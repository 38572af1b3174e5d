//! Menu Ingestion
//!
//! Fetches the menu feed from a spreadsheet CSV export and groups it into
//! categories. The feed is best-effort: the site renders without it, so
//! every failure here collapses to an empty result plus a console line.

use gloo_net::http::Request;
use std::collections::HashMap;

use crate::config;

pub mod csv;

/// One purchasable product, immutable once parsed
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Option<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

/// A named grouping of menu items, in first-seen feed order
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MenuCategory {
    /// Slug of the title; stable and anchor-safe
    pub id: String,
    /// Display title as it appeared in the feed
    pub title: String,
    /// Banner image from the feed, if any row supplied one
    pub image: Option<String>,
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    /// Banner image URL, falling back to the fixed default
    pub fn image_url(&self) -> &str {
        self.image
            .as_deref()
            .unwrap_or(config::FALLBACK_CATEGORY_IMAGE)
    }
}

/// Derive the anchor-safe identifier for a category title: lowercased,
/// whitespace runs collapsed to single hyphens.
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Group parsed feed rows into categories.
///
/// The first row is a discarded header. Each data row is positionally
/// (category, name, price, unit, description, category image); rows missing
/// a category or a name are dropped whole. Categories merge by slug, so
/// duplicate titles (including case/spacing variants) collect into one
/// category in original item order. A category's image comes from the first
/// row that supplies one.
pub fn build_categories(rows: &[Vec<String>]) -> Vec<MenuCategory> {
    let mut categories: Vec<MenuCategory> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows.iter().skip(1) {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
        let optional = |i: usize| {
            let value = cell(i);
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        let category = cell(0);
        let name = cell(1);
        if category.is_empty() || name.is_empty() {
            continue;
        }

        let id = slugify(category);
        let slot = match index.get(&id) {
            Some(&slot) => slot,
            None => {
                categories.push(MenuCategory {
                    id: id.clone(),
                    title: category.to_string(),
                    image: None,
                    items: Vec::new(),
                });
                index.insert(id, categories.len() - 1);
                categories.len() - 1
            }
        };

        if categories[slot].image.is_none() {
            categories[slot].image = optional(5);
        }

        categories[slot].items.push(MenuItem {
            name: name.to_string(),
            price: optional(2),
            unit: optional(3),
            description: optional(4),
        });
    }

    categories
}

/// Fetch and parse the menu feed for `sheet_id`.
///
/// Never fails past this boundary: network errors, bad statuses and parse
/// trouble all resolve to an empty category list with a console diagnostic.
pub async fn fetch_menu(sheet_id: &str) -> Vec<MenuCategory> {
    match try_fetch(sheet_id).await {
        Ok(categories) => categories,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load menu feed: {}", e).into());
            Vec::new()
        }
    }
}

async fn try_fetch(sheet_id: &str) -> Result<Vec<MenuCategory>, String> {
    // The gviz endpoint serves the sheet as CSV without authentication
    let url = format!(
        "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv",
        sheet_id
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Feed returned status {}", response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    Ok(build_categories(&csv::parse(&body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("Dry Fruit  Sweets"), "dry-fruit-sweets");
        assert_eq!(slugify("Namkeen"), "namkeen");
    }

    #[test]
    fn test_header_only_feed_yields_no_categories() {
        let rows = csv::parse("Category,Name,Price,Unit,Description,Image\n");
        assert!(build_categories(&rows).is_empty());
    }

    #[test]
    fn test_rows_missing_category_or_name_are_dropped() {
        let feed = "Category,Name,Price\n\
                    Sweets,Bal Mithai,80\n\
                    ,Orphan Item,10\n\
                    Snacks,,15\n\
                    Snacks,Samosa,20\n";
        let categories = build_categories(&csv::parse(feed));

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].items.len(), 1);
        assert_eq!(categories[1].items.len(), 1);
        assert_eq!(categories[1].items[0].name, "Samosa");
    }

    #[test]
    fn test_duplicate_category_titles_merge_by_slug() {
        let feed = "Category,Name\n\
                    Dry Fruit Sweets,Kaju Katli\n\
                    DRY  FRUIT SWEETS,Badam Barfi\n";
        let categories = build_categories(&csv::parse(feed));

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].id, "dry-fruit-sweets");
        // Display title comes from the first-seen spelling
        assert_eq!(categories[0].title, "Dry Fruit Sweets");
        let names: Vec<&str> = categories[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Kaju Katli", "Badam Barfi"]);
    }

    #[test]
    fn test_first_supplied_image_wins() {
        let feed = "Category,Name,Price,Unit,Description,Image\n\
                    Sweets,Bal Mithai,80,,,\n\
                    Sweets,Jalebi,60,,,https://example.com/late.jpg\n\
                    Sweets,Singodi,70,,,https://example.com/later.jpg\n";
        let categories = build_categories(&csv::parse(feed));

        assert_eq!(categories.len(), 1);
        // The first row had no image, so the first row that supplies one fills it
        assert_eq!(categories[0].image_url(), "https://example.com/late.jpg");
    }

    #[test]
    fn test_missing_image_falls_back_to_default() {
        let feed = "Category,Name\nSweets,Bal Mithai\n";
        let categories = build_categories(&csv::parse(feed));
        assert_eq!(categories[0].image_url(), config::FALLBACK_CATEGORY_IMAGE);
    }

    #[test]
    fn test_two_category_feed_end_to_end() {
        let feed = "Category,Name,Price\n\
                    Sweets,Bal Mithai,80\n\
                    Sweets,Jalebi,60\n\
                    Snacks,Samosa,20\n";
        let categories = build_categories(&csv::parse(feed));

        assert_eq!(categories.len(), 2);

        let sweets = &categories[0];
        assert_eq!(sweets.id, "sweets");
        let names: Vec<&str> = sweets.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bal Mithai", "Jalebi"]);
        assert_eq!(sweets.items[0].price.as_deref(), Some("80"));
        assert_eq!(sweets.items[0].unit, None);
        assert_eq!(sweets.image_url(), config::FALLBACK_CATEGORY_IMAGE);

        let snacks = &categories[1];
        assert_eq!(snacks.id, "snacks");
        assert_eq!(snacks.items.len(), 1);
        assert_eq!(snacks.items[0].name, "Samosa");
        assert_eq!(snacks.image_url(), config::FALLBACK_CATEGORY_IMAGE);
    }

    #[test]
    fn test_quoted_feed_values_keep_embedded_delimiters() {
        let feed = "Category,Name,Price,Unit,Description\n\
                    \"Sweets, Snacks\",\"Bal \"\"Mithai\"\"\",80,per kg,\"Soft, fudgy\"\n";
        let categories = build_categories(&csv::parse(feed));

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].title, "Sweets, Snacks");
        assert_eq!(categories[0].id, "sweets,-snacks");
        assert_eq!(categories[0].items[0].name, "Bal \"Mithai\"");
        assert_eq!(categories[0].items[0].description.as_deref(), Some("Soft, fudgy"));
    }
}
