//! # Domain Types
//!
//! Catalog-facing domain types used throughout Bodega.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │ ProductFilter   │   │    Category     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  category?      │   │  id             │       │
//! │  │  name           │   └─────────────────┘   │  name           │       │
//! │  │  price_paise    │                         │  icon           │       │
//! │  │  stock          │                         └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  Products come from the remote catalog; the cart only keeps a frozen   │
//! │  projection of them (see cart::LineItem).                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product as served by the remote catalog.
///
/// Only `id`, `name`, `price_paise`, `image_url`, and `category` are consumed
/// when building cart line items; `description` and `stock` exist for product
/// listings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: String,

    /// Display name shown in product lists and the cart.
    pub name: String,

    /// Price in paise (smallest currency unit).
    pub price_paise: i64,

    /// Product image URL, if the catalog has one.
    pub image_url: Option<String>,

    /// Browse category name (e.g. "Fruits").
    pub category: Option<String>,

    /// Optional long-form description for the detail view.
    pub description: Option<String>,

    /// Units currently in stock.
    pub stock: i64,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_paise(self.price_paise)
    }

    /// Checks whether the product can currently be added to a cart.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Product Filter
// =============================================================================

/// Filter accepted by `ProductCatalog::list`.
///
/// Matches the original storefront's query surface: the only supported
/// filter is an exact category name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductFilter {
    /// Restrict results to a single category.
    pub category: Option<String>,
}

impl ProductFilter {
    /// Builds a filter for one category.
    pub fn for_category(name: impl Into<String>) -> Self {
        ProductFilter {
            category: Some(name.into()),
        }
    }

    /// Checks whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match &self.category {
            Some(wanted) => product.category.as_deref() == Some(wanted.as_str()),
            None => true,
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A browse category tile.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: String,
}

/// The fixed browse taxonomy shown on the categories screen.
pub const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("Fruits", "🍎"),
    ("Vegetables", "🥬"),
    ("Dairy", "🥛"),
    ("Electronics", "📱"),
    ("Clothes", "👕"),
    ("Snacks", "🍿"),
];

/// Materializes the fixed taxonomy as `Category` values.
pub fn categories() -> Vec<Category> {
    CATEGORY_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, icon))| Category {
            id: i as u32 + 1,
            name: (*name).to_string(),
            icon: (*icon).to_string(),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(category: Option<&str>) -> Product {
        Product {
            id: "p-1".into(),
            name: "Alphonso Mango".into(),
            price_paise: 14900,
            image_url: None,
            category: category.map(Into::into),
            description: None,
            stock: 12,
        }
    }

    #[test]
    fn test_filter_matches_category() {
        let fruits = ProductFilter::for_category("Fruits");
        assert!(fruits.matches(&product(Some("Fruits"))));
        assert!(!fruits.matches(&product(Some("Dairy"))));
        assert!(!fruits.matches(&product(None)));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let all = ProductFilter::default();
        assert!(all.matches(&product(Some("Fruits"))));
        assert!(all.matches(&product(None)));
    }

    #[test]
    fn test_categories_are_stable() {
        let cats = categories();
        assert_eq!(cats.len(), 6);
        assert_eq!(cats[0].name, "Fruits");
        assert_eq!(cats[0].id, 1);
    }

    #[test]
    fn test_in_stock() {
        let mut p = product(None);
        assert!(p.in_stock());
        p.stock = 0;
        assert!(!p.in_stock());
    }
}
