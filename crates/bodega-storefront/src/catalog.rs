//! # Product Catalog Seam
//!
//! The read interface to the remote product catalog, and an in-process
//! implementation for tests and the demo binary.
//!
//! The real catalog is an external collaborator (a remote products API).
//! The storefront only ever consumes `list(filter?)`; everything else about
//! that service is out of scope here.
//!
//! ## Failure Contract
//! Catalog failures are the one error class the user actually sees: the
//! screens render the message with a manual Retry button. Every
//! `CatalogError` is therefore retryable, in contrast to storage failures
//! which are swallowed entirely (see bodega-store).

use async_trait::async_trait;
use thiserror::Error;

use bodega_core::types::{Product, ProductFilter};

// =============================================================================
// Catalog Error
// =============================================================================

/// Catalog fetch errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be reached or answered with a failure.
    #[error("Failed to load products: {0}")]
    Unavailable(String),

    /// The catalog answered with a payload we could not understand.
    #[error("Catalog returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl CatalogError {
    /// Whether the UI should offer a manual retry. Always true today: a
    /// catalog problem is transient from the shopper's point of view.
    pub const fn is_retryable(&self) -> bool {
        true
    }
}

// =============================================================================
// Product Catalog Trait
// =============================================================================

/// Read interface over the product catalog.
///
/// `None` lists everything (home screen); a filter narrows to one category
/// (category screen).
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Lists products, optionally filtered.
    async fn list(&self, filter: Option<&ProductFilter>) -> Result<Vec<Product>, CatalogError>;
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// In-process catalog backed by a fixed product list.
///
/// Used by the demo binary and tests. Stands in for the remote API without
/// changing anything downstream of the trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: Vec<Product>,
}

impl MemoryCatalog {
    /// Creates a catalog over the given products.
    pub fn new(products: Vec<Product>) -> Self {
        MemoryCatalog { products }
    }

    /// Creates a catalog seeded with a realistic grocery assortment.
    pub fn seeded() -> Self {
        MemoryCatalog::new(seed_products())
    }
}

#[async_trait]
impl ProductCatalog for MemoryCatalog {
    async fn list(&self, filter: Option<&ProductFilter>) -> Result<Vec<Product>, CatalogError> {
        let products = match filter {
            Some(filter) => self
                .products
                .iter()
                .filter(|p| filter.matches(p))
                .cloned()
                .collect(),
            None => self.products.clone(),
        };
        Ok(products)
    }
}

// =============================================================================
// Seed Data
// =============================================================================

/// Grocery assortment for the demo binary: name, category, price in paise,
/// stock.
const SEED: &[(&str, &str, i64, i64)] = &[
    ("Alphonso Mango 1kg", "Fruits", 14900, 18),
    ("Banana Robusta 1kg", "Fruits", 4500, 60),
    ("Shimla Apple 1kg", "Fruits", 18900, 25),
    ("Pomegranate 500g", "Fruits", 9900, 14),
    ("Spinach Bunch", "Vegetables", 2500, 40),
    ("Tomato Hybrid 1kg", "Vegetables", 3900, 80),
    ("Onion 1kg", "Vegetables", 3500, 100),
    ("Lady Finger 500g", "Vegetables", 3200, 35),
    ("Toned Milk 1L", "Dairy", 6400, 50),
    ("Paneer 200g", "Dairy", 9500, 22),
    ("Curd 400g", "Dairy", 4800, 30),
    ("Salted Butter 100g", "Dairy", 5600, 16),
    ("Potato Chips Classic", "Snacks", 2000, 90),
    ("Masala Peanuts 200g", "Snacks", 4500, 45),
    ("Chocolate Cookies", "Snacks", 3500, 0), // out of stock on purpose
    ("Earbuds Basic", "Electronics", 79900, 8),
    ("Phone Charger 20W", "Electronics", 59900, 12),
    ("Cotton T-Shirt", "Clothes", 49900, 20),
];

/// Materializes the seed assortment with generated ids.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|(name, category, price_paise, stock)| Product {
            id: uuid::Uuid::new_v4().to_string(),
            name: (*name).to_string(),
            price_paise: *price_paise,
            image_url: Some(format!(
                "https://cdn.bodega.example/{}.jpg",
                name.to_lowercase().replace(' ', "-")
            )),
            category: Some((*category).to_string()),
            description: None,
            stock: *stock,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_unfiltered_returns_everything() {
        let catalog = MemoryCatalog::seeded();
        let all = catalog.list(None).await.unwrap();
        assert_eq!(all.len(), SEED.len());
    }

    #[tokio::test]
    async fn test_list_filters_by_category() {
        let catalog = MemoryCatalog::seeded();
        let filter = ProductFilter::for_category("Dairy");

        let dairy = catalog.list(Some(&filter)).await.unwrap();
        assert_eq!(dairy.len(), 4);
        assert!(dairy.iter().all(|p| p.category.as_deref() == Some("Dairy")));
    }

    #[tokio::test]
    async fn test_unknown_category_is_empty_not_error() {
        let catalog = MemoryCatalog::seeded();
        let filter = ProductFilter::for_category("Spaceships");

        let none = catalog.list(Some(&filter)).await.unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_catalog_errors_are_retryable() {
        assert!(CatalogError::Unavailable("timeout".into()).is_retryable());
        assert!(CatalogError::InvalidResponse("not json".into()).is_retryable());
    }
}
