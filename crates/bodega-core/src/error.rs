//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bodega-core errors (this file)                                        │
//! │  └── CoreError      - Business rule violations                         │
//! │                                                                         │
//! │  bodega-store errors (separate crate)                                  │
//! │  └── StoreError     - Durable slot read/write failures                 │
//! │                                                                         │
//! │  bodega-storefront errors                                              │
//! │  ├── CatalogError   - Remote catalog failures (retryable)              │
//! │  └── ApiError       - What the frontend sees (serialized)              │
//! │                                                                         │
//! │  Flow: CoreError / CatalogError → ApiError → Frontend                  │
//! │        StoreError → tracing::warn! (swallowed, never surfaced)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note how small this is: the cart mutations themselves are infallible by
//! contract (malformed quantities are accepted, absent ids are no-ops), so
//! the only domain failures live at the catalog-resolution seam.

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - Product id doesn't exist in the catalog listing
    /// - Product was delisted between browse and add
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product exists but has no stock left.
    #[error("Product out of stock: {0}")]
    OutOfStock(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound("p-42".to_string());
        assert_eq!(err.to_string(), "Product not found: p-42");

        let err = CoreError::OutOfStock("p-7".to_string());
        assert_eq!(err.to_string(), "Product out of stock: p-7");
    }
}
