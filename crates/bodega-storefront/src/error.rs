//! # API Error Type
//!
//! Unified error type for the presentation boundary.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bodega                                 │
//! │                                                                         │
//! │  Frontend                       Rust Backend                            │
//! │  ────────                       ────────────                            │
//! │                                                                         │
//! │  browse() ────────────────────► CatalogError ──► ApiError              │
//! │                                                  retryable: true       │
//! │     UI: error banner + Retry button                                    │
//! │                                                                         │
//! │  add_product() ───────────────► CoreError ─────► ApiError              │
//! │                                                  retryable: false      │
//! │     UI: toast, no retry                                                │
//! │                                                                         │
//! │  cart mutations ──────────────► (infallible — storage failures are     │
//! │                                  logged in bodega-store and never      │
//! │                                  reach this type)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Serialized camelCase so the frontend can branch on `code` and decide on
//! the retry affordance from `retryable`.

use serde::Serialize;

use bodega_core::CoreError;

use crate::catalog::CatalogError;

/// API error returned across the presentation boundary.
///
/// This is what the frontend receives when an operation fails:
/// ```json
/// {
///   "code": "CATALOG_ERROR",
///   "message": "Failed to load products: timeout",
///   "retryable": true
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Whether the UI should offer a manual retry
    pub retryable: bool,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product (or other resource) not found
    NotFound,

    /// Product cannot be added (e.g. out of stock)
    OutOfStock,

    /// Catalog fetch failed
    CatalogError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>, retryable: bool) -> Self {
        ApiError {
            code,
            message: message.into(),
            retryable,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
            false,
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message, false)
    }
}

/// Converts catalog errors to API errors. Catalog problems are the
/// retryable class: the UI renders the message with a Retry button.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let retryable = err.is_retryable();
        ApiError::new(ErrorCode::CatalogError, err.to_string(), retryable)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::OutOfStock(id) => ApiError::new(
                ErrorCode::OutOfStock,
                format!("Product out of stock: {}", id),
                false,
            ),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_maps_retryable() {
        let api: ApiError = CatalogError::Unavailable("timeout".into()).into();
        assert_eq!(api.code, ErrorCode::CatalogError);
        assert!(api.retryable);
    }

    #[test]
    fn test_core_error_maps_not_retryable() {
        let api: ApiError = CoreError::ProductNotFound("p-1".into()).into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert!(!api.retryable);
    }

    #[test]
    fn test_serialized_shape() {
        let api = ApiError::not_found("Product", "p-1");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["retryable"], false);
    }
}
