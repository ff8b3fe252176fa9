//! # bodega-core: Pure Business Logic for Bodega
//!
//! This crate is the **heart** of the Bodega grocery storefront. It contains
//! all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bodega Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile Frontend (React Native)                  │   │
//! │  │    Home Screen ──► Category Screen ──► Cart Screen             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 bodega-storefront (boundary)                    │   │
//! │  │    browse, add_to_cart, update_quantity, remove, clear         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bodega-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ delivery  │  │   │
//! │  │   │  Category │  │  (paise)  │  │ LineItem  │  │  fee rule │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 bodega-store (Storage Layer)                    │   │
//! │  │          Durable cart slot, write-behind snapshots              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductFilter, Category)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart: line items and mutation rules
//! - [`pricing`] - Subtotal, delivery fee, and total derivation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Contract Fidelity**: Cart mutation quirks are documented behavior, not bugs

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use cart::{Cart, LineItem};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use pricing::{PricingSummary, DELIVERY_FEE, FREE_DELIVERY_THRESHOLD};
pub use types::{Category, Product, ProductFilter};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The durable storage key under which the cart snapshot lives.
///
/// ## Why a constant?
/// The slot key is part of the persisted contract: a snapshot written by one
/// process version must be found by the next. Both bodega-store and any
/// future migration tooling reference this single definition.
pub const CART_SLOT_KEY: &str = "cart";
