//! # Bodega Storefront
//!
//! The presentation boundary: everything the mobile frontend talks to.
//!
//! ## Module Organization
//! ```text
//! bodega_storefront/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── catalog.rs      ◄─── ProductCatalog trait + in-memory implementation
//! ├── store.rs        ◄─── CartStore state container + Storefront facade
//! ├── error.rs        ◄─── API error type for the frontend
//! └── main.rs         ◄─── Demo binary (scripted shopping session)
//! ```
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Control Flow                             │
//! │                                                                         │
//! │  Frontend ──► Storefront::browse ─────► ProductCatalog::list           │
//! │                    │                         │                          │
//! │                    │                 CatalogError? ──► ApiError         │
//! │                    │                                  (retryable: the  │
//! │                    │                                   UI shows a      │
//! │                    │                                   Retry button)   │
//! │                    ▼                                                    │
//! │  Frontend ──► Storefront::add_product ──► CartStore::add_to_cart      │
//! │                                               │                         │
//! │                                               ├── Cart mutation        │
//! │                                               │   (in memory, sync)    │
//! │                                               └── snapshot enqueue     │
//! │                                                   (write-behind,       │
//! │                                                    never awaited)      │
//! │                                                                         │
//! │  Frontend ──► CartStore::view ──► items + PricingSummary               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod error;
pub mod store;

pub use catalog::{CatalogError, MemoryCatalog, ProductCatalog};
pub use error::{ApiError, ErrorCode};
pub use store::{CartStore, CartView, Storefront};
