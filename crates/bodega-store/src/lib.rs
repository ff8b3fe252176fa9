//! # bodega-store: Durable Storage for the Cart
//!
//! Owns the single durable key-value slot that keeps the cart alive across
//! app restarts, and the write-behind queue that feeds it.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Durable Cart Slot                                 │
//! │                                                                         │
//! │  Key: "cart"  ──►  <data dir>/cart.json                                │
//! │                                                                         │
//! │  Contents: the full ordered line-item sequence, JSON array of objects  │
//! │  [                                                                      │
//! │    {"id":"p-1","name":"Mango","imageUrl":...,"unitPrice":14900,        │
//! │     "category":"Fruits","quantity":2},                                 │
//! │    ...                                                                  │
//! │  ]                                                                      │
//! │                                                                         │
//! │  • Overwritten wholesale after every mutation                          │
//! │  • Read exactly once, at startup, for hydration                        │
//! │  • Not a database: one key, one value, no queries                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`slot`] - the slot itself: load/save of the snapshot file
//! - [`writer`] - write-behind queue: mutations enqueue, one task drains
//! - [`error`] - storage error types (logged, never surfaced to users)

pub mod error;
pub mod slot;
pub mod writer;

pub use error::{StoreError, StoreResult};
pub use slot::CartSlot;
pub use writer::{SnapshotWriter, SnapshotWriterHandle};
