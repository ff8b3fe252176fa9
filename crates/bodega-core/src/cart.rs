//! # Cart Module
//!
//! The authoritative cart model: line items and the mutation rules that
//! govern them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Mutations                                    │
//! │                                                                         │
//! │  Frontend Action          Storefront Op           Cart Change           │
//! │  ───────────────          ─────────────           ───────────           │
//! │                                                                         │
//! │  Tap "Add +" ────────────► add_to_cart ─────────► merge or append      │
//! │                                                                         │
//! │  Tap +/− stepper ────────► update_quantity ─────► items[i].qty = n     │
//! │                                                                         │
//! │  Tap "Remove" ───────────► remove_from_cart ────► retain(id != x)      │
//! │                                                                         │
//! │  Startup hydration ──────► load ────────────────► wholesale replace    │
//! │                                                                         │
//! │  Clear ──────────────────► clear ───────────────► items.clear()        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one `LineItem` per product id.
//! - Insertion order is stable (display order, not semantically significant).
//! - The UI path keeps quantity ≥ 1 (a decrement at 1 becomes a remove), but
//!   `update_quantity` itself stores whatever it is given. That gap is a
//!   documented behavioral contract, covered by tests below.
//!
//! ## The Merge Quirk
//! `add_item` is deliberately asymmetric: an id already in the cart gets the
//! payload quantity **added**, while a new id is appended with quantity
//! **forced to 1** no matter what the payload says. Callers cannot seed an
//! item at quantity > 1 directly. This is contract, not accident; do not
//! "fix" it without changing the frontend in lockstep.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// One distinct product and its requested quantity in the cart.
///
/// ## Frozen Projection
/// A line item carries a copy of the product fields it needs for display
/// (name, image, category, unit price) taken at add time. If the catalog
/// price changes afterwards, the cart keeps showing what the shopper agreed
/// to.
///
/// ## Wire Format
/// Serialized camelCase so the durable snapshot is the same JSON array of
/// objects the frontend consumes:
/// `{"id", "name", "imageUrl", "category", "unitPrice", "quantity"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Product id this line refers to. Unique within a cart.
    pub id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Product image URL at time of adding (frozen).
    pub image_url: Option<String>,

    /// Browse category at time of adding (frozen).
    pub category: Option<String>,

    /// Price per unit in paise at time of adding (frozen).
    pub unit_price: Money,

    /// Requested quantity. The UI path keeps this ≥ 1; `update_quantity`
    /// does not enforce a floor.
    pub quantity: i64,
}

impl LineItem {
    /// Builds an add-to-cart payload from a catalog product.
    ///
    /// The quantity is conventionally 1 from the UI; whatever is passed here
    /// only matters for the merge path (see [`Cart::add_item`]).
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        LineItem {
            id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            category: product.category.clone(),
            unit_price: product.price(),
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart: an insertion-ordered sequence of line items.
///
/// ## Lifecycle
/// Created empty at process start, hydrated once from the durable slot via
/// [`Cart::load`], then mutated only through the operations below. `clear`
/// empties it; it is never torn down.
///
/// Persistence is the caller's concern: this type is pure state. The
/// storefront layer decides when a mutation triggers a snapshot write.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a payload to the cart, merging on id.
    ///
    /// ## Behavior
    /// - Id already present: the existing line's quantity is incremented by
    ///   the payload's quantity (not reset).
    /// - New id: appended with quantity forced to 1, regardless of the
    ///   payload's quantity field.
    ///
    /// Infallible; there is no cart-size or quantity ceiling.
    pub fn add_item(&mut self, payload: LineItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == payload.id) {
            existing.quantity += payload.quantity;
            return;
        }

        self.items.push(LineItem {
            quantity: 1,
            ..payload
        });
    }

    /// Removes the line item with the given id.
    ///
    /// Returns `true` if something was removed. Removing an absent id is a
    /// no-op (and therefore idempotent).
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Sets the quantity of an existing line item verbatim.
    ///
    /// Returns `true` if the id matched. An absent id leaves the cart
    /// untouched. No floor or ceiling is applied: quantity 0 (or negative)
    /// is stored as-is. The UI never sends ≤ 0 — it translates a decrement
    /// at quantity 1 into a remove — but this operation does not guard
    /// against other callers.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replaces the entire contents, used once at startup to hydrate from
    /// the persisted snapshot.
    pub fn load(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }

    /// Returns the items in insertion order.
    #[inline]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct line items.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Calculates the subtotal: Σ (unit price × quantity).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
