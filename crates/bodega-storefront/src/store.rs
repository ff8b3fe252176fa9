//! # Cart Store & Storefront Facade
//!
//! The explicit cart state container and the facade the frontend calls.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple frontend calls may access/modify the cart
//! 2. Only one call should modify the cart at a time
//! 3. Mutations are quick, in-memory, and synchronous
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              Which mutation persists a snapshot?                        │
//! │                                                                         │
//! │  add_to_cart        ──► always                                         │
//! │  remove_from_cart   ──► always, EVEN when the id was absent            │
//! │                         (storage stays consistent with memory)         │
//! │  update_quantity    ──► only when the id matched                       │
//! │                         (asymmetric with remove — callers must not     │
//! │                          rely on a persistence write for absent ids)   │
//! │  clear_cart         ──► always (persists an empty snapshot)           │
//! │  hydrate            ──► never (state is already durable)              │
//! │                                                                         │
//! │  A snapshot is the FULL line-item sequence, enqueued on the            │
//! │  write-behind queue; the mutation returns before the write settles.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::{debug, warn};

use bodega_core::cart::{Cart, LineItem};
use bodega_core::pricing::{self, PricingSummary};
use bodega_core::types::{Product, ProductFilter};
use bodega_core::CoreError;
use bodega_store::{CartSlot, SnapshotWriterHandle};

use crate::catalog::ProductCatalog;
use crate::error::ApiError;

// =============================================================================
// Cart View
// =============================================================================

/// Cart contents plus derived pricing, ready to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub pricing: PricingSummary,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items().to_vec(),
            pricing: pricing::quote(cart),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// The single source of truth for cart contents.
///
/// Owned by the application root and passed to whatever needs it — there is
/// no ambient singleton. Mutations run synchronously against the in-memory
/// cart; durability rides the write-behind queue.
#[derive(Clone)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
    writer: SnapshotWriterHandle,
}

impl CartStore {
    /// Creates an empty cart store wired to a snapshot writer.
    pub fn new(writer: SnapshotWriterHandle) -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(Cart::new())),
            writer,
        }
    }

    /// One-shot startup hydration from the durable slot.
    ///
    /// A read failure is logged and the cart starts empty — never fatal,
    /// never surfaced. Does not write back: the slot already holds what we
    /// just read.
    pub async fn hydrate(&self, slot: &CartSlot) {
        match slot.load().await {
            Ok(Some(items)) => {
                debug!(items = items.len(), "Hydrating cart from snapshot");
                self.with_cart_mut(|cart| cart.load(items));
            }
            Ok(None) => {
                debug!("No cart snapshot, starting empty");
            }
            Err(e) => {
                warn!(error = %e, "Cart hydration failed, starting empty");
            }
        }
    }

    /// Adds a payload to the cart (merge-on-id) and persists.
    pub fn add_to_cart(&self, payload: LineItem) -> CartView {
        debug!(id = %payload.id, quantity = payload.quantity, "add_to_cart");
        self.mutate_and_persist(|cart| cart.add_item(payload))
    }

    /// Removes a line item and persists — even when the id was absent, so
    /// storage stays consistent with memory.
    pub fn remove_from_cart(&self, id: &str) -> CartView {
        debug!(%id, "remove_from_cart");
        self.mutate_and_persist(|cart| {
            cart.remove_item(id);
        })
    }

    /// Sets a line item's quantity verbatim; persists only when the id
    /// matched. No floor is applied here (see bodega-core).
    pub fn update_quantity(&self, id: &str, quantity: i64) -> CartView {
        debug!(%id, quantity, "update_quantity");

        let (view, snapshot) = {
            let mut cart = self.lock();
            let matched = cart.update_quantity(id, quantity);
            let snapshot = matched.then(|| cart.items().to_vec());
            (CartView::from(&*cart), snapshot)
        };

        if let Some(snapshot) = snapshot {
            self.writer.enqueue(snapshot);
        }
        view
    }

    /// Empties the cart and persists an empty snapshot.
    pub fn clear_cart(&self) -> CartView {
        debug!("clear_cart");
        self.mutate_and_persist(Cart::clear)
    }

    /// Read path: current items plus derived pricing.
    pub fn view(&self) -> CartView {
        CartView::from(&*self.lock())
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the cart. No snapshot is
    /// enqueued; prefer the named operations for anything user-facing.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        f(&mut self.lock())
    }

    /// Runs a mutation, then enqueues the resulting full snapshot.
    fn mutate_and_persist<F>(&self, f: F) -> CartView
    where
        F: FnOnce(&mut Cart),
    {
        let (view, snapshot) = {
            let mut cart = self.lock();
            f(&mut cart);
            (CartView::from(&*cart), cart.items().to_vec())
        };
        self.writer.enqueue(snapshot);
        view
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Cart> {
        // Lock poisoning would mean a panic mid-mutation on another thread;
        // recover the data rather than cascading the panic.
        match self.cart.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

// =============================================================================
// Storefront Facade
// =============================================================================

/// Wires the catalog and the cart store into the surface the frontend uses.
pub struct Storefront<C: ProductCatalog> {
    catalog: C,
    cart: CartStore,
}

impl<C: ProductCatalog> Storefront<C> {
    /// Creates a storefront over a catalog and a cart store.
    pub fn new(catalog: C, cart: CartStore) -> Self {
        Storefront { catalog, cart }
    }

    /// Lists products for the home or category screen.
    ///
    /// Catalog failures map to a retryable [`ApiError`]; the UI renders the
    /// message with a Retry button.
    pub async fn browse(&self, filter: Option<&ProductFilter>) -> Result<Vec<Product>, ApiError> {
        self.catalog.list(filter).await.map_err(ApiError::from)
    }

    /// Adds one unit of a product to the cart, resolving it via the catalog.
    ///
    /// Builds the conventional quantity-1 payload exactly as the product
    /// tiles do. Zero-stock products are rejected before they reach the
    /// cart.
    pub async fn add_product(&self, product_id: &str) -> Result<CartView, ApiError> {
        let products = self.catalog.list(None).await.map_err(ApiError::from)?;
        let product = products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| ApiError::from(CoreError::ProductNotFound(product_id.to_string())))?;

        if !product.in_stock() {
            return Err(CoreError::OutOfStock(product_id.to_string()).into());
        }

        Ok(self.cart.add_to_cart(LineItem::from_product(product, 1)))
    }

    /// Decrements a line's quantity the way the cart screen's stepper does:
    /// a decrement at quantity 1 becomes a remove, keeping the ≥ 1
    /// convention on the UI path.
    pub fn decrement(&self, id: &str) -> CartView {
        let current = self
            .cart
            .with_cart(|cart| cart.items().iter().find(|i| i.id == id).map(|i| i.quantity));

        match current {
            Some(q) if q > 1 => self.cart.update_quantity(id, q - 1),
            Some(_) => self.cart.remove_from_cart(id),
            None => self.cart.view(),
        }
    }

    /// Increments a line's quantity via the stepper.
    pub fn increment(&self, id: &str) -> CartView {
        let current = self
            .cart
            .with_cart(|cart| cart.items().iter().find(|i| i.id == id).map(|i| i.quantity));

        match current {
            Some(q) => self.cart.update_quantity(id, q + 1),
            None => self.cart.view(),
        }
    }

    /// The underlying cart store (mutations + view).
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }
}
