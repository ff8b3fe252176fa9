//! End-to-end storefront flows: browse, cart mutations, persistence across
//! a simulated restart, and error mapping at the boundary.

use async_trait::async_trait;

use bodega_core::pricing::DELIVERY_FEE;
use bodega_core::types::{Product, ProductFilter};
use bodega_core::Money;
use bodega_store::{CartSlot, SnapshotWriter, SnapshotWriterHandle};
use bodega_storefront::{
    CartStore, CatalogError, ErrorCode, MemoryCatalog, ProductCatalog, Storefront,
};

/// Catalog double that always fails, standing in for a dead products API.
struct DownCatalog;

#[async_trait]
impl ProductCatalog for DownCatalog {
    async fn list(&self, _filter: Option<&ProductFilter>) -> Result<Vec<Product>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".into()))
    }
}

fn fixed_product(id: &str, name: &str, price_paise: i64, stock: i64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price_paise,
        image_url: None,
        category: Some("Fruits".to_string()),
        description: None,
        stock,
    }
}

/// Spawns a writer over a slot and returns the pieces a session needs.
fn session(slot: &CartSlot) -> (CartStore, SnapshotWriterHandle, tokio::task::JoinHandle<()>) {
    let (writer, handle) = SnapshotWriter::new(slot.clone());
    let task = tokio::spawn(writer.run());
    (CartStore::new(handle.clone()), handle, task)
}

#[tokio::test]
async fn scripted_session_prices_like_the_cart_screen() {
    let dir = tempfile::tempdir().unwrap();
    let slot = CartSlot::new(dir.path());
    let (cart, handle, task) = session(&slot);

    let catalog = MemoryCatalog::new(vec![
        fixed_product("mango", "Alphonso Mango", 10000, 10), // ₹100
        fixed_product("milk", "Toned Milk", 5000, 10),       // ₹50
    ]);
    let storefront = Storefront::new(catalog, cart);

    // Two adds of the same product merge into one line at quantity 2
    storefront.add_product("mango").await.unwrap();
    let view = storefront.add_product("mango").await.unwrap();
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].quantity, 2);
    assert_eq!(view.pricing.subtotal, Money::from_rupees(200));
    assert_eq!(view.pricing.delivery_fee, DELIVERY_FEE);
    assert_eq!(view.pricing.total, Money::from_rupees(240));

    // Stepper: milk up to 2, back down to 1, then down again → removed
    storefront.add_product("milk").await.unwrap();
    storefront.increment("milk");
    let view = storefront.decrement("milk");
    assert_eq!(view.items[1].quantity, 1);
    let view = storefront.decrement("milk");
    assert_eq!(view.items.len(), 1, "decrement at 1 becomes a remove");

    handle.shutdown().await;
    task.await.unwrap();
}

#[tokio::test]
async fn cart_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let slot = CartSlot::new(dir.path());

    // First run: put things in the cart, shut down cleanly
    {
        let (cart, handle, task) = session(&slot);
        let catalog = MemoryCatalog::new(vec![
            fixed_product("mango", "Alphonso Mango", 10000, 10),
            fixed_product("milk", "Toned Milk", 5000, 10),
        ]);
        let storefront = Storefront::new(catalog, cart);

        storefront.add_product("mango").await.unwrap();
        storefront.add_product("mango").await.unwrap();
        storefront.add_product("milk").await.unwrap();

        handle.shutdown().await;
        task.await.unwrap();
    }

    // Second run: a fresh store over the same slot hydrates the cart
    {
        let (cart, handle, task) = session(&slot);
        cart.hydrate(&slot).await;

        let view = cart.view();
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].id, "mango");
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.pricing.subtotal, Money::from_rupees(250));

        handle.shutdown().await;
        task.await.unwrap();
    }
}

#[tokio::test]
async fn removal_of_absent_id_still_persists_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let slot = CartSlot::new(dir.path());
    let (cart, handle, task) = session(&slot);

    // No-op removal on an empty cart still writes the (empty) snapshot
    cart.remove_from_cart("ghost");

    handle.shutdown().await;
    task.await.unwrap();

    let persisted = slot.load().await.unwrap();
    assert_eq!(persisted, Some(vec![]), "slot must exist and be empty");
}

#[tokio::test]
async fn update_of_absent_id_does_not_persist() {
    let dir = tempfile::tempdir().unwrap();
    let slot = CartSlot::new(dir.path());
    let (cart, handle, task) = session(&slot);

    // Asymmetric with remove: no match, no write
    cart.update_quantity("ghost", 3);

    handle.shutdown().await;
    task.await.unwrap();

    assert!(slot.load().await.unwrap().is_none(), "slot must stay unwritten");
}

#[tokio::test]
async fn clear_cart_persists_an_empty_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let slot = CartSlot::new(dir.path());
    let (cart, handle, task) = session(&slot);

    let catalog = MemoryCatalog::new(vec![fixed_product("mango", "Mango", 10000, 5)]);
    let storefront = Storefront::new(catalog, cart);

    storefront.add_product("mango").await.unwrap();
    let view = storefront.cart().clear_cart();
    assert!(view.items.is_empty());
    assert!(view.pricing.total.is_zero());

    handle.shutdown().await;
    task.await.unwrap();

    assert_eq!(slot.load().await.unwrap(), Some(vec![]));
}

#[tokio::test]
async fn browse_failure_is_retryable() {
    let dir = tempfile::tempdir().unwrap();
    let slot = CartSlot::new(dir.path());
    let (cart, handle, task) = session(&slot);

    let storefront = Storefront::new(DownCatalog, cart);

    let err = storefront.browse(None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::CatalogError);
    assert!(err.retryable, "UI must be able to offer a Retry button");

    handle.shutdown().await;
    task.await.unwrap();
}

#[tokio::test]
async fn unknown_and_out_of_stock_products_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let slot = CartSlot::new(dir.path());
    let (cart, handle, task) = session(&slot);

    let catalog = MemoryCatalog::new(vec![fixed_product("cookies", "Cookies", 3500, 0)]);
    let storefront = Storefront::new(catalog, cart);

    let err = storefront.add_product("ghost").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert!(!err.retryable);

    let err = storefront.add_product("cookies").await.unwrap_err();
    assert_eq!(err.code, ErrorCode::OutOfStock);

    // Nothing leaked into the cart
    assert!(storefront.cart().view().items.is_empty());

    handle.shutdown().await;
    task.await.unwrap();
}

#[tokio::test]
async fn direct_quantity_zero_survives_persistence() {
    // The quantity-floor gap, end to end: a direct update_quantity(0)
    // bypasses the stepper convention, is stored, persisted, and hydrated.
    let dir = tempfile::tempdir().unwrap();
    let slot = CartSlot::new(dir.path());

    {
        let (cart, handle, task) = session(&slot);
        let catalog = MemoryCatalog::new(vec![fixed_product("mango", "Mango", 10000, 5)]);
        let storefront = Storefront::new(catalog, cart);

        storefront.add_product("mango").await.unwrap();
        let view = storefront.cart().update_quantity("mango", 0);
        assert_eq!(view.items[0].quantity, 0);
        assert!(view.pricing.total.is_zero());

        handle.shutdown().await;
        task.await.unwrap();
    }

    {
        let (cart, handle, task) = session(&slot);
        cart.hydrate(&slot).await;

        let view = cart.view();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 0);

        handle.shutdown().await;
        task.await.unwrap();
    }
}
