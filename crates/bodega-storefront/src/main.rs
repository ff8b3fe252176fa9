//! # Bodega Demo Binary
//!
//! Runs a scripted shopping session against the seeded in-memory catalog,
//! with the real persistence path underneath. Run it twice: the second run
//! hydrates the cart the first run left behind.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Resolve Data Directory ───────────────────────────────────────────► │
//! │     • Linux: ~/.local/share/bodega/cart.json                            │
//! │     • macOS: ~/Library/Application Support/com.bodega.app/cart.json     │
//! │     • Fallback: ./data/cart.json                                        │
//! │                                                                         │
//! │  3. Open Slot & Spawn Writer ─────────────────────────────────────────► │
//! │                                                                         │
//! │  4. Hydrate Cart ─────────────────────────────────────────────────────► │
//! │                                                                         │
//! │  5. Scripted Session & Shutdown Flush ────────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bodega_core::types::ProductFilter;
use bodega_store::{CartSlot, SnapshotWriter};
use bodega_storefront::{ApiError, CartStore, MemoryCatalog, Storefront};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    init_tracing();

    let data_dir = data_dir();
    info!(path = %data_dir.display(), "Using data directory");

    // Storage: slot + write-behind writer
    let slot = CartSlot::new(&data_dir);
    let (writer, writer_handle) = SnapshotWriter::new(slot.clone());
    let writer_task = tokio::spawn(writer.run());

    // State container, hydrated once from the slot
    let cart = CartStore::new(writer_handle.clone());
    cart.hydrate(&slot).await;

    let restored = cart.view();
    if !restored.items.is_empty() {
        info!(
            items = restored.items.len(),
            subtotal = %restored.pricing.subtotal,
            "Restored cart from previous run"
        );
    }

    let storefront = Storefront::new(MemoryCatalog::seeded(), cart);

    // Browse the full catalog, then one category
    let all = storefront.browse(None).await?;
    info!(products = all.len(), "Fetched catalog");

    let fruits_filter = ProductFilter::for_category("Fruits");
    let fruits = storefront.browse(Some(&fruits_filter)).await?;
    info!(products = fruits.len(), category = "Fruits", "Fetched category");

    // Scripted session: two mangoes, one milk, a stepper dance
    let mango = &fruits[0];
    storefront.add_product(&mango.id).await?;
    storefront.add_product(&mango.id).await?; // merges to quantity 2

    let dairy = storefront
        .browse(Some(&ProductFilter::for_category("Dairy")))
        .await?;
    let milk = &dairy[0];
    storefront.add_product(&milk.id).await?;

    storefront.increment(&milk.id);
    let view = storefront.decrement(&milk.id);

    // Render the cart the way the cart screen would
    println!("── Cart ──────────────────────────────────");
    for item in &view.items {
        println!(
            "  {:<24} x{}  {}",
            item.name,
            item.quantity,
            item.line_total()
        );
    }
    println!("  Subtotal      {}", view.pricing.subtotal);
    println!("  Delivery fee  {}", view.pricing.delivery_fee);
    println!("  Total         {}", view.pricing.total);

    // Flush the newest snapshot before exiting so the next run restores it
    writer_handle.shutdown().await;
    let _ = writer_task.await;

    info!("Session complete, cart persisted");
    Ok(())
}

/// Initializes tracing with an env-filter (RUST_LOG) falling back to info.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Resolves the per-platform data directory for the cart slot.
fn data_dir() -> PathBuf {
    ProjectDirs::from("com", "bodega", "bodega")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}
