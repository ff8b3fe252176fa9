//! # Cart Slot
//!
//! The durable key-value slot holding the cart snapshot.
//!
//! One slot maps one key to one file in the data directory; the cart lives
//! under [`bodega_core::CART_SLOT_KEY`]. The value is the full serialized
//! line-item sequence, replaced wholesale on every save.
//!
//! ## Atomic Replacement
//! ```text
//! save(items)
//!    │
//!    ├── 1. write <data dir>/cart.json.tmp
//!    ├── 2. rename  cart.json.tmp → cart.json
//!    │
//!    └── A crash between 1 and 2 leaves the previous snapshot intact;
//!        rename on the same filesystem replaces the file in one step.
//! ```

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use bodega_core::cart::LineItem;
use bodega_core::CART_SLOT_KEY;

use crate::error::{StoreError, StoreResult};

/// A durable slot for the cart snapshot, rooted at a data directory.
#[derive(Debug, Clone)]
pub struct CartSlot {
    /// Path of the snapshot file: `<data dir>/<key>.json`.
    path: PathBuf,
}

impl CartSlot {
    /// Creates a slot under the given data directory.
    ///
    /// Nothing is touched on disk until the first `load` or `save`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        CartSlot {
            path: data_dir.as_ref().join(format!("{CART_SLOT_KEY}.json")),
        }
    }

    /// Returns the snapshot file path (for logs and tests).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted snapshot, once, at startup.
    ///
    /// Returns `Ok(None)` when the slot has never been written — a fresh
    /// install starts with an empty cart, not an error.
    pub async fn load(&self) -> StoreResult<Option<Vec<LineItem>>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted cart snapshot");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let items: Vec<LineItem> =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::decode(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            items = items.len(),
            "Loaded cart snapshot"
        );
        Ok(Some(items))
    }

    /// Overwrites the slot with the given line-item sequence.
    ///
    /// The parent directory is created on first save so a fresh data dir
    /// works without a separate setup step.
    pub async fn save(&self, items: &[LineItem]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let bytes = serde_json::to_vec(items).map_err(StoreError::Encode)?;

        // Temp-then-rename keeps the previous snapshot intact on a crash.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            items = items.len(),
            bytes = bytes.len(),
            "Saved cart snapshot"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
