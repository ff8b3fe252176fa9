//! # Snapshot Writer
//!
//! The write-behind queue between cart mutations and the durable slot.
//!
//! ## Write-Behind Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot Writer Flow                                 │
//! │                                                                         │
//! │  Mutation (UI thread)                Background task                    │
//! │  ────────────────────                ───────────────                    │
//! │                                                                         │
//! │  cart.add_item(...)                                                     │
//! │  handle.enqueue(snapshot) ──mpsc──►  recv()                            │
//! │  return immediately                  │                                  │
//! │                                      ├── coalesce: drain the queue,    │
//! │                                      │   keep only the NEWEST snapshot │
//! │                                      │   (each one is the full state,  │
//! │                                      │   so intermediates are moot)    │
//! │                                      │                                  │
//! │                                      ├── slot.save(newest).await       │
//! │                                      │     ok  → debug!                │
//! │                                      │     err → warn! and move on     │
//! │                                      │           (no retry, no         │
//! │                                      │            rollback — the       │
//! │                                      │            in-memory cart is    │
//! │                                      │            authoritative)       │
//! │                                      ▼                                  │
//! │                                      loop                               │
//! │                                                                         │
//! │  ORDERING: one drain task per slot means persisted writes land in      │
//! │  issue order; storage converges to the latest state without ever       │
//! │  blocking a mutation.                                                  │
//! │                                                                         │
//! │  SHUTDOWN: handle.shutdown() flushes the newest pending snapshot       │
//! │  before the task exits.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::sync::mpsc;
use tracing::{debug, warn};

use bodega_core::cart::LineItem;

use crate::slot::CartSlot;

// =============================================================================
// Snapshot Writer
// =============================================================================

/// Drains queued cart snapshots into the durable slot.
pub struct SnapshotWriter {
    /// The slot being written.
    slot: CartSlot,

    /// Receiver for queued snapshots. Unbounded: a mutation must never
    /// block on the disk, and the drain loop coalesces so the queue stays
    /// shallow in practice.
    snapshot_rx: mpsc::UnboundedReceiver<Vec<LineItem>>,

    /// Shutdown receiver.
    shutdown_rx: mpsc::Receiver<()>,
}

/// Handle for enqueueing snapshots and controlling the writer.
#[derive(Clone)]
pub struct SnapshotWriterHandle {
    /// Sender for queued snapshots.
    snapshot_tx: mpsc::UnboundedSender<Vec<LineItem>>,

    /// Shutdown sender.
    shutdown_tx: mpsc::Sender<()>,
}

impl SnapshotWriterHandle {
    /// Enqueues a full-state snapshot, fire-and-forget.
    ///
    /// Never blocks and never reports failure to the caller: a closed
    /// channel (writer already shut down) is logged and ignored.
    pub fn enqueue(&self, snapshot: Vec<LineItem>) {
        if self.snapshot_tx.send(snapshot).is_err() {
            warn!("Snapshot writer is gone, cart persistence disabled");
        }
    }

    /// Triggers graceful shutdown. The writer flushes the newest pending
    /// snapshot before exiting.
    pub async fn shutdown(&self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

impl SnapshotWriter {
    /// Creates a new snapshot writer and returns a handle.
    ///
    /// The writer itself does nothing until [`SnapshotWriter::run`] is
    /// spawned as a background task.
    pub fn new(slot: CartSlot) -> (Self, SnapshotWriterHandle) {
        let (snapshot_tx, snapshot_rx) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        let writer = SnapshotWriter {
            slot,
            snapshot_rx,
            shutdown_rx,
        };

        let handle = SnapshotWriterHandle {
            snapshot_tx,
            shutdown_tx,
        };

        (writer, handle)
    }

    /// Runs the writer loop.
    ///
    /// This should be spawned as a background task:
    /// ```rust,ignore
    /// let (writer, handle) = SnapshotWriter::new(slot);
    /// tokio::spawn(writer.run());
    /// ```
    pub async fn run(mut self) {
        debug!(path = %self.slot.path().display(), "Snapshot writer started");

        loop {
            tokio::select! {
                snapshot = self.snapshot_rx.recv() => {
                    match snapshot {
                        Some(snapshot) => {
                            let newest = self.coalesce(snapshot);
                            self.write(newest).await;
                        }
                        // All handles dropped: nothing more can arrive.
                        None => break,
                    }
                }
                _ = self.shutdown_rx.recv() => {
                    debug!("Snapshot writer shutting down");
                    self.flush_pending().await;
                    break;
                }
            }
        }

        debug!("Snapshot writer stopped");
    }

    /// Skips ahead to the newest pending snapshot.
    ///
    /// Every snapshot is the complete state, so writing intermediates only
    /// burns disk time the queue has already made stale.
    fn coalesce(&mut self, mut newest: Vec<LineItem>) -> Vec<LineItem> {
        let mut skipped = 0usize;
        while let Ok(snapshot) = self.snapshot_rx.try_recv() {
            newest = snapshot;
            skipped += 1;
        }
        if skipped > 0 {
            debug!(skipped, "Coalesced stale snapshots");
        }
        newest
    }

    /// Writes one snapshot, applying the swallow-and-log failure policy.
    async fn write(&self, snapshot: Vec<LineItem>) {
        if let Err(e) = self.slot.save(&snapshot).await {
            // By contract: no retry, no rollback, not surfaced to the user.
            // The in-memory cart stays authoritative until the next write.
            warn!(error = %e, "Cart snapshot write failed");
        }
    }

    /// Writes the newest queued snapshot, if any, during shutdown.
    async fn flush_pending(&mut self) {
        if let Ok(snapshot) = self.snapshot_rx.try_recv() {
            let newest = self.coalesce(snapshot);
            self.write(newest).await;
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bodega_core::Money;

    fn item(id: &str, quantity: i64) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: format!("Product {}", id),
            image_url: None,
            category: None,
            unit_price: Money::from_paise(1000),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_writer_persists_enqueued_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let slot = CartSlot::new(dir.path());
        let (writer, handle) = SnapshotWriter::new(slot.clone());
        let task = tokio::spawn(writer.run());

        handle.enqueue(vec![item("a", 1)]);
        handle.shutdown().await;
        task.await.unwrap();

        let loaded = slot.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "a");
    }

    #[tokio::test]
    async fn test_storage_converges_to_newest_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let slot = CartSlot::new(dir.path());
        let (writer, handle) = SnapshotWriter::new(slot.clone());

        // Enqueue a burst before the writer even starts: it must end up
        // with the last state, the intermediates are free to be skipped.
        handle.enqueue(vec![item("a", 1)]);
        handle.enqueue(vec![item("a", 2)]);
        handle.enqueue(vec![item("a", 2), item("b", 1)]);

        let task = tokio::spawn(writer.run());
        handle.shutdown().await;
        task.await.unwrap();

        let loaded = slot.load().await.unwrap().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].quantity, 2);
        assert_eq!(loaded[1].id, "b");
    }

    #[tokio::test]
    async fn test_dropping_all_handles_stops_the_writer() {
        let dir = tempfile::tempdir().unwrap();
        let slot = CartSlot::new(dir.path());
        let (writer, handle) = SnapshotWriter::new(slot.clone());
        let task = tokio::spawn(writer.run());

        handle.enqueue(vec![item("a", 1)]);
        drop(handle);

        // The run loop exits once the channel closes; pending snapshots
        // already received are still written.
        task.await.unwrap();
        assert!(slot.load().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_enqueue_after_shutdown_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let slot = CartSlot::new(dir.path());
        let (writer, handle) = SnapshotWriter::new(slot);
        let task = tokio::spawn(writer.run());

        handle.shutdown().await;
        task.await.unwrap();

        // Fire-and-forget: no panic, no error surfaced.
        handle.enqueue(vec![item("a", 1)]);
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        // Point the slot at a path whose parent is a file, so save() fails.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let slot = CartSlot::new(&blocker);
        let (writer, handle) = SnapshotWriter::new(slot);
        let task = tokio::spawn(writer.run());

        handle.enqueue(vec![item("a", 1)]);
        handle.shutdown().await;

        // The writer logs and keeps going; the task finishes cleanly.
        task.await.unwrap();
    }
}
