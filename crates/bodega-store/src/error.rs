//! # Storage Error Types
//!
//! Error types for durable slot operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds slot-path context                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tracing::warn! in the writer / hydration path                         │
//! │       │                                                                 │
//! │       ✗  (stops here — storage failures are swallowed by contract:     │
//! │           the in-memory cart is authoritative, no retry, no rollback)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Durable slot operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the slot file failed.
    ///
    /// ## When This Occurs
    /// - Disk full
    /// - Data directory missing or unwritable
    /// - File removed out from under us
    #[error("Slot I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the snapshot to JSON failed.
    #[error("Snapshot encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The persisted snapshot is not a valid line-item array.
    ///
    /// ## When This Occurs
    /// - Truncated file from a crash on a non-atomic writer
    /// - Manual edits to the slot file
    /// - Schema drift between app versions
    #[error("Snapshot decode failed at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Wraps an I/O error with the slot path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps a decode error with the slot path for context.
    pub fn decode(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StoreError::Decode {
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
