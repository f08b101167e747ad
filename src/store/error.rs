//! Error types for the order store.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the order collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or renaming the backing file failed.
    #[error("Order store I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not hold a JSON array of orders.
    #[error("Order store {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be encoded.
    #[error("Failed to encode orders: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io { path: path.into(), source }
    }
}
