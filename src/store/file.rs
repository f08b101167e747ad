use super::{OrderStore, StoreError};
use crate::model::Order;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// Order store backed by a single JSON file.
///
/// # Concurrency Model
/// One reader/writer lock per store guards the file. `load` holds it shared, so
/// reads run in parallel. `append` holds it exclusively for the whole
/// read-modify-write cycle, so two concurrent appends can never both read the
/// same old collection and lose one of the writes. Appends are applied in the
/// order they acquire the lock.
///
/// The lock lives in the instance, not in the path. Keep exactly one
/// `FileOrderStore` per file and share it (for example behind an `Arc`); two
/// instances on the same path, in one process or in two, will race on append.
///
/// # Durability
/// The new collection is written to a sibling `<name>.tmp` file, flushed, then
/// renamed over the target. A crash mid-write leaves either the old file or the
/// new one, never a torn mix. If the write or rename fails, the temporary file
/// is removed again.
pub struct FileOrderStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FileOrderStore {
    /// Creates a store for `path`. Nothing is touched on disk until the first call.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("orders.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Caller must hold `lock` (either mode).
    async fn read_unlocked(&self) -> Result<Vec<Order>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No order file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "Order file is corrupt");
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Caller must hold `lock` exclusively.
    async fn write_unlocked(&self, orders: &[Order]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(dir, e))?;
        }

        let bytes = serde_json::to_vec_pretty(orders).map_err(StoreError::Serialize)?;

        let tmp = self.temp_path();
        let result = self.replace_via(&tmp, &bytes).await;
        if result.is_err() {
            if let Err(e) = tokio::fs::remove_file(&tmp).await {
                if e.kind() != ErrorKind::NotFound {
                    warn!(path = %tmp.display(), error = %e, "Could not remove temporary order file");
                }
            }
        }
        result
    }

    async fn replace_via(&self, tmp: &Path, bytes: &[u8]) -> Result<(), StoreError> {
        let mut file = tokio::fs::File::create(tmp)
            .await
            .map_err(|e| StoreError::io(tmp, e))?;
        file.write_all(bytes)
            .await
            .map_err(|e| StoreError::io(tmp, e))?;
        file.sync_all().await.map_err(|e| StoreError::io(tmp, e))?;
        drop(file);

        tokio::fs::rename(tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))
    }
}

#[async_trait]
impl OrderStore for FileOrderStore {
    #[instrument(skip(self))]
    async fn load(&self) -> Result<Vec<Order>, StoreError> {
        let _guard = self.lock.read().await;
        let orders = self.read_unlocked().await?;
        debug!(path = %self.path.display(), count = orders.len(), "Loaded orders");
        Ok(orders)
    }

    #[instrument(skip(self, order), fields(id = %order.id))]
    async fn append(&self, order: Order) -> Result<(), StoreError> {
        let _guard = self.lock.write().await;
        let mut orders = self.read_unlocked().await?;
        orders.push(order);
        self.write_unlocked(&orders).await?;
        info!(path = %self.path.display(), size = orders.len(), "Appended");
        Ok(())
    }
}
