//! File-backed key-value store
//!
//! Each named entry is persisted as one JSON document, `<key>.json`, under
//! the data directory. Writes are atomic (write to temp file, sync, then
//! rename) to prevent a torn file if the process dies mid-write.
//!
//! Storage location: `~/.local/share/libris/` (configurable via `Config`)

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::kv::KeyValueStore;

/// Durable store writing one JSON file per entry
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given data directory
    ///
    /// The directory is created lazily on first write.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get the path of the file backing `key`
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let path = self.entry_path(key);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadError { path, source: e }),
        }
    }

    async fn write(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        let path = self.entry_path(key);
        debug!("Writing {} bytes to entry '{}'", value.len(), key);
        atomic_write(&path, &value).await
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.entry_path(key);
        debug!("Removing entry '{}'", key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::from_io(e, path)),
        }
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
async fn atomic_write(path: &Path, data: &[u8]) -> StoreResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file = fs::File::create(&temp_path)
        .await
        .map_err(|e| StoreError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .await
        .map_err(|e| StoreError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .await
        .map_err(|e| StoreError::from_io(e, temp_path.clone()))?;

    // Atomic rename
    fs::rename(&temp_path, path)
        .await
        .map_err(|e| StoreError::AtomicWriteFailed {
            from: temp_path,
            to: path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
