//! In-memory key-value store
//!
//! Backs the store contract with a plain map behind an async lock. Used by
//! tests to substitute the file-backed store with a fresh instance per run.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::StoreResult;
use super::kv::KeyValueStore;

/// In-memory implementation of the key-value store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Creates a new empty memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new memory store with initial entries
    pub fn with_entries(entries: HashMap<String, Vec<u8>>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: Vec<u8>) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}
