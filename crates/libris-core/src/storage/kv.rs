//! Key-value store contract
//!
//! A store holds a small number of named entries, each written and replaced
//! whole. Operations are async and atomic per single key; there is no
//! multi-key transaction primitive and no retry on failure.
//!
//! Repositories depend on the trait object rather than a concrete backend,
//! so tests can inject an in-memory store in place of the file-backed one.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::StoreResult;

/// Async key-value store over named entries
///
/// An absent key is a normal `None` result, never an error. `remove` on an
/// absent key succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, or `None` if absent
    async fn read(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    async fn write(&self, key: &str, value: Vec<u8>) -> StoreResult<()>;

    /// Remove the entry stored under `key`
    async fn remove(&self, key: &str) -> StoreResult<()>;
}

/// Shared handle to a store implementation
pub type KeyValueStoreArc = Arc<dyn KeyValueStore>;

/// Typed access on top of any [`KeyValueStore`]
///
/// Entries hold structured data (collections of records); this layer makes
/// the JSON encoding transparent to callers.
#[async_trait]
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and decode the entry stored under `key`
    async fn read_entry<T>(&self, key: &str) -> StoreResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.read(key).await? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encode and write `value` as the entry stored under `key`
    async fn write_entry<T>(&self, key: &str, value: &T) -> StoreResult<()>
    where
        T: Serialize + Sync,
    {
        let bytes = serde_json::to_vec(value)?;
        self.write(key, bytes).await
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    #[tokio::test]
    async fn test_read_entry_absent_key() {
        let store = MemoryStore::new();
        let entry: Option<Vec<String>> = store.read_entry("missing").await.unwrap();
        assert!(entry.is_none());
    }

    #[tokio::test]
    async fn test_write_then_read_entry() {
        let store = MemoryStore::new();
        let value = vec!["a".to_string(), "b".to_string()];

        store.write_entry("letters", &value).await.unwrap();

        let loaded: Vec<String> = store.read_entry("letters").await.unwrap().unwrap();
        assert_eq!(loaded, value);
    }

    #[tokio::test]
    async fn test_undecodable_entry_is_an_error() {
        let store = MemoryStore::new();
        store.write("bad", b"not json".to_vec()).await.unwrap();

        let result = store.read_entry::<Vec<String>>("bad").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_ext_methods_work_through_trait_object() {
        let store: KeyValueStoreArc = Arc::new(MemoryStore::new());
        store.write_entry("nums", &vec![1, 2, 3]).await.unwrap();

        let loaded: Vec<i32> = store.read_entry("nums").await.unwrap().unwrap();
        assert_eq!(loaded, vec![1, 2, 3]);
    }
}
