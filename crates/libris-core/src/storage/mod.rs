//! Storage layer
//!
//! A small async key-value store holding each collection as one named entry,
//! replaced whole on every write.
//!
//! ## Architecture
//!
//! - [`KeyValueStore`]: the store contract repositories depend on
//! - [`FileStore`]: durable backend, one JSON file per entry, atomic writes
//! - [`MemoryStore`]: in-memory backend for tests
//!
//! Operations are atomic per single key; there is no multi-key transaction
//! primitive.

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use kv::{KeyValueStore, KeyValueStoreArc, KeyValueStoreExt};
pub use memory::MemoryStore;
