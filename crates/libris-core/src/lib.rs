//! Libris Core Library
//!
//! This crate provides the core functionality for Libris, a local-first
//! catalog of authors and their books, persisted in a durable key-value
//! store.
//!
//! # Architecture
//!
//! Each collection lives whole under one named store entry (`authors`,
//! `books`). Every operation is a single read-compute-write cycle against
//! one collection, except author deletion, which cascades to the book
//! collection with a second, independent write.
//!
//! # Quick Start
//!
//! ```text
//! let catalog = Catalog::open()?;
//!
//! // Add an author
//! let authors = catalog.get_all_authors().await?;
//! let author = Author::new("Jorge Amado", None, Author::next_code(&authors));
//! catalog.create_author(author).await?;
//!
//! // Deleting an author also deletes its books
//! catalog.delete_author(&id).await?;
//! ```
//!
//! # Modules
//!
//! - `catalog`: Unified catalog interface (main entry point)
//! - `models`: Data structures for authors and books
//! - `repository`: Per-collection repositories and the cascade
//! - `storage`: Key-value store contract and backends
//! - `config`: Application configuration

pub mod catalog;
pub mod config;
pub mod models;
pub mod repository;
pub mod storage;

pub use catalog::Catalog;
pub use config::Config;
pub use models::{Author, Book};
pub use repository::{AuthorRepository, BookRepository};
pub use storage::{FileStore, KeyValueStore, KeyValueStoreArc, MemoryStore, StoreError, StoreResult};
