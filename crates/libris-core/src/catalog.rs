//! Unified catalog interface
//!
//! The `Catalog` is the entry point callers (the UI layer) use. It wires the
//! author and book repositories over one shared key-value store and exposes
//! their operations as a flat surface.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = Catalog::open()?;  // File-backed, from configuration
//!
//! let authors = catalog.get_all_authors().await?;
//! let author = Author::new("Jorge Amado", None, Author::next_code(&authors));
//! catalog.create_author(author).await?;
//! ```
//!
//! Callers assign `id` and `code` (via the model constructors and
//! `next_code`) immediately before `create_*`; the catalog never reassigns
//! or validates those fields.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::models::{Author, Book};
use crate::repository::{AuthorRepository, BookRepository};
use crate::storage::{FileStore, KeyValueStoreArc, StoreResult};

/// Unified catalog over the author and book collections
pub struct Catalog {
    authors: AuthorRepository,
    books: BookRepository,
}

impl Catalog {
    /// Open a file-backed catalog using the default configuration
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Ok(Self::open_with_config(config))
    }

    /// Open a file-backed catalog with a specific configuration
    pub fn open_with_config(config: Config) -> Self {
        Self::with_store(Arc::new(FileStore::new(config.data_dir)))
    }

    /// Build a catalog over an injected store
    ///
    /// Tests substitute an in-memory store here instead of sharing a hidden
    /// global database.
    pub fn with_store(store: KeyValueStoreArc) -> Self {
        Self {
            authors: AuthorRepository::new(store.clone()),
            books: BookRepository::new(store),
        }
    }

    // ==================== Author Operations ====================

    /// Get all authors
    pub async fn get_all_authors(&self) -> StoreResult<Vec<Author>> {
        self.authors.list_all().await
    }

    /// Get an author by id
    pub async fn get_author_by_id(&self, id: &str) -> StoreResult<Option<Author>> {
        self.authors.get_by_id(id).await
    }

    /// Create a new author
    pub async fn create_author(&self, author: Author) -> StoreResult<()> {
        self.authors.create(author).await
    }

    /// Delete an author and, in cascade, its books
    pub async fn delete_author(&self, id: &str) -> StoreResult<()> {
        self.authors.delete(id).await
    }

    // ==================== Book Operations ====================

    /// Get all books
    pub async fn get_all_books(&self) -> StoreResult<Vec<Book>> {
        self.books.list_all().await
    }

    /// Get a book by id
    pub async fn get_book_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        self.books.get_by_id(id).await
    }

    /// Create a new book
    pub async fn create_book(&self, book: Book) -> StoreResult<()> {
        self.books.create(book).await
    }

    /// Delete a book by id
    pub async fn delete_book(&self, id: &str) -> StoreResult<()> {
        self.books.delete(id).await
    }

    /// Delete every book owned by the given author
    pub async fn delete_books_by_author_id(&self, author_id: &str) -> StoreResult<()> {
        self.books.delete_by_author_id(author_id).await
    }
}
