//! Book repository
//!
//! CRUD over the `books` collection. Every operation is one
//! read-compute-write cycle against the store: the whole collection is read,
//! the new collection computed, and written back whole.

use tracing::debug;

use crate::models::Book;
use crate::storage::{KeyValueStoreArc, KeyValueStoreExt, StoreResult};

/// Store entry holding the book collection
pub(crate) const BOOKS_KEY: &str = "books";

/// Repository for book records
#[derive(Clone)]
pub struct BookRepository {
    store: KeyValueStoreArc,
}

impl BookRepository {
    /// Create a repository over the given store
    pub fn new(store: KeyValueStoreArc) -> Self {
        Self { store }
    }

    /// Get all books, in insertion order
    ///
    /// An absent collection reads as empty.
    pub async fn list_all(&self) -> StoreResult<Vec<Book>> {
        let books = self.store.read_entry::<Vec<Book>>(BOOKS_KEY).await?;
        Ok(books.unwrap_or_default())
    }

    /// Get the first book with the given id, if any
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        let books = self.list_all().await?;
        Ok(books.into_iter().find(|book| book.id == id))
    }

    /// Append a fully-formed book and persist the collection
    ///
    /// `id` and `code` are assigned by the caller before this call; no
    /// uniqueness check is performed on either.
    pub async fn create(&self, book: Book) -> StoreResult<()> {
        debug!("Creating book {} (code {})", book.id, book.code);
        let mut books = self.list_all().await?;
        books.push(book);
        self.store.write_entry(BOOKS_KEY, &books).await
    }

    /// Remove the book with the given id and persist the collection
    ///
    /// Deleting an unknown id is a no-op.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!("Deleting book {}", id);
        let mut books = self.list_all().await?;
        books.retain(|book| book.id != id);
        self.store.write_entry(BOOKS_KEY, &books).await
    }

    /// Remove every book owned by the given author and persist the collection
    ///
    /// This is the cascade primitive invoked by the author repository.
    pub async fn delete_by_author_id(&self, author_id: &str) -> StoreResult<()> {
        debug!("Deleting books of author {}", author_id);
        let mut books = self.list_all().await?;
        books.retain(|book| book.author_id != author_id);
        self.store.write_entry(BOOKS_KEY, &books).await
    }
}
