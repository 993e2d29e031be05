//! Author repository
//!
//! CRUD over the `authors` collection, plus the cascade: deleting an author
//! also deletes every book that references it, through the book repository.
//!
//! The cascade is two independent store writes, not a transaction. If the
//! second write never happens (process death, store failure), books keep a
//! dangling `author_id` until a later cascade repeats. That orphan window is
//! accepted behavior; no rollback is attempted.

use tracing::debug;

use crate::models::Author;
use crate::repository::books::BookRepository;
use crate::storage::{KeyValueStoreArc, KeyValueStoreExt, StoreResult};

/// Store entry holding the author collection
pub(crate) const AUTHORS_KEY: &str = "authors";

/// Repository for author records
#[derive(Clone)]
pub struct AuthorRepository {
    store: KeyValueStoreArc,
    books: BookRepository,
}

impl AuthorRepository {
    /// Create a repository over the given store
    ///
    /// The cascade runs through a book repository over the same store.
    pub fn new(store: KeyValueStoreArc) -> Self {
        let books = BookRepository::new(store.clone());
        Self { store, books }
    }

    /// Get all authors, in insertion order
    ///
    /// An absent collection reads as empty.
    pub async fn list_all(&self) -> StoreResult<Vec<Author>> {
        let authors = self.store.read_entry::<Vec<Author>>(AUTHORS_KEY).await?;
        Ok(authors.unwrap_or_default())
    }

    /// Get the first author with the given id, if any
    pub async fn get_by_id(&self, id: &str) -> StoreResult<Option<Author>> {
        let authors = self.list_all().await?;
        Ok(authors.into_iter().find(|author| author.id == id))
    }

    /// Append a fully-formed author and persist the collection
    ///
    /// `id` and `code` are assigned by the caller before this call; no
    /// uniqueness check is performed on either.
    pub async fn create(&self, author: Author) -> StoreResult<()> {
        debug!("Creating author {} (code {})", author.id, author.code);
        let mut authors = self.list_all().await?;
        authors.push(author);
        self.store.write_entry(AUTHORS_KEY, &authors).await
    }

    /// Remove the author with the given id, then cascade to its books
    ///
    /// Deleting an unknown id is a no-op on the author collection; the
    /// cascade still runs. A failure after the first write leaves orphaned
    /// books and propagates unchanged.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        debug!("Deleting author {}", id);
        let mut authors = self.list_all().await?;
        authors.retain(|author| author.id != id);
        self.store.write_entry(AUTHORS_KEY, &authors).await?;

        self.books.delete_by_author_id(id).await
    }
}
