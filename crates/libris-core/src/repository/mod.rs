//! Repository layer
//!
//! One repository per collection, each owning its store entry exclusively.
//! The only cross-reference is the `author_id` foreign key, honored by the
//! author repository's cascade delete.
//!
//! Repositories hold an injected store handle; there is no ambient database.

pub mod authors;
pub mod books;

pub use authors::AuthorRepository;
pub use books::BookRepository;
