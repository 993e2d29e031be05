//! Data models for Libris
//!
//! Defines the two record types, Author and Book. Records are immutable
//! after creation; there is no update operation in the catalog.
//!
//! Serde attributes pin the persisted JSON layout: `createdAt` for the
//! timestamp, `author_id` for the foreign key, optional fields omitted
//! when absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An author record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Author {
    /// Unique opaque identifier, never reused
    pub id: String,
    /// Human-facing sequential number, assigned at creation
    pub code: u32,
    /// Author name
    pub name: String,
    /// Optional contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// When this record was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with a fresh id and creation timestamp
    ///
    /// The caller supplies `code`, computed from the current collection via
    /// [`Author::next_code`] immediately before `create`.
    pub fn new(name: impl Into<String>, email: Option<String>, code: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            code,
            name: name.into(),
            email,
            created_at: Utc::now(),
        }
    }

    /// Create an author with a specific id (for loading fixed data)
    pub fn with_id(id: impl Into<String>, name: impl Into<String>, code: u32) -> Self {
        Self {
            id: id.into(),
            code,
            name: name.into(),
            email: None,
            created_at: Utc::now(),
        }
    }

    /// Compute the next sequential code for the given collection
    ///
    /// Max existing code plus one, or 1 on an empty collection. Advisory
    /// only: two interleaved create cycles can both observe the same
    /// collection and produce the same code.
    pub fn next_code(existing: &[Author]) -> u32 {
        existing.iter().map(|a| a.code).max().unwrap_or(0) + 1
    }
}

/// A book record, owned by an author
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Unique opaque identifier, never reused
    pub id: String,
    /// Human-facing sequential number, assigned at creation
    pub code: u32,
    /// Book title
    pub name: String,
    /// Id of the owning author
    ///
    /// Refers to an existing author, except transiently while a cascade
    /// delete is in flight.
    pub author_id: String,
    /// Optional page count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    /// When this record was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Book {
    /// Create a new book with a fresh id and creation timestamp
    pub fn new(
        name: impl Into<String>,
        author_id: impl Into<String>,
        pages: Option<u32>,
        code: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            code,
            name: name.into(),
            author_id: author_id.into(),
            pages,
            created_at: Utc::now(),
        }
    }

    /// Create a book with a specific id (for loading fixed data)
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        author_id: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            id: id.into(),
            code,
            name: name.into(),
            author_id: author_id.into(),
            pages: None,
            created_at: Utc::now(),
        }
    }

    /// Compute the next sequential code for the given collection
    pub fn next_code(existing: &[Book]) -> u32 {
        existing.iter().map(|b| b.code).max().unwrap_or(0) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_new() {
        let author = Author::new("Jorge Amado", Some("jorge@example.com".to_string()), 1);
        assert!(!author.id.is_empty());
        assert_eq!(author.code, 1);
        assert_eq!(author.name, "Jorge Amado");
        assert_eq!(author.email, Some("jorge@example.com".to_string()));
    }

    #[test]
    fn test_author_ids_are_unique() {
        let a = Author::new("A", None, 1);
        let b = Author::new("B", None, 2);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_author_next_code_empty() {
        assert_eq!(Author::next_code(&[]), 1);
    }

    #[test]
    fn test_author_next_code() {
        let authors = vec![
            Author::with_id("1", "A", 1),
            Author::with_id("2", "B", 7),
            Author::with_id("3", "C", 3),
        ];
        assert_eq!(Author::next_code(&authors), 8);
    }

    #[test]
    fn test_book_new() {
        let book = Book::new("Capitães da Areia", "author-1", Some(280), 1);
        assert!(!book.id.is_empty());
        assert_eq!(book.name, "Capitães da Areia");
        assert_eq!(book.author_id, "author-1");
        assert_eq!(book.pages, Some(280));
    }

    #[test]
    fn test_book_next_code() {
        let books = vec![
            Book::with_id("10", "X", "1", 2),
            Book::with_id("11", "Y", "1", 5),
        ];
        assert_eq!(Book::next_code(&books), 6);
        assert_eq!(Book::next_code(&[]), 1);
    }

    #[test]
    fn test_author_serialization() {
        let author = Author::new("Test", None, 1);
        let json = serde_json::to_string(&author).unwrap();
        let deserialized: Author = serde_json::from_str(&json).unwrap();
        assert_eq!(author, deserialized);
    }

    #[test]
    fn test_author_json_field_names() {
        let author = Author::new("Test", None, 1);
        let value = serde_json::to_value(&author).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("createdAt"));
        // Absent email is omitted entirely
        assert!(!object.contains_key("email"));
        assert!(!object.contains_key("created_at"));
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new("Test", "1", None, 1);
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }

    #[test]
    fn test_book_json_field_names() {
        let book = Book::new("Test", "1", None, 1);
        let value = serde_json::to_value(&book).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.contains_key("author_id"));
        assert!(object.contains_key("createdAt"));
        assert!(!object.contains_key("pages"));
    }

    #[test]
    fn test_book_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "10",
            "code": 1,
            "name": "Livro X",
            "author_id": "1",
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, "10");
        assert_eq!(book.pages, None);
    }
}
