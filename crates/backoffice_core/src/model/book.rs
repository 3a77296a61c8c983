//! Library book domain model.
//!
//! # Invariants
//! - `title` and `author` are trimmed and non-blank.
//! - Status moves only `Available -> Borrowed -> Available`.

use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type BookId = u32;

/// Circulation state of one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    status: BookStatus,
}

impl Book {
    /// Creates an available book.
    pub fn new(id: BookId, title: &str, author: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            title: require_text("book title", title)?,
            author: require_text("author name", author)?,
            status: BookStatus::Available,
        })
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn is_borrowed(&self) -> bool {
        self.status == BookStatus::Borrowed
    }

    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// `Available -> Borrowed`. Returns `false` if already borrowed.
    pub fn check_out(&mut self) -> bool {
        if self.is_borrowed() {
            return false;
        }
        self.status = BookStatus::Borrowed;
        true
    }

    /// `Borrowed -> Available`. Returns `false` if already available.
    pub fn check_in(&mut self) -> bool {
        if self.is_available() {
            return false;
        }
        self.status = BookStatus::Available;
        true
    }

    /// Copies title and author of `other`; status stays as-is.
    pub(crate) fn apply_details(&mut self, other: &Book) {
        self.title.clone_from(&other.title);
        self.author.clone_from(&other.author);
    }

    pub(crate) fn matches(&self, lowered_term: &str) -> bool {
        self.title.to_lowercase().contains(lowered_term)
            || self.author.to_lowercase().contains(lowered_term)
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = match self.status {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
        };
        write!(
            f,
            "ID: {} | Title: {} | Author: {} | Status: {status}",
            self.id, self.title, self.author
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Book, BookStatus};

    #[test]
    fn check_out_and_in_follow_state_machine() {
        let mut book = Book::new(1, "Dune", "Herbert").unwrap();
        assert!(book.check_out());
        assert!(!book.check_out());
        assert_eq!(book.status(), BookStatus::Borrowed);
        assert!(book.check_in());
        assert!(!book.check_in());
        assert!(book.is_available());
    }
}
