//! Library member domain model.
//!
//! # Invariants
//! - `name` is trimmed and non-blank; `email` is trimmed and contains `@`.
//! - `borrowed_book_ids` holds each book at most once.

use crate::model::book::BookId;
use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

pub type MemberId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    email: String,
    borrowed_book_ids: Vec<BookId>,
}

impl Member {
    pub fn new(id: MemberId, name: &str, email: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: require_text("member name", name)?,
            email: validate_email(email)?,
            borrowed_book_ids: Vec::new(),
        })
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn borrowed_book_ids(&self) -> &[BookId] {
        &self.borrowed_book_ids
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = require_text("member name", name)?;
        Ok(())
    }

    pub fn set_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = validate_email(email)?;
        Ok(())
    }

    pub fn holds(&self, book_id: BookId) -> bool {
        self.borrowed_book_ids.contains(&book_id)
    }

    pub(crate) fn hold(&mut self, book_id: BookId) {
        if !self.holds(book_id) {
            self.borrowed_book_ids.push(book_id);
        }
    }

    pub(crate) fn release(&mut self, book_id: BookId) -> bool {
        let before = self.borrowed_book_ids.len();
        self.borrowed_book_ids.retain(|id| *id != book_id);
        self.borrowed_book_ids.len() != before
    }

    /// Copies name and email of `other`; held books stay as-is.
    pub(crate) fn apply_contact(&mut self, other: &Member) {
        self.name.clone_from(&other.name);
        self.email.clone_from(&other.email);
    }

    pub(crate) fn name_matches(&self, lowered_term: &str) -> bool {
        self.name.to_lowercase().contains(lowered_term)
    }
}

fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = require_text("email", email)?;
    if !email.contains('@') {
        return Err(ValidationError::InvalidEmail { email });
    }
    Ok(email)
}
