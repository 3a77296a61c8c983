//! Repository layer: in-memory owners of entity collections.
//!
//! # Responsibility
//! - Assign sequential identifiers and hold the only copy of each entity.
//! - Offer lookup/search/update/delete contracts to the service layer.
//!
//! # Invariants
//! - Writes go through entity constructors, so stored state is valid.
//! - Listing APIs return owned snapshots sorted by ascending id.
//! - Absence is a normal outcome (`Option`/`bool`), not an error.

use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod account_repo;
pub mod employee_repo;
pub mod library_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Write failure raised by repository inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ValidationError),
    DuplicateId(String),
    /// The id sequence for this collection has no successor left.
    IdsExhausted(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "id {id} already exists"),
            Self::IdsExhausted(kind) => write!(f, "no {kind} ids left to assign"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::IdsExhausted(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Successor of `current`, or `IdsExhausted` when the sequence is spent.
pub(crate) fn next_in_sequence(current: u32, kind: &'static str) -> RepoResult<u32> {
    current.checked_add(1).ok_or(RepoError::IdsExhausted(kind))
}

/// Lowercased, trimmed search term; `None` for blank input.
pub(crate) fn normalize_search_term(term: &str) -> Option<String> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
