//! Loan ledger entry linking one book to one member.

use crate::model::book::BookId;
use crate::model::member::MemberId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type RecordId = u32;

/// One loan. Active while `return_date` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub record_id: RecordId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrow_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

impl BorrowRecord {
    pub fn new(
        record_id: RecordId,
        book_id: BookId,
        member_id: MemberId,
        borrow_date: DateTime<Utc>,
    ) -> Self {
        Self {
            record_id,
            book_id,
            member_id,
            borrow_date,
            return_date: None,
        }
    }

    pub fn is_returned(&self) -> bool {
        self.return_date.is_some()
    }

    pub fn is_active_for(&self, member_id: MemberId, book_id: BookId) -> bool {
        !self.is_returned() && self.member_id == member_id && self.book_id == book_id
    }
}
