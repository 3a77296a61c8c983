//! Library repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own books, members and the borrow ledger with sequential ids.
//! - Apply check-out/check-in transitions across all three collections.
//!
//! # Invariants
//! - A book is `Borrowed` iff exactly one active record references it.
//! - A member's held list mirrors that member's active records.
//! - A rejected transition changes nothing.
//! - Deletes do not cascade; orphaned records stay in the ledger and a
//!   book lent to a deleted member stays `Borrowed`.

use crate::model::book::{Book, BookId};
use crate::model::borrow_record::{BorrowRecord, RecordId};
use crate::model::member::{Member, MemberId};
use crate::repo::{next_in_sequence, normalize_search_term, RepoResult};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected borrow/return request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanError {
    MemberNotFound(MemberId),
    BookNotFound(BookId),
    AlreadyBorrowed(BookId),
    NoActiveLoan { member_id: MemberId, book_id: BookId },
    /// The ledger has no record ids left to assign.
    LedgerFull,
}

impl Display for LoanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MemberNotFound(id) => write!(f, "member not found: {id}"),
            Self::BookNotFound(id) => write!(f, "book not found: {id}"),
            Self::AlreadyBorrowed(id) => write!(f, "book {id} is already borrowed"),
            Self::NoActiveLoan { member_id, book_id } => write!(
                f,
                "no active loan of book {book_id} for member {member_id}"
            ),
            Self::LedgerFull => write!(f, "no borrow record ids left to assign"),
        }
    }
}

impl Error for LoanError {}

/// Result of a successful check-out or check-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanOutcome {
    pub record: BorrowRecord,
    pub book: Book,
    pub member: Member,
}

/// Repository interface for the library catalog and loan ledger.
pub trait LibraryRepository {
    fn add_book(&mut self, title: &str, author: &str) -> RepoResult<Book>;
    fn get_book(&self, id: BookId) -> Option<Book>;
    fn list_books(&self) -> Vec<Book>;
    /// Case-insensitive substring match on title or author.
    fn search_books(&self, term: &str) -> Vec<Book>;
    /// Overwrites title and author; circulation status is untouched.
    fn update_book(&mut self, book: &Book) -> bool;
    fn delete_book(&mut self, id: BookId) -> bool;
    fn book_exists(&self, id: BookId) -> bool;

    fn add_member(&mut self, name: &str, email: &str) -> RepoResult<Member>;
    fn get_member(&self, id: MemberId) -> Option<Member>;
    fn list_members(&self) -> Vec<Member>;
    fn search_members(&self, term: &str) -> Vec<Member>;
    /// Overwrites name and email; held books are untouched.
    fn update_member(&mut self, member: &Member) -> bool;
    fn delete_member(&mut self, id: MemberId) -> bool;
    fn member_exists(&self, id: MemberId) -> bool;

    /// Lends `book_id` to `member_id` and opens a ledger record.
    fn check_out(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
        at: DateTime<Utc>,
    ) -> Result<LoanOutcome, LoanError>;
    /// Closes the member's active record for `book_id`.
    fn check_in(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
        at: DateTime<Utc>,
    ) -> Result<LoanOutcome, LoanError>;
    fn active_loan(&self, member_id: MemberId, book_id: BookId) -> Option<BorrowRecord>;
    /// Full ledger, oldest first.
    fn list_loans(&self) -> Vec<BorrowRecord>;
}

/// Vec-backed library store.
#[derive(Debug, Clone)]
pub struct InMemoryLibraryRepository {
    books: Vec<Book>,
    members: Vec<Member>,
    records: Vec<BorrowRecord>,
    next_book_id: BookId,
    next_member_id: MemberId,
    next_record_id: RecordId,
}

impl Default for InMemoryLibraryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLibraryRepository {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            members: Vec::new(),
            records: Vec::new(),
            next_book_id: 1,
            next_member_id: 1,
            next_record_id: 1,
        }
    }

    fn book_index(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id() == id)
    }

    fn member_index(&self, id: MemberId) -> Option<usize> {
        self.members.iter().position(|member| member.id() == id)
    }
}

impl LibraryRepository for InMemoryLibraryRepository {
    fn add_book(&mut self, title: &str, author: &str) -> RepoResult<Book> {
        let following = next_in_sequence(self.next_book_id, "book")?;
        let book = Book::new(self.next_book_id, title, author)?;
        self.next_book_id = following;
        self.books.push(book.clone());
        Ok(book)
    }

    fn get_book(&self, id: BookId) -> Option<Book> {
        self.book_index(id).map(|index| self.books[index].clone())
    }

    fn list_books(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn search_books(&self, term: &str) -> Vec<Book> {
        let Some(term) = normalize_search_term(term) else {
            return Vec::new();
        };
        self.books
            .iter()
            .filter(|book| book.matches(&term))
            .cloned()
            .collect()
    }

    fn update_book(&mut self, book: &Book) -> bool {
        match self.book_index(book.id()) {
            Some(index) => {
                self.books[index].apply_details(book);
                true
            }
            None => false,
        }
    }

    fn delete_book(&mut self, id: BookId) -> bool {
        match self.book_index(id) {
            Some(index) => {
                self.books.remove(index);
                true
            }
            None => false,
        }
    }

    fn book_exists(&self, id: BookId) -> bool {
        self.book_index(id).is_some()
    }

    fn add_member(&mut self, name: &str, email: &str) -> RepoResult<Member> {
        let following = next_in_sequence(self.next_member_id, "member")?;
        let member = Member::new(self.next_member_id, name, email)?;
        self.next_member_id = following;
        self.members.push(member.clone());
        Ok(member)
    }

    fn get_member(&self, id: MemberId) -> Option<Member> {
        self.member_index(id).map(|index| self.members[index].clone())
    }

    fn list_members(&self) -> Vec<Member> {
        self.members.clone()
    }

    fn search_members(&self, term: &str) -> Vec<Member> {
        let Some(term) = normalize_search_term(term) else {
            return Vec::new();
        };
        self.members
            .iter()
            .filter(|member| member.name_matches(&term))
            .cloned()
            .collect()
    }

    fn update_member(&mut self, member: &Member) -> bool {
        match self.member_index(member.id()) {
            Some(index) => {
                self.members[index].apply_contact(member);
                true
            }
            None => false,
        }
    }

    fn delete_member(&mut self, id: MemberId) -> bool {
        match self.member_index(id) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    fn member_exists(&self, id: MemberId) -> bool {
        self.member_index(id).is_some()
    }

    fn check_out(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
        at: DateTime<Utc>,
    ) -> Result<LoanOutcome, LoanError> {
        let member_index = self
            .member_index(member_id)
            .ok_or(LoanError::MemberNotFound(member_id))?;
        let book_index = self
            .book_index(book_id)
            .ok_or(LoanError::BookNotFound(book_id))?;
        let following_record_id = self
            .next_record_id
            .checked_add(1)
            .ok_or(LoanError::LedgerFull)?;
        if !self.books[book_index].check_out() {
            return Err(LoanError::AlreadyBorrowed(book_id));
        }

        self.members[member_index].hold(book_id);
        let record = BorrowRecord::new(self.next_record_id, book_id, member_id, at);
        self.next_record_id = following_record_id;
        self.records.push(record.clone());

        Ok(LoanOutcome {
            record,
            book: self.books[book_index].clone(),
            member: self.members[member_index].clone(),
        })
    }

    fn check_in(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
        at: DateTime<Utc>,
    ) -> Result<LoanOutcome, LoanError> {
        let no_loan = LoanError::NoActiveLoan { member_id, book_id };
        let record_index = self
            .records
            .iter()
            .position(|record| record.is_active_for(member_id, book_id))
            .ok_or(no_loan)?;
        // An orphaned record (book or member deleted) cannot be closed.
        let member_index = self.member_index(member_id).ok_or(no_loan)?;
        let book_index = self.book_index(book_id).ok_or(no_loan)?;

        let record = &mut self.records[record_index];
        record.return_date = Some(at);
        let record = record.clone();
        self.books[book_index].check_in();
        self.members[member_index].release(book_id);

        Ok(LoanOutcome {
            record,
            book: self.books[book_index].clone(),
            member: self.members[member_index].clone(),
        })
    }

    fn active_loan(&self, member_id: MemberId, book_id: BookId) -> Option<BorrowRecord> {
        self.records
            .iter()
            .find(|record| record.is_active_for(member_id, book_id))
            .cloned()
    }

    fn list_loans(&self) -> Vec<BorrowRecord> {
        self.records.clone()
    }
}
