//! Library use-case service.
//!
//! # Responsibility
//! - Run borrow/return flows and notify subscribers of each transition.
//! - Build the borrowed-books listing (book + active loan + member).
//!
//! # Invariants
//! - Subscribers are called only after the repository committed a change,
//!   and in registration order.
//! - A rejected request emits no event.
//!
//! # See also
//! - `repo::library_repo` for the transition rules themselves.

use crate::model::book::{Book, BookId};
use crate::model::member::{Member, MemberId};
use crate::repo::library_repo::{LibraryRepository, LoanError, LoanOutcome};
use crate::repo::RepoResult;
use chrono::{DateTime, Utc};
use log::{info, warn};

/// Notification emitted after a successful borrow or return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEvent {
    Borrowed {
        member_id: MemberId,
        member_name: String,
        book_id: BookId,
        book_title: String,
        at: DateTime<Utc>,
    },
    Returned {
        member_id: MemberId,
        member_name: String,
        book_id: BookId,
        book_title: String,
        at: DateTime<Utc>,
    },
}

impl LibraryEvent {
    /// Human-readable notification text.
    pub fn message(&self) -> String {
        match self {
            Self::Borrowed {
                member_name,
                book_id,
                book_title,
                ..
            } => format!("{member_name} borrowed '{book_title}' (Book ID: {book_id})"),
            Self::Returned {
                member_name,
                book_id,
                book_title,
                ..
            } => format!("{member_name} returned '{book_title}' (Book ID: {book_id})"),
        }
    }
}

/// Row of the borrowed-books listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowedBook {
    pub book_id: BookId,
    pub book_title: String,
    pub member_id: MemberId,
    pub member_name: String,
    pub borrow_date: DateTime<Utc>,
}

pub type Subscriber = Box<dyn FnMut(&LibraryEvent)>;

/// Library facade with an explicit subscriber list.
pub struct LibraryService<R: LibraryRepository> {
    repo: R,
    subscribers: Vec<Subscriber>,
}

impl<R: LibraryRepository> LibraryService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            subscribers: Vec::new(),
        }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Direct repository access for profile edits and deletes.
    pub fn repo_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    /// Registers a callback invoked for every emitted event.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&LibraryEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn add_book(&mut self, title: &str, author: &str) -> RepoResult<Book> {
        let book = self.repo.add_book(title, author)?;
        info!("event=book_add module=library status=ok book_id={}", book.id());
        Ok(book)
    }

    pub fn add_member(&mut self, name: &str, email: &str) -> RepoResult<Member> {
        let member = self.repo.add_member(name, email)?;
        info!(
            "event=member_add module=library status=ok member_id={}",
            member.id()
        );
        Ok(member)
    }

    pub fn borrow_book(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<LibraryEvent, LoanError> {
        self.borrow_book_at(member_id, book_id, Utc::now())
    }

    /// Lends a book at a caller-supplied instant.
    ///
    /// # Errors
    /// - `MemberNotFound` / `BookNotFound` for unknown ids.
    /// - `AlreadyBorrowed` when the book is out.
    pub fn borrow_book_at(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
        at: DateTime<Utc>,
    ) -> Result<LibraryEvent, LoanError> {
        let outcome = self
            .repo
            .check_out(member_id, book_id, at)
            .inspect_err(|err| log_rejection("book_borrow", member_id, book_id, err))?;
        info!(
            "event=book_borrow module=library status=ok member_id={member_id} book_id={book_id} record_id={}",
            outcome.record.record_id
        );
        let LoanOutcome { book, member, .. } = outcome;
        let event = LibraryEvent::Borrowed {
            member_id,
            member_name: member.name().to_string(),
            book_id,
            book_title: book.title().to_string(),
            at,
        };
        self.publish(&event);
        Ok(event)
    }

    pub fn return_book(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
    ) -> Result<LibraryEvent, LoanError> {
        self.return_book_at(member_id, book_id, Utc::now())
    }

    /// Closes the member's active loan of `book_id`.
    ///
    /// # Errors
    /// - `NoActiveLoan` when that member does not currently hold the book.
    pub fn return_book_at(
        &mut self,
        member_id: MemberId,
        book_id: BookId,
        at: DateTime<Utc>,
    ) -> Result<LibraryEvent, LoanError> {
        let outcome = self
            .repo
            .check_in(member_id, book_id, at)
            .inspect_err(|err| log_rejection("book_return", member_id, book_id, err))?;
        info!(
            "event=book_return module=library status=ok member_id={member_id} book_id={book_id} record_id={}",
            outcome.record.record_id
        );
        let LoanOutcome { book, member, .. } = outcome;
        let event = LibraryEvent::Returned {
            member_id,
            member_name: member.name().to_string(),
            book_id,
            book_title: book.title().to_string(),
            at,
        };
        self.publish(&event);
        Ok(event)
    }

    pub fn list_books(&self) -> Vec<Book> {
        self.repo.list_books()
    }

    pub fn list_members(&self) -> Vec<Member> {
        self.repo.list_members()
    }

    /// Books currently out in ascending book id, joined with their active
    /// loan and borrower.
    ///
    /// Loans whose book or member no longer exists are skipped.
    pub fn borrowed_books(&self) -> Vec<BorrowedBook> {
        let active: Vec<_> = self
            .repo
            .list_loans()
            .into_iter()
            .filter(|record| !record.is_returned())
            .collect();
        let mut books = self.repo.list_books();
        books.sort_by_key(Book::id);
        books
            .into_iter()
            .filter(Book::is_borrowed)
            .filter_map(|book| {
                let record = active.iter().find(|record| record.book_id == book.id())?;
                let member = self.repo.get_member(record.member_id)?;
                Some(BorrowedBook {
                    book_id: book.id(),
                    book_title: book.title().to_string(),
                    member_id: member.id(),
                    member_name: member.name().to_string(),
                    borrow_date: record.borrow_date,
                })
            })
            .collect()
    }

    fn publish(&mut self, event: &LibraryEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(event);
        }
    }
}

fn log_rejection(event: &str, member_id: MemberId, book_id: BookId, err: &LoanError) {
    warn!(
        "event={event} module=library status=rejected member_id={member_id} book_id={book_id} reason={err}"
    );
}
