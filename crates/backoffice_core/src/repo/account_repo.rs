//! Account repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Generate `ACC<n>` numbers and own the account list.
//! - Resolve user-typed account numbers through `normalize_account_number`.
//!
//! # Invariants
//! - Account numbers are unique and strictly increasing in insertion order.
//! - A rejected create does not consume a number; a spent sequence
//!   rejects with `IdsExhausted`.

use crate::model::account::{format_account_number, normalize_account_number, Account};
use crate::repo::{next_in_sequence, normalize_search_term, RepoResult};

/// First sequence value used for generated account numbers.
pub const DEFAULT_FIRST_ACCOUNT_NUMBER: u32 = 1000;

/// Repository interface for bank accounts.
pub trait AccountRepository {
    /// Opens a zero-balance account under the next generated number.
    fn create_account(&mut self, holder_name: &str) -> RepoResult<Account>;
    /// Looks up one account; blank or malformed numbers yield `None`.
    fn find_account(&self, account_number: &str) -> Option<Account>;
    /// Case-insensitive substring match on holder name.
    fn search_by_holder(&self, term: &str) -> Vec<Account>;
    /// Overwrites holder name and balance of an existing account.
    fn update_account(&mut self, account: &Account) -> bool;
    fn delete_account(&mut self, account_number: &str) -> bool;
    fn account_exists(&self, account_number: &str) -> bool;
    /// Snapshot of all accounts in creation order.
    fn list_accounts(&self) -> Vec<Account>;
}

/// Vec-backed account store.
#[derive(Debug, Clone)]
pub struct InMemoryAccountRepository {
    accounts: Vec<Account>,
    next_number: u32,
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::with_first_number(DEFAULT_FIRST_ACCOUNT_NUMBER)
    }

    pub fn with_first_number(first_number: u32) -> Self {
        Self {
            accounts: Vec::new(),
            next_number: first_number,
        }
    }

    fn position(&self, account_number: &str) -> Option<usize> {
        let normalized = normalize_account_number(account_number)?;
        self.accounts
            .iter()
            .position(|account| account.account_number() == normalized)
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn create_account(&mut self, holder_name: &str) -> RepoResult<Account> {
        let following = next_in_sequence(self.next_number, "account")?;
        let account = Account::new(format_account_number(self.next_number), holder_name)?;
        self.next_number = following;
        self.accounts.push(account.clone());
        Ok(account)
    }

    fn find_account(&self, account_number: &str) -> Option<Account> {
        self.position(account_number)
            .map(|index| self.accounts[index].clone())
    }

    fn search_by_holder(&self, term: &str) -> Vec<Account> {
        let Some(term) = normalize_search_term(term) else {
            return Vec::new();
        };
        self.accounts
            .iter()
            .filter(|account| account.account_holder_name().to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    fn update_account(&mut self, account: &Account) -> bool {
        match self.position(account.account_number()) {
            Some(index) => {
                self.accounts[index] = account.clone();
                true
            }
            None => false,
        }
    }

    fn delete_account(&mut self, account_number: &str) -> bool {
        match self.position(account_number) {
            Some(index) => {
                self.accounts.remove(index);
                true
            }
            None => false,
        }
    }

    fn account_exists(&self, account_number: &str) -> bool {
        self.position(account_number).is_some()
    }

    fn list_accounts(&self) -> Vec<Account> {
        self.accounts.clone()
    }
}
