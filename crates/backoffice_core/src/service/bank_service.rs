//! Banking use-case service.
//!
//! # Responsibility
//! - Open accounts and run deposits/withdrawals against stored balances.
//! - Render the account details block.
//!
//! # Invariants
//! - A transaction is written back only after the entity accepted it.
//! - Unknown account numbers surface as `AccountNotFound`, never a panic.

use crate::model::account::{Account, AccountError};
use crate::model::validation::ValidationError;
use crate::repo::account_repo::AccountRepository;
use crate::repo::RepoResult;
use crate::service::format::render_lines;
use log::{info, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for banking use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankServiceError {
    AccountNotFound(String),
    Account(AccountError),
}

impl Display for BankServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccountNotFound(number) => write!(f, "account not found: {number}"),
            Self::Account(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BankServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AccountNotFound(_) => None,
            Self::Account(err) => Some(err),
        }
    }
}

impl From<AccountError> for BankServiceError {
    fn from(value: AccountError) -> Self {
        Self::Account(value)
    }
}

impl From<ValidationError> for BankServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Account(AccountError::Validation(value))
    }
}

/// Banking facade over an account repository.
pub struct BankService<R: AccountRepository> {
    repo: R,
}

impl<R: AccountRepository> BankService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Read access for listing/search use-cases.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Opens a zero-balance account under the next generated number.
    pub fn open_account(&mut self, holder_name: &str) -> RepoResult<Account> {
        let account = self.repo.create_account(holder_name)?;
        info!(
            "event=account_open module=bank status=ok account={}",
            account.account_number()
        );
        Ok(account)
    }

    /// Deposits into one account and returns the updated snapshot.
    pub fn deposit(
        &mut self,
        account_number: &str,
        amount: Decimal,
    ) -> Result<Account, BankServiceError> {
        self.transact(account_number, "deposit", |account| {
            account.deposit(amount)
        })
    }

    /// Withdraws from one account and returns the updated snapshot.
    ///
    /// # Errors
    /// - `AccountNotFound` for unknown numbers.
    /// - `Account(InsufficientBalance)` when `amount` exceeds the balance.
    pub fn withdraw(
        &mut self,
        account_number: &str,
        amount: Decimal,
    ) -> Result<Account, BankServiceError> {
        self.transact(account_number, "withdraw", |account| {
            account.withdraw(amount)
        })
    }

    /// Current balance, or `None` for unknown numbers.
    pub fn balance(&self, account_number: &str) -> Option<Decimal> {
        self.repo
            .find_account(account_number)
            .map(|account| account.balance())
    }

    pub fn rename_holder(
        &mut self,
        account_number: &str,
        holder_name: &str,
    ) -> Result<Account, BankServiceError> {
        let mut account = self.require(account_number)?;
        account.set_account_holder_name(holder_name)?;
        self.repo.update_account(&account);
        Ok(account)
    }

    pub fn close_account(&mut self, account_number: &str) -> bool {
        let closed = self.repo.delete_account(account_number);
        if closed {
            info!("event=account_close module=bank status=ok account={account_number}");
        }
        closed
    }

    pub fn list_accounts(&self) -> Vec<Account> {
        self.repo.list_accounts()
    }

    /// Account details block, or `None` for unknown numbers.
    pub fn account_details(&self, account_number: &str) -> Option<String> {
        self.repo
            .find_account(account_number)
            .map(|account| render_account_details(&account))
    }

    fn require(&self, account_number: &str) -> Result<Account, BankServiceError> {
        self.repo
            .find_account(account_number)
            .ok_or_else(|| BankServiceError::AccountNotFound(account_number.trim().to_string()))
    }

    fn transact<F>(
        &mut self,
        account_number: &str,
        kind: &str,
        apply: F,
    ) -> Result<Account, BankServiceError>
    where
        F: FnOnce(&mut Account) -> Result<Decimal, AccountError>,
    {
        let mut account = self.require(account_number)?;
        if let Err(err) = apply(&mut account) {
            warn!(
                "event=account_{kind} module=bank status=rejected account={} reason={err}",
                account.account_number()
            );
            return Err(err.into());
        }
        self.repo.update_account(&account);
        info!(
            "event=account_{kind} module=bank status=ok account={}",
            account.account_number()
        );
        Ok(account)
    }
}

/// Renders the account details block.
pub fn render_account_details(account: &Account) -> String {
    render_lines(&[
        "================ ACCOUNT DETAILS ================".to_string(),
        format!("Account Number: {}", account.account_number()),
        format!("Account Holder: {}", account.account_holder_name()),
        format!(
            "Current Balance: ${:.2}",
            account
                .balance()
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        "=================================================".to_string(),
    ])
}
