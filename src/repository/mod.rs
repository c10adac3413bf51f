use thiserror::Error;

use crate::account::{Account, AccountId};

pub mod in_memory_repository;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Account {0} not found")]
    NotFound(AccountId),
}

/// Storage for accounts.
///
/// Lookups hand out a copy; changes are only kept once passed to
/// [`AccountRepository::update`].
#[cfg_attr(test, mockall::automock)]
pub trait AccountRepository {
    fn get_account_by_id(&self, id: AccountId) -> Result<Account, RepositoryError>;

    fn update(&mut self, account: &Account) -> Result<(), RepositoryError>;
}
