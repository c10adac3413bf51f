use std::collections::HashMap;

use crate::account::{Account, AccountId};

use super::{AccountRepository, RepositoryError};

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: HashMap<AccountId, Account>,
}

impl InMemoryAccountRepository {
    /// Replaces any account stored under the same id.
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.id(), account);
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn get_account_by_id(&self, id: AccountId) -> Result<Account, RepositoryError> {
        self.accounts
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn update(&mut self, account: &Account) -> Result<(), RepositoryError> {
        self.accounts.insert(account.id(), account.clone());
        Ok(())
    }
}
