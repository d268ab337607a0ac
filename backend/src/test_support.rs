//! In-memory port implementations for schema-level tests.
//!
//! These doubles honour the same contracts as the MongoDB adapters,
//! including the duplicate-email rejection, so resolver flows can be
//! exercised end to end without a running store.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    AccountPersistenceError, AccountRepository, CatalogueRepository, CatalogueRepositoryError,
};
use crate::domain::{Account, EmailAddress, RepositoryRecord};

/// Account store holding records in process memory.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepository {
    fn locked(&self) -> Result<MutexGuard<'_, Vec<Account>>, AccountPersistenceError> {
        self.accounts
            .lock()
            .map_err(|err| AccountPersistenceError::query(err.to_string()))
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError> {
        let mut accounts = self.locked()?;
        if accounts
            .iter()
            .any(|existing| existing.email() == account.email())
        {
            return Err(AccountPersistenceError::DuplicateEmail);
        }
        accounts.push(account.clone());
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        Ok(self
            .locked()?
            .iter()
            .find(|account| account.email() == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Account>, AccountPersistenceError> {
        Ok(self.locked()?.clone())
    }
}

/// Catalogue store holding records in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCatalogueRepository {
    records: Mutex<Vec<RepositoryRecord>>,
}

impl InMemoryCatalogueRepository {
    fn locked(&self) -> Result<MutexGuard<'_, Vec<RepositoryRecord>>, CatalogueRepositoryError> {
        self.records
            .lock()
            .map_err(|err| CatalogueRepositoryError::query(err.to_string()))
    }
}

#[async_trait]
impl CatalogueRepository for InMemoryCatalogueRepository {
    async fn insert(&self, record: &RepositoryRecord) -> Result<(), CatalogueRepositoryError> {
        self.locked()?.push(record.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RepositoryRecord>, CatalogueRepositoryError> {
        Ok(self.locked()?.clone())
    }

    async fn count(&self) -> Result<u64, CatalogueRepositoryError> {
        Ok(self.locked()?.len() as u64)
    }
}
