//! MongoDB-backed account repository adapter.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

use crate::domain::ports::{AccountPersistenceError, AccountRepository};
use crate::domain::{Account, EmailAddress};

use super::documents::AccountDocument;
use super::store::DocumentStore;

/// Server error code reported for unique-index violations.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Account repository backed by the `Users` collection.
#[derive(Debug, Clone)]
pub struct MongoAccountRepository {
    store: Arc<DocumentStore>,
}

impl MongoAccountRepository {
    /// Create an adapter over the shared store handle.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

fn query_fault(error: MongoError) -> AccountPersistenceError {
    AccountPersistenceError::query(error.to_string())
}

fn mapping_fault(error: impl std::fmt::Display) -> AccountPersistenceError {
    AccountPersistenceError::query(error.to_string())
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError> {
        let document = AccountDocument::from_domain(account);
        self.store
            .accounts()
            .insert_one(&document)
            .await
            .map_err(|err| {
                if is_duplicate_key(&err) {
                    AccountPersistenceError::DuplicateEmail
                } else {
                    query_fault(err)
                }
            })?;
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountPersistenceError> {
        let document = self
            .store
            .accounts()
            .find_one(doc! { "email": email.as_str() })
            .await
            .map_err(query_fault)?;
        document
            .map(|found| found.into_domain().map_err(mapping_fault))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Account>, AccountPersistenceError> {
        let documents: Vec<AccountDocument> = self
            .store
            .accounts()
            .find(doc! {})
            .await
            .map_err(query_fault)?
            .try_collect()
            .await
            .map_err(query_fault)?;
        documents
            .into_iter()
            .map(|found| found.into_domain().map_err(mapping_fault))
            .collect()
    }
}
