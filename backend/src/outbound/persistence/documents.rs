//! Serialised document shapes for the store collections.
//!
//! Documents carry the application-level `id` rather than the store's own
//! `_id`, and field names match the wire entities exactly, including the
//! `password` field that holds the stored hash.

use serde::{Deserialize, Serialize};

use crate::domain::{
    Account, AccountId, EmailAddress, NewRepositoryRecord, PasswordHash, RecordId,
    RepositoryRecord,
};

/// Mapping failure for a document read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stored {entity} document is invalid: {message}")]
pub(crate) struct DocumentMappingError {
    entity: &'static str,
    message: String,
}

impl DocumentMappingError {
    fn account(message: impl Into<String>) -> Self {
        Self {
            entity: "account",
            message: message.into(),
        }
    }

    fn record(message: impl Into<String>) -> Self {
        Self {
            entity: "repository record",
            message: message.into(),
        }
    }
}

/// Stored shape of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct AccountDocument {
    pub id: String,
    pub email: String,
    pub password: String,
}

impl AccountDocument {
    pub fn from_domain(account: &Account) -> Self {
        Self {
            id: account.id().to_string(),
            email: account.email().as_str().to_owned(),
            password: account.password_hash().as_str().to_owned(),
        }
    }

    pub fn into_domain(self) -> Result<Account, DocumentMappingError> {
        let id = AccountId::parse(&self.id)
            .map_err(|err| DocumentMappingError::account(err.to_string()))?;
        let email = EmailAddress::try_new(self.email)
            .map_err(|err| DocumentMappingError::account(err.to_string()))?;
        Ok(Account::new(id, email, PasswordHash::new(self.password)))
    }
}

/// Stored shape of a repository record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryDocument {
    pub id: String,
    pub full_name: String,
    pub description: String,
    pub language: String,
    pub forks_count: i32,
    pub stargazers_count: i32,
    pub rating_average: i32,
    pub review_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_avatar_url: Option<String>,
}

impl RepositoryDocument {
    pub fn from_domain(record: &RepositoryRecord) -> Self {
        Self {
            id: record.id().to_string(),
            full_name: record.full_name().to_owned(),
            description: record.description().to_owned(),
            language: record.language().to_owned(),
            forks_count: record.forks_count(),
            stargazers_count: record.stargazers_count(),
            rating_average: record.rating_average(),
            review_count: record.review_count(),
            owner_avatar_url: record.owner_avatar_url().map(ToOwned::to_owned),
        }
    }

    pub fn into_domain(self) -> Result<RepositoryRecord, DocumentMappingError> {
        let id =
            RecordId::parse(&self.id).map_err(|err| DocumentMappingError::record(err.to_string()))?;
        let new_record = NewRepositoryRecord {
            full_name: self.full_name,
            description: self.description,
            language: self.language,
            forks_count: self.forks_count,
            stargazers_count: self.stargazers_count,
            rating_average: self.rating_average,
            review_count: self.review_count,
            owner_avatar_url: self.owner_avatar_url,
        };
        new_record
            .validate()
            .map_err(|err| DocumentMappingError::record(err.to_string()))?;
        Ok(new_record.into_record(id))
    }
}
