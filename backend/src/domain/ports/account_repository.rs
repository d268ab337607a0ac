//! Port abstraction for account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Account, EmailAddress};

/// Persistence errors raised by account repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountPersistenceError {
    /// The store rejected the write because the email is already taken.
    ///
    /// Distinguished so the service layer can re-raise the same
    /// user-visible error as its pre-check; the store's unique index is the
    /// source of truth for the invariant.
    #[error("an account with this email already exists")]
    DuplicateEmail,
    /// Repository connection could not be established.
    #[error("account repository connection failed: {message}")]
    Connection {
        /// Driver-supplied detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("account repository query failed: {message}")]
    Query {
        /// Driver-supplied detail.
        message: String,
    },
}

impl AccountPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Outbound port for storing and retrieving accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account.
    async fn insert(&self, account: &Account) -> Result<(), AccountPersistenceError>;

    /// Fetch an account by its email lookup key.
    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Account>, AccountPersistenceError>;

    /// Fetch every stored account, in store order.
    async fn list(&self) -> Result<Vec<Account>, AccountPersistenceError>;
}
