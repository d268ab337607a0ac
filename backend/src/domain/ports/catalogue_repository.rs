//! Port abstraction for catalogue persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::RepositoryRecord;

/// Persistence errors raised by catalogue repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueRepositoryError {
    /// Repository connection could not be established.
    #[error("catalogue repository connection failed: {message}")]
    Connection {
        /// Driver-supplied detail.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("catalogue repository query failed: {message}")]
    Query {
        /// Driver-supplied detail.
        message: String,
    },
}

impl CatalogueRepositoryError {
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

/// Outbound port for storing and retrieving repository records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Persist a new record.
    async fn insert(&self, record: &RepositoryRecord) -> Result<(), CatalogueRepositoryError>;

    /// Fetch every stored record, in store order.
    async fn list(&self) -> Result<Vec<RepositoryRecord>, CatalogueRepositoryError>;

    /// Count the stored records.
    async fn count(&self) -> Result<u64, CatalogueRepositoryError>;
}
