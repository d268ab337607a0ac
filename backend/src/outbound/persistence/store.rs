//! MongoDB connection handle and collection access.
//!
//! Wraps the `mongodb` client so both adapters share one database handle.
//! The unique index backing the account email invariant is created here,
//! before the server starts accepting traffic.

use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use super::documents::{AccountDocument, RepositoryDocument};

/// Database name used when the configuration does not override it.
const DEFAULT_DATABASE: &str = "ratehub";

/// Collection holding account documents.
pub(crate) const ACCOUNTS_COLLECTION: &str = "Users";

/// Collection holding repository record documents.
pub(crate) const RECORDS_COLLECTION: &str = "Repositories";

/// Errors raised while connecting to or preparing the document store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The client could not reach the configured deployment.
    #[error("failed to connect to the document store: {message}")]
    Connect {
        /// Driver-supplied detail.
        message: String,
    },
    /// Index creation failed.
    #[error("failed to prepare store indexes: {message}")]
    Index {
        /// Driver-supplied detail.
        message: String,
    },
}

impl StoreError {
    /// Create a connection error with the given message.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Create an index error with the given message.
    pub fn index(message: impl Into<String>) -> Self {
        Self::Index {
            message: message.into(),
        }
    }
}

/// Configuration for the document store connection.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database: String,
}

impl StoreConfig {
    /// Create a configuration with the default database name.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_owned(),
        }
    }

    /// Override the database name.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Connection string of the deployment.
    pub fn uri(&self) -> &str {
        self.uri.as_str()
    }

    /// Name of the database holding both collections.
    pub fn database(&self) -> &str {
        self.database.as_str()
    }
}

/// Shared handle to the backing MongoDB database.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    database: Database,
}

impl DocumentStore {
    /// Connect to the deployment and select the configured database.
    ///
    /// A ping runs before the handle is returned so a bad URI fails at
    /// startup rather than on the first request.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(config.uri())
            .await
            .map_err(|err| StoreError::connect(err.to_string()))?;
        let database = client.database(config.database());
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreError::connect(err.to_string()))?;
        info!(database = %config.database(), "connected to document store");
        Ok(Self { database })
    }

    /// Create the unique index backing the account email invariant.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let options = IndexOptions::builder().unique(true).build();
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(options)
            .build();
        self.accounts()
            .create_index(index)
            .await
            .map_err(|err| StoreError::index(err.to_string()))?;
        Ok(())
    }

    /// Typed handle to the accounts collection.
    pub(crate) fn accounts(&self) -> Collection<AccountDocument> {
        self.database.collection(ACCOUNTS_COLLECTION)
    }

    /// Typed handle to the repository records collection.
    pub(crate) fn records(&self) -> Collection<RepositoryDocument> {
        self.database.collection(RECORDS_COLLECTION)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn config_defaults_the_database_name() {
        let config = StoreConfig::new("mongodb://localhost:27017");
        assert_eq!(config.database(), "ratehub");
        assert_eq!(config.uri(), "mongodb://localhost:27017");
    }

    #[test]
    fn config_database_override_applies() {
        let config = StoreConfig::new("mongodb://localhost:27017").with_database("catalogue");
        assert_eq!(config.database(), "catalogue");
    }
}
