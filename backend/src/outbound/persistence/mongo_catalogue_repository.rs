//! MongoDB-backed catalogue repository adapter.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::Error as MongoError;

use crate::domain::RepositoryRecord;
use crate::domain::ports::{CatalogueRepository, CatalogueRepositoryError};

use super::documents::RepositoryDocument;
use super::store::DocumentStore;

/// Catalogue repository backed by the `Repositories` collection.
#[derive(Debug, Clone)]
pub struct MongoCatalogueRepository {
    store: Arc<DocumentStore>,
}

impl MongoCatalogueRepository {
    /// Create an adapter over the shared store handle.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }
}

fn query_fault(error: MongoError) -> CatalogueRepositoryError {
    CatalogueRepositoryError::query(error.to_string())
}

fn mapping_fault(error: impl std::fmt::Display) -> CatalogueRepositoryError {
    CatalogueRepositoryError::query(error.to_string())
}

#[async_trait]
impl CatalogueRepository for MongoCatalogueRepository {
    async fn insert(&self, record: &RepositoryRecord) -> Result<(), CatalogueRepositoryError> {
        let document = RepositoryDocument::from_domain(record);
        self.store
            .records()
            .insert_one(&document)
            .await
            .map_err(query_fault)?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RepositoryRecord>, CatalogueRepositoryError> {
        let documents: Vec<RepositoryDocument> = self
            .store
            .records()
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

    async fn count(&self) -> Result<u64, CatalogueRepositoryError> {
        self.store
            .records()
            .count_documents(doc! {})
            .await
            .map_err(query_fault)
    }
}
