//! Catalogue use-cases: counting, listing, and creating repository records.

use std::sync::Arc;

use crate::domain::ports::CatalogueRepository;
use crate::domain::{DomainError, NewRepositoryRecord, RecordId, RepositoryRecord};

/// Orchestrates catalogue reads and record creation over the persistence
/// port.
#[derive(Clone)]
pub struct CatalogueService {
    records: Arc<dyn CatalogueRepository>,
}

impl CatalogueService {
    /// Assemble the service from its port implementation.
    pub fn new(records: Arc<dyn CatalogueRepository>) -> Self {
        Self { records }
    }

    /// Count the stored records.
    pub async fn count(&self) -> Result<u64, DomainError> {
        self.records.count().await.map_err(internal_fault)
    }

    /// List every stored record, in store order.
    pub async fn list(&self) -> Result<Vec<RepositoryRecord>, DomainError> {
        self.records.list().await.map_err(internal_fault)
    }

    /// Validate and persist a new record, returning the stored copy with its
    /// generated identifier.
    pub async fn create(
        &self,
        new_record: NewRepositoryRecord,
    ) -> Result<RepositoryRecord, DomainError> {
        new_record
            .validate()
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;

        let record = new_record.into_record(RecordId::random());
        self.records
            .insert(&record)
            .await
            .map_err(internal_fault)?;
        Ok(record)
    }
}

fn internal_fault(error: impl std::fmt::Display) -> DomainError {
    DomainError::internal(error.to_string())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{CatalogueRepositoryError, MockCatalogueRepository};

    fn record_args() -> NewRepositoryRecord {
        NewRepositoryRecord {
            full_name: "rails/rails".into(),
            description: "Ruby on Rails".into(),
            language: "Ruby".into(),
            forks_count: 15_000,
            stargazers_count: 52_000,
            rating_average: 4,
            review_count: 12,
            owner_avatar_url: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_blank_required_fields_without_persisting() {
        let mut records = MockCatalogueRepository::new();
        records.expect_insert().never();
        let service = CatalogueService::new(Arc::new(records));

        let err = service
            .create(NewRepositoryRecord {
                language: "  ".into(),
                ..record_args()
            })
            .await
            .expect_err("blank language must fail");

        assert_eq!(err.message(), "Missing required fields");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn create_accepts_zero_counts() {
        let mut records = MockCatalogueRepository::new();
        records.expect_insert().times(1).returning(|_| Ok(()));
        let service = CatalogueService::new(Arc::new(records));

        let record = service
            .create(NewRepositoryRecord {
                forks_count: 0,
                stargazers_count: 0,
                rating_average: 0,
                review_count: 0,
                ..record_args()
            })
            .await
            .expect("zero counts are legitimate");

        assert_eq!(record.forks_count(), 0);
        assert_eq!(record.review_count(), 0);
    }

    #[tokio::test]
    async fn create_persists_and_returns_the_stored_record() {
        let mut records = MockCatalogueRepository::new();
        records
            .expect_insert()
            .withf(|record: &RepositoryRecord| record.full_name() == "rails/rails")
            .times(1)
            .returning(|_| Ok(()));
        let service = CatalogueService::new(Arc::new(records));

        let record = service
            .create(record_args())
            .await
            .expect("creation succeeds");

        assert_eq!(record.full_name(), "rails/rails");
        assert_eq!(record.language(), "Ruby");
        assert!(!record.id().to_string().is_empty());
    }

    #[tokio::test]
    async fn count_passes_through_the_store_total() {
        let mut records = MockCatalogueRepository::new();
        records.expect_count().returning(|| Ok(7));
        let service = CatalogueService::new(Arc::new(records));

        assert_eq!(service.count().await.expect("count succeeds"), 7);
    }

    #[tokio::test]
    async fn storage_faults_surface_as_internal() {
        let mut records = MockCatalogueRepository::new();
        records
            .expect_list()
            .returning(|| Err(CatalogueRepositoryError::query("cursor failed")));
        let service = CatalogueService::new(Arc::new(records));

        let err = service.list().await.expect_err("storage fault must fail");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
