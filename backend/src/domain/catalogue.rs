//! Catalogue entities: stored metadata records describing code repositories.

use std::fmt;

use uuid::Uuid;

/// Validation errors raised when assembling a catalogue record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// One of the required text fields was missing or blank.
    MissingFields,
    /// Identifier was not a valid UUID.
    InvalidId,
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Missing required fields"),
            Self::InvalidId => write!(f, "record id must be a valid UUID"),
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// Stable record identifier, generated at creation and stored as a UUID
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier read back from storage.
    pub fn parse(id: &str) -> Result<Self, RecordValidationError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| RecordValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Arguments accepted by the record-creation operation, prior to validation.
///
/// Counts are plain integers: presence is a type-level concern and zero is a
/// legitimate value for a repository with no forks, stars, or reviews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRepositoryRecord {
    /// Owner-qualified repository name, e.g. `rails/rails`.
    pub full_name: String,
    /// Short description of the repository.
    pub description: String,
    /// Primary implementation language.
    pub language: String,
    /// Number of forks.
    pub forks_count: i32,
    /// Number of stargazers.
    pub stargazers_count: i32,
    /// Average review rating.
    pub rating_average: i32,
    /// Number of submitted reviews.
    pub review_count: i32,
    /// Avatar URL of the owning user, when known. Not validated.
    pub owner_avatar_url: Option<String>,
}

impl NewRepositoryRecord {
    /// Check the required text fields are present and non-blank.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        let required = [
            self.full_name.as_str(),
            self.description.as_str(),
            self.language.as_str(),
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(RecordValidationError::MissingFields);
        }
        Ok(())
    }

    /// Attach an identifier, producing the stored record shape.
    ///
    /// Callers are expected to have run [`Self::validate`] first.
    pub fn into_record(self, id: RecordId) -> RepositoryRecord {
        RepositoryRecord {
            id,
            full_name: self.full_name,
            description: self.description,
            language: self.language,
            forks_count: self.forks_count,
            stargazers_count: self.stargazers_count,
            rating_average: self.rating_average,
            review_count: self.review_count,
            owner_avatar_url: self.owner_avatar_url,
        }
    }
}

/// A stored metadata record describing a code repository.
///
/// ## Invariants
/// - The text fields are non-blank; records are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRecord {
    id: RecordId,
    full_name: String,
    description: String,
    language: String,
    forks_count: i32,
    stargazers_count: i32,
    rating_average: i32,
    review_count: i32,
    owner_avatar_url: Option<String>,
}

impl RepositoryRecord {
    /// Stable identifier.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// Owner-qualified repository name.
    pub fn full_name(&self) -> &str {
        self.full_name.as_str()
    }

    /// Short description of the repository.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Primary implementation language.
    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    /// Number of forks.
    pub fn forks_count(&self) -> i32 {
        self.forks_count
    }

    /// Number of stargazers.
    pub fn stargazers_count(&self) -> i32 {
        self.stargazers_count
    }

    /// Average review rating.
    pub fn rating_average(&self) -> i32 {
        self.rating_average
    }

    /// Number of submitted reviews.
    pub fn review_count(&self) -> i32 {
        self.review_count
    }

    /// Avatar URL of the owning user, when known.
    pub fn owner_avatar_url(&self) -> Option<&str> {
        self.owner_avatar_url.as_deref()
    }
}
