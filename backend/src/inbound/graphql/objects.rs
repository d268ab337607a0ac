//! GraphQL object types exposed by the schema.

use juniper::{GraphQLObject, ID};

use crate::domain::{Account, RepositoryRecord, SessionToken};

/// Registered user account.
#[derive(Debug, GraphQLObject)]
pub struct User {
    /// Stable account identifier.
    id: ID,
    /// Email address used as the login key.
    email: String,
    /// Stored bcrypt hash of the account password.
    password: String,
}

impl From<Account> for User {
    fn from(account: Account) -> Self {
        Self {
            id: ID::new(account.id().to_string()),
            email: account.email().as_str().to_owned(),
            password: account.password_hash().as_str().to_owned(),
        }
    }
}

/// Stored metadata describing a code repository.
#[derive(Debug, GraphQLObject)]
pub struct Repository {
    /// Stable record identifier.
    id: ID,
    /// Owner-qualified repository name, e.g. `rails/rails`.
    full_name: String,
    /// Short description of the repository.
    description: String,
    /// Primary implementation language.
    language: String,
    /// Number of forks.
    forks_count: i32,
    /// Number of stargazers.
    stargazers_count: i32,
    /// Average review rating.
    rating_average: i32,
    /// Number of submitted reviews.
    review_count: i32,
    /// Avatar URL of the owning user, when known.
    owner_avatar_url: Option<String>,
}

impl From<RepositoryRecord> for Repository {
    fn from(record: RepositoryRecord) -> Self {
        Self {
            id: ID::new(record.id().to_string()),
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
}

/// Signed session token returned by a successful login.
#[derive(Debug, GraphQLObject)]
pub struct Token {
    /// The signed token value.
    value: String,
}

impl From<SessionToken> for Token {
    fn from(token: SessionToken) -> Self {
        Self {
            value: token.into_value(),
        }
    }
}
