//! Code-first GraphQL schema: the query and mutation roots.
//!
//! Resolvers validate argument shapes, then delegate to the domain services
//! held by [`GraphQlContext`]. Failures surface as field errors through the
//! [`crate::domain::DomainError`] mapping.

use juniper::{EmptySubscription, RootNode, graphql_object};

use crate::domain::{DomainError, EmailAddress, LoginCredentials, NewRepositoryRecord};

use super::objects::{Repository, Token, User};
use super::state::GraphQlContext;

/// Root query object.
pub struct Query;

#[graphql_object(context = GraphQlContext)]
impl Query {
    /// Total number of stored repository records.
    async fn repositories_count(context: &GraphQlContext) -> Result<i32, DomainError> {
        let count = context.catalogue.count().await?;
        i32::try_from(count)
            .map_err(|_| DomainError::internal("stored repository count exceeds the Int range"))
    }

    /// Every stored repository record, in store order.
    async fn all_repositories(context: &GraphQlContext) -> Result<Vec<Repository>, DomainError> {
        let records = context.catalogue.list().await?;
        Ok(records.into_iter().map(Repository::from).collect())
    }

    /// Every registered account, in store order.
    async fn all_users(context: &GraphQlContext) -> Result<Vec<User>, DomainError> {
        let accounts = context.accounts.list().await?;
        Ok(accounts.into_iter().map(User::from).collect())
    }
}

/// Root mutation object.
pub struct Mutation;

#[graphql_object(context = GraphQlContext)]
impl Mutation {
    /// Register a new account.
    async fn create_user(
        context: &GraphQlContext,
        email: String,
        password: String,
    ) -> Result<User, DomainError> {
        let email = EmailAddress::try_new(email)
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;
        let account = context.accounts.register(email, &password).await?;
        Ok(User::from(account))
    }

    /// Authenticate an account and return a signed session token.
    async fn login(
        context: &GraphQlContext,
        email: String,
        password: String,
    ) -> Result<Token, DomainError> {
        let credentials = LoginCredentials::new(email, password);
        let token = context.accounts.login(&credentials).await?;
        Ok(Token::from(token))
    }

    /// Validate and store a new repository record.
    async fn create_repository(
        context: &GraphQlContext,
        full_name: String,
        description: String,
        language: String,
        forks_count: i32,
        stargazers_count: i32,
        rating_average: i32,
        review_count: i32,
        owner_avatar_url: Option<String>,
    ) -> Result<Repository, DomainError> {
        let new_record = NewRepositoryRecord {
            full_name,
            description,
            language,
            forks_count,
            stargazers_count,
            rating_average,
            review_count,
            owner_avatar_url,
        };
        let record = context.catalogue.create(new_record).await?;
        Ok(Repository::from(record))
    }
}

/// Executable schema type.
pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQlContext>>;

/// Build the executable schema.
pub fn schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
