//! Shared GraphQL execution state.
//!
//! Resolvers receive this context and depend only on domain services, so
//! schema tests can substitute in-memory adapters for the real store.

use crate::domain::{AccountsService, CatalogueService};

/// Dependency bundle available to every resolver.
#[derive(Clone)]
pub struct GraphQlContext {
    /// Account registration, login, and listing use-cases.
    pub accounts: AccountsService,
    /// Repository-catalogue use-cases.
    pub catalogue: CatalogueService,
}

impl GraphQlContext {
    /// Bundle the domain services used by resolvers.
    pub fn new(accounts: AccountsService, catalogue: CatalogueService) -> Self {
        Self {
            accounts,
            catalogue,
        }
    }
}

impl juniper::Context for GraphQlContext {}
