//! Inbound adapters: the GraphQL API and health probes over actix-web.

pub mod graphql;
pub mod http;
