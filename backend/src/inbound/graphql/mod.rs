//! GraphQL schema, execution state, and actix handlers.

mod error;
mod handlers;
mod objects;
mod schema;
mod state;


pub use handlers::{GRAPHQL_PATH, graphql, playground};
pub use objects::{Repository, Token, User};
pub use schema::{Mutation, Query, Schema, schema};
pub use state::GraphQlContext;
