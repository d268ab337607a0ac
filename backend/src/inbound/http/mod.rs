//! Plain HTTP endpoints that sit beside the GraphQL schema.

mod health;

pub use health::{HealthState, live, ready};
