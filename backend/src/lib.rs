//! GraphQL service exposing a catalogue of code repositories and the user
//! accounts that rate them.
//!
//! The crate is layered hexagonally: [`domain`] holds entities, validation
//! rules, use-case services, and ports; [`outbound`] implements the ports
//! over MongoDB, bcrypt, and JWT signing; [`inbound`] exposes the GraphQL
//! schema and health probes over actix-web; [`server`] wires the layers
//! together from environment configuration.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;
