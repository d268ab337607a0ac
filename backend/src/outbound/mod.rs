//! Outbound adapters implementing the domain ports.

pub mod credentials;
pub mod persistence;
