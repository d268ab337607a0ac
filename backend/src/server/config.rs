//! Environment-sourced application configuration.
//!
//! Every setting is read once at startup. A missing store URI or signing
//! secret aborts the process here rather than failing on the first request
//! that needs it.

use std::env;
use std::net::SocketAddr;
use std::ops::RangeInclusive;

use crate::outbound::credentials::DEFAULT_COST;

const MONGODB_URI: &str = "MONGODB_URI";
const SECRET_KEY: &str = "SECRET_KEY";
const MONGODB_DATABASE: &str = "MONGODB_DATABASE";
const BIND_ADDR: &str = "BIND_ADDR";
const BCRYPT_COST: &str = "BCRYPT_COST";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
const DEFAULT_DATABASE: &str = "ratehub";

/// Work-factor range the bcrypt library accepts.
const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=31;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("required configuration variable {name} is not set")]
    Missing {
        /// Variable name.
        name: &'static str,
    },
    /// A variable is set but cannot be parsed.
    #[error("configuration variable {name} is invalid: {message}")]
    Invalid {
        /// Variable name.
        name: &'static str,
        /// Parse failure detail.
        message: String,
    },
}

impl ConfigError {
    fn missing(name: &'static str) -> Self {
        Self::Missing { name }
    }

    fn invalid(name: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            name,
            message: message.into(),
        }
    }
}

/// Application settings fixed at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    bind_addr: SocketAddr,
    mongodb_uri: String,
    database: String,
    secret_key: String,
    bcrypt_cost: u32,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through an injectable variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mongodb_uri = lookup(MONGODB_URI)
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| ConfigError::missing(MONGODB_URI))?;
        let secret_key = lookup(SECRET_KEY)
            .filter(|secret| !secret.trim().is_empty())
            .ok_or_else(|| ConfigError::missing(SECRET_KEY))?;
        let database = lookup(MONGODB_DATABASE).unwrap_or_else(|| DEFAULT_DATABASE.to_owned());

        let bind_addr = lookup(BIND_ADDR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned())
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::invalid(BIND_ADDR, err.to_string()))?;

        let bcrypt_cost = match lookup(BCRYPT_COST) {
            None => DEFAULT_COST,
            Some(raw) => {
                let cost = raw
                    .parse::<u32>()
                    .map_err(|err| ConfigError::invalid(BCRYPT_COST, err.to_string()))?;
                if !BCRYPT_COST_RANGE.contains(&cost) {
                    return Err(ConfigError::invalid(
                        BCRYPT_COST,
                        format!(
                            "cost must be between {} and {}",
                            BCRYPT_COST_RANGE.start(),
                            BCRYPT_COST_RANGE.end()
                        ),
                    ));
                }
                cost
            }
        };

        Ok(Self {
            bind_addr,
            mongodb_uri,
            database,
            secret_key,
            bcrypt_cost,
        })
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// MongoDB connection string.
    pub fn mongodb_uri(&self) -> &str {
        self.mongodb_uri.as_str()
    }

    /// Database holding both collections.
    pub fn database(&self) -> &str {
        self.database.as_str()
    }

    /// Token signing secret; guaranteed non-empty.
    pub fn secret_key(&self) -> &str {
        self.secret_key.as_str()
    }

    /// Bcrypt work factor.
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn minimal_configuration_applies_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("SECRET_KEY", "super-secret"),
        ]))
        .expect("minimal configuration is valid");

        assert_eq!(config.mongodb_uri(), "mongodb://localhost:27017");
        assert_eq!(config.secret_key(), "super-secret");
        assert_eq!(config.database(), "ratehub");
        assert_eq!(config.bind_addr().port(), 4000);
        assert_eq!(config.bcrypt_cost(), DEFAULT_COST);
    }

    #[test]
    fn missing_store_uri_fails_fast() {
        let err = AppConfig::from_lookup(lookup_from(&[("SECRET_KEY", "super-secret")]))
            .expect_err("missing URI must fail");
        assert_eq!(err, ConfigError::missing("MONGODB_URI"));
    }

    #[rstest]
    #[case::unset(&[("MONGODB_URI", "mongodb://localhost:27017")])]
    #[case::blank(&[("MONGODB_URI", "mongodb://localhost:27017"), ("SECRET_KEY", "   ")])]
    fn missing_or_blank_secret_fails_fast(#[case] pairs: &[(&str, &str)]) {
        let err = AppConfig::from_lookup(lookup_from(pairs)).expect_err("secret must be present");
        assert_eq!(err, ConfigError::missing("SECRET_KEY"));
    }

    #[test]
    fn overrides_are_honoured() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MONGODB_URI", "mongodb://db.internal:27017"),
            ("SECRET_KEY", "super-secret"),
            ("MONGODB_DATABASE", "catalogue"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("BCRYPT_COST", "12"),
        ]))
        .expect("full configuration is valid");

        assert_eq!(config.database(), "catalogue");
        assert_eq!(config.bind_addr().port(), 8080);
        assert_eq!(config.bcrypt_cost(), 12);
    }

    #[rstest]
    #[case::not_a_number("ten")]
    #[case::below_range("3")]
    #[case::above_range("32")]
    fn invalid_bcrypt_costs_are_rejected(#[case] cost: &str) {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("SECRET_KEY", "super-secret"),
            ("BCRYPT_COST", cost),
        ]))
        .expect_err("invalid cost must fail");
        assert!(matches!(err, ConfigError::Invalid { name: "BCRYPT_COST", .. }));
    }

    #[test]
    fn malformed_bind_addresses_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("MONGODB_URI", "mongodb://localhost:27017"),
            ("SECRET_KEY", "super-secret"),
            ("BIND_ADDR", "not-an-address"),
        ]))
        .expect_err("invalid address must fail");
        assert!(matches!(err, ConfigError::Invalid { name: "BIND_ADDR", .. }));
    }
}
