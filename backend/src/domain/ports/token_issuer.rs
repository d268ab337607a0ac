//! Port abstraction for session token signing adapters.

use crate::domain::{SessionToken, TokenClaims};

/// Errors raised by token signing adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenIssuerError {
    /// Signing the claim set failed inside the adapter.
    #[error("token signing failed: {message}")]
    Signing {
        /// Library-supplied detail.
        message: String,
    },
}

impl TokenIssuerError {
    /// Create a signing error with the given message.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }
}

/// Outbound port for issuing signed session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign the claims into a session token.
    fn issue(&self, claims: &TokenClaims) -> Result<SessionToken, TokenIssuerError>;
}
