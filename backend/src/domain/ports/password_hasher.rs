//! Port abstraction for one-way password hashing adapters.

use async_trait::async_trait;

use crate::domain::PasswordHash;

/// Errors raised by password hashing adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHasherError {
    /// Hashing or verification failed inside the adapter.
    #[error("password hashing failed: {message}")]
    Failed {
        /// Library-supplied detail.
        message: String,
    },
}

impl PasswordHasherError {
    /// Create a failure with the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }
}

/// Outbound port for hashing and verifying passwords.
///
/// Implementations must never expose or reconstruct the plaintext; the
/// comparison happens inside the hashing library.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted one-way hash of the plaintext.
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Check the plaintext against a stored hash.
    async fn verify(
        &self,
        plaintext: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}
