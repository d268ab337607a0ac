//! Bcrypt password hashing adapter.

use async_trait::async_trait;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Default bcrypt work factor.
pub const DEFAULT_COST: u32 = 10;

/// Password hasher backed by the `bcrypt` crate.
///
/// Hashing and verification run on the blocking thread pool: a bcrypt round
/// at production cost takes tens of milliseconds and must not stall the
/// async executor.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given work factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

fn adapter_fault(error: impl std::fmt::Display) -> PasswordHasherError {
    PasswordHasherError::failed(error.to_string())
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(adapter_fault)?
            .map_err(adapter_fault)?;
        Ok(PasswordHash::new(hashed))
    }

    async fn verify(
        &self,
        plaintext: &str,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHasherError> {
        let plaintext = plaintext.to_owned();
        let hash = hash.as_str().to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash))
            .await
            .map_err(adapter_fault)?
            .map_err(adapter_fault)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    /// Lowest cost the library accepts; keeps the tests fast.
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn hashes_verify_against_their_plaintext() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let hash = hasher.hash("longenough").await.expect("hashing succeeds");

        assert_ne!(hash.as_str(), "longenough");
        assert!(hash.as_str().starts_with("$2"));
        assert!(
            hasher
                .verify("longenough", &hash)
                .await
                .expect("verification succeeds")
        );
    }

    #[tokio::test]
    async fn wrong_passwords_do_not_verify() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let hash = hasher.hash("longenough").await.expect("hashing succeeds");

        assert!(
            !hasher
                .verify("long-enough", &hash)
                .await
                .expect("verification succeeds")
        );
    }

    #[tokio::test]
    async fn equal_passwords_produce_distinct_salted_hashes() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let first = hasher.hash("longenough").await.expect("hashing succeeds");
        let second = hasher.hash("longenough").await.expect("hashing succeeds");

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn malformed_stored_hashes_surface_as_adapter_faults() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let err = hasher
            .verify("longenough", &PasswordHash::new("not-a-bcrypt-hash"))
            .await
            .expect_err("malformed hash must fail");
        assert!(matches!(err, PasswordHasherError::Failed { .. }));
    }
}
