//! Account use-cases: registration, login, and listing.

use std::sync::Arc;

use crate::domain::ports::{AccountPersistenceError, AccountRepository, PasswordHasher, TokenIssuer};
use crate::domain::{
    Account, AccountId, DomainError, EmailAddress, LoginCredentials, SessionToken, TokenClaims,
    check_password_policy,
};

/// User-visible error raised when a registration email is already taken.
const EMAIL_TAKEN: &str = "Email already exists";

/// User-visible error raised for every failed login.
///
/// Unknown emails and wrong passwords share this text so responses do not
/// reveal whether an account exists.
const INVALID_CREDENTIALS: &str = "Incorrect email or password";

/// Orchestrates account operations over the persistence and credential
/// ports.
#[derive(Clone)]
pub struct AccountsService {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AccountsService {
    /// Assemble the service from its port implementations.
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    /// Register a new account.
    ///
    /// The duplicate-email pre-check exists for the precise error message;
    /// the store's unique index remains the source of truth, so an insert
    /// losing a concurrent race surfaces the same error.
    pub async fn register(
        &self,
        email: EmailAddress,
        password: &str,
    ) -> Result<Account, DomainError> {
        let existing = self
            .accounts
            .find_by_email(&email)
            .await
            .map_err(internal_fault)?;
        if existing.is_some() {
            return Err(DomainError::invalid_request(EMAIL_TAKEN));
        }

        check_password_policy(password)
            .map_err(|err| DomainError::invalid_request(err.to_string()))?;

        let hash = self.hasher.hash(password).await.map_err(internal_fault)?;
        let account = Account::new(AccountId::random(), email, hash);

        match self.accounts.insert(&account).await {
            Ok(()) => Ok(account),
            Err(AccountPersistenceError::DuplicateEmail) => {
                Err(DomainError::invalid_request(EMAIL_TAKEN))
            }
            Err(err) => Err(internal_fault(err)),
        }
    }

    /// Authenticate credentials and issue a session token.
    ///
    /// The hasher is not consulted when no account matches the email; the
    /// lookup result alone decides that failure path.
    pub async fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<SessionToken, DomainError> {
        let Ok(email) = EmailAddress::try_new(credentials.email()) else {
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        };
        let Some(account) = self
            .accounts
            .find_by_email(&email)
            .await
            .map_err(internal_fault)?
        else {
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        };

        let verified = self
            .hasher
            .verify(credentials.password(), account.password_hash())
            .await
            .map_err(internal_fault)?;
        if !verified {
            return Err(DomainError::unauthorized(INVALID_CREDENTIALS));
        }

        let claims = TokenClaims::new(*account.id(), account.email().clone());
        self.tokens.issue(&claims).map_err(internal_fault)
    }

    /// List every stored account, in store order.
    pub async fn list(&self) -> Result<Vec<Account>, DomainError> {
        self.accounts.list().await.map_err(internal_fault)
    }
}

fn internal_fault(error: impl std::fmt::Display) -> DomainError {
    DomainError::internal(error.to_string())
}
