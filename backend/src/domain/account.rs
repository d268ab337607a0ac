//! Account entity and its validated field types.

use std::fmt;

use uuid::Uuid;

/// Validation errors returned by the account field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Identifier was not a valid UUID.
    InvalidId,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Email is required"),
            Self::InvalidId => write!(f, "account id must be a valid UUID"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Stable account identifier, generated at creation and stored as a UUID
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier read back from storage.
    pub fn parse(id: &str) -> Result<Self, AccountValidationError> {
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| AccountValidationError::InvalidId)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address used as the account lookup key.
///
/// Stored exactly as supplied; the only invariant is that it is not blank.
/// Lookups are case sensitive, matching the stored value byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an email address.
    pub fn try_new(email: impl Into<String>) -> Result<Self, AccountValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(AccountValidationError::EmptyEmail);
        }
        Ok(Self(email))
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salted one-way hash of an account password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a hash produced by a hashing adapter or read from storage.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// The hash as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A registered user's credentials record.
///
/// ## Invariants
/// - `email` is unique across all accounts; the store's unique index is the
///   source of truth.
/// - `password_hash` never contains the raw password and is set once at
///   creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    email: EmailAddress,
    password_hash: PasswordHash,
}

impl Account {
    /// Assemble an account from its validated parts.
    pub fn new(id: AccountId, email: EmailAddress, password_hash: PasswordHash) -> Self {
        Self {
            id,
            email,
            password_hash,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Email lookup key.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
