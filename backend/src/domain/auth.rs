//! Authentication primitives: password policy, login credentials, and
//! session tokens.
//!
//! Keep inbound payload handling outside the domain by concentrating the
//! credential-shaped types here; services consume these instead of raw
//! request strings.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::{AccountId, EmailAddress};

/// Minimum accepted password length for registration.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Password policy failures raised during registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// Password was empty.
    Missing,
    /// Password was shorter than the accepted minimum.
    TooShort {
        /// Minimum number of characters.
        min: usize,
    },
}

impl fmt::Display for PasswordPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Password is required"),
            Self::TooShort { min } => {
                write!(f, "Password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for PasswordPolicyError {}

/// Check a candidate password against the registration policy.
///
/// Login deliberately skips this check: stored accounts predate any policy
/// change and a failed comparison already yields the right error.
pub fn check_password_policy(password: &str) -> Result<(), PasswordPolicyError> {
    if password.is_empty() {
        return Err(PasswordPolicyError::Missing);
    }
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(PasswordPolicyError::TooShort {
            min: PASSWORD_MIN_LENGTH,
        });
    }
    Ok(())
}

/// Raw login credentials captured from an inbound request.
///
/// No validation happens here: a malformed email must be indistinguishable
/// from a wrong password at the API surface. The plaintext password is wiped
/// from memory when the credentials are dropped.
#[derive(Clone)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture credentials from request arguments.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email string used for the account lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Claims embedded in an issued session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    id: AccountId,
    email: EmailAddress,
}

impl TokenClaims {
    /// Build the claim set for an authenticated account.
    pub fn new(id: AccountId, email: EmailAddress) -> Self {
        Self { id, email }
    }

    /// Identifier of the authenticated account.
    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Email of the authenticated account.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Signed proof of a successful login, presented by clients on later
/// requests. Not persisted and not verified anywhere in this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a signed token value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The signed value as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Consume the token, returning the signed value.
    pub fn into_value(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_passwords_are_reported_as_missing() {
        let err = check_password_policy("").expect_err("empty password must fail");
        assert_eq!(err.to_string(), "Password is required");
    }

    #[rstest]
    #[case("a")]
    #[case("1234567")]
    fn short_passwords_are_rejected_with_the_minimum(#[case] password: &str) {
        let err = check_password_policy(password).expect_err("short password must fail");
        assert_eq!(err.to_string(), "Password must be at least 8 characters");
    }

    #[rstest]
    #[case("12345678")]
    #[case("correct horse battery staple")]
    fn passwords_at_or_above_the_minimum_pass(#[case] password: &str) {
        check_password_policy(password).expect("policy should accept");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Eight two-byte characters satisfy the eight-character minimum.
        check_password_policy("éééééééé").expect("multibyte password should pass");
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let credentials = LoginCredentials::new("a@x.com", "hunter2hunter2");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("hunter2"));
    }
}
