//! JWT session token adapter.

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;

use crate::domain::ports::{TokenIssuer, TokenIssuerError};
use crate::domain::{SessionToken, TokenClaims};

/// Claim payload serialised into issued tokens.
///
/// No expiration claim is included; an issued token stays valid until the
/// signing secret rotates.
#[derive(Debug, Serialize)]
struct ClaimsDocument<'a> {
    id: String,
    email: &'a str,
}

/// Token issuer signing HS256 JWTs with a process-wide secret.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    key: EncodingKey,
}

impl JwtTokenIssuer {
    /// Create an issuer from the configured signing secret.
    ///
    /// The configuration layer guarantees the secret is non-empty before
    /// this is reached.
    pub fn new(secret: &str) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, claims: &TokenClaims) -> Result<SessionToken, TokenIssuerError> {
        let payload = ClaimsDocument {
            id: claims.id().to_string(),
            email: claims.email().as_str(),
        };
        let value = encode(&Header::default(), &payload, &self.key)
            .map_err(|err| TokenIssuerError::signing(err.to_string()))?;
        Ok(SessionToken::new(value))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{AccountId, EmailAddress};
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
    use serde::Deserialize;

    const SECRET: &str = "issuer-test-secret";

    #[derive(Debug, Deserialize)]
    struct DecodedClaims {
        id: String,
        email: String,
    }

    fn claims() -> TokenClaims {
        TokenClaims::new(
            AccountId::random(),
            EmailAddress::try_new("a@x.com").expect("valid test email"),
        )
    }

    fn validation_without_expiry() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation
    }

    #[test]
    fn issued_tokens_decode_back_to_their_claims() {
        let claims = claims();
        let token = JwtTokenIssuer::new(SECRET)
            .issue(&claims)
            .expect("signing succeeds");

        assert!(!token.as_str().is_empty());

        let decoded = decode::<DecodedClaims>(
            token.as_str(),
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &validation_without_expiry(),
        )
        .expect("token decodes with the issuing secret");

        assert_eq!(decoded.claims.id, claims.id().to_string());
        assert_eq!(decoded.claims.email, claims.email().as_str());
    }

    #[test]
    fn tokens_do_not_decode_with_a_different_secret() {
        let token = JwtTokenIssuer::new(SECRET)
            .issue(&claims())
            .expect("signing succeeds");

        decode::<DecodedClaims>(
            token.as_str(),
            &DecodingKey::from_secret(b"some-other-secret"),
            &validation_without_expiry(),
        )
        .expect_err("wrong secret must fail verification");
    }
}
