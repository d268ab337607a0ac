//! Credential adapters: password hashing and session token signing.

mod bcrypt_hasher;
mod jwt_issuer;

pub use bcrypt_hasher::{BcryptPasswordHasher, DEFAULT_COST};
pub use jwt_issuer::JwtTokenIssuer;
