//! Domain entities, services, and ports.
//!
//! Purpose: define the strongly typed entities, the validation rules that
//! guard them, and the use-case services that orchestrate calls over the
//! outbound ports. Nothing in this module knows about MongoDB, bcrypt, JWTs,
//! or GraphQL.
//!
//! Public surface:
//! - `Account`, `RepositoryRecord` and their validated field types.
//! - `AccountsService`, `CatalogueService`: the use-case layer.
//! - `DomainError` / `ErrorCode`: transport-agnostic failure payloads.
//! - `ports`: the traits outbound adapters implement.

pub mod account;
pub mod accounts_service;
pub mod auth;
pub mod catalogue;
pub mod catalogue_service;
pub mod error;
pub mod ports;

pub use self::account::{Account, AccountId, AccountValidationError, EmailAddress, PasswordHash};
pub use self::accounts_service::AccountsService;
pub use self::auth::{
    LoginCredentials, PASSWORD_MIN_LENGTH, PasswordPolicyError, SessionToken, TokenClaims,
    check_password_policy,
};
pub use self::catalogue::{
    NewRepositoryRecord, RecordId, RecordValidationError, RepositoryRecord,
};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{DomainError, ErrorCode};
