//! # todohub-auth
//!
//! Authentication services for TodoHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `token` — bearer token codec (encrypted payload in a signed envelope)
//! - `registry` — issued-token registry; row deletion is revocation
//! - `credentials` — registration and email/password authentication
//!
//! Everything here is a stateless service over plain data records: the
//! codec and hasher hold only read-only key material, and the registry and
//! credential store delegate all mutable state to the database layer.

pub mod credentials;
pub mod password;
pub mod registry;
pub mod token;

pub use credentials::CredentialStore;
pub use password::PasswordHasher;
pub use registry::TokenRegistry;
pub use token::{TokenCodec, TokenPayload, TokenType};
