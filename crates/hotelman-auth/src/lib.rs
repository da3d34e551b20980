//! # hotelman-auth
//!
//! Session and authorization core for the Hotelman front-desk backend.
//!
//! ## Modules
//!
//! - `credentials` — Argon2id secret hashing and verification
//! - `token` — claims payload and the signed bearer-token codec
//! - `session` — concurrency-safe session cache, token issuer, and sweep
//! - `directory` — in-memory staff directory collaborator

pub mod credentials;
pub mod directory;
pub mod session;
pub mod token;

pub use credentials::CredentialVerifier;
pub use directory::InMemoryStaffDirectory;
pub use session::{SessionCache, SessionEntry, SessionSweeper, TokenIssuer};
pub use token::{SessionClaims, TokenCodec, TokenError};
