//! Session cache, token issuance, and periodic sweep.

pub mod cache;
pub mod issuer;
pub mod sweep;

pub use cache::{SessionCache, SessionEntry};
pub use issuer::TokenIssuer;
pub use sweep::SessionSweeper;
