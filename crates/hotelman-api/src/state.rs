//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use hotelman_auth::credentials::CredentialVerifier;
use hotelman_auth::directory::InMemoryStaffDirectory;
use hotelman_auth::session::cache::SessionCache;
use hotelman_auth::session::issuer::TokenIssuer;
use hotelman_auth::token::TokenCodec;
use hotelman_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Staff account store.
    pub directory: Arc<InMemoryStaffDirectory>,
    /// Secret hashing and verification.
    pub verifier: CredentialVerifier,
    /// Bearer-token codec.
    pub codec: Arc<TokenCodec>,
    /// Per-principal session store.
    pub session_cache: Arc<SessionCache>,
    /// Login orchestration.
    pub issuer: Arc<TokenIssuer>,
}
