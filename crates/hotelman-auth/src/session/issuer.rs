//! Login orchestration: credential check, session reuse, token minting.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use hotelman_core::config::auth::AuthConfig;
use hotelman_core::error::AppError;
use hotelman_core::traits::StaffDirectory;
use hotelman_core::types::StaffRecord;

use crate::credentials::CredentialVerifier;
use crate::token::{SessionClaims, TokenCodec};

use super::cache::{SessionCache, SessionEntry};

/// Produces bearer tokens for successful logins.
///
/// Holds the only reference to the session cache besides the logout
/// path; repeated logins inside the validity window reuse the cached
/// token instead of minting a new one.
#[derive(Clone)]
pub struct TokenIssuer {
    /// External user-record lookup.
    directory: Arc<dyn StaffDirectory>,
    /// Secret-hash comparison.
    verifier: CredentialVerifier,
    /// Bearer-token codec.
    codec: Arc<TokenCodec>,
    /// Per-principal session store.
    cache: Arc<SessionCache>,
    /// Lifetime of a minted token.
    token_ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates a new issuer with all required dependencies.
    pub fn new(
        directory: Arc<dyn StaffDirectory>,
        verifier: CredentialVerifier,
        codec: Arc<TokenCodec>,
        cache: Arc<SessionCache>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            directory,
            verifier,
            codec,
            cache,
            token_ttl: Duration::days(config.token_ttl_days as i64),
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Resolve the identifier to a staff record (email first, then
    ///    employee id).
    /// 2. Verify the supplied secret against the stored hash.
    /// 3. Reuse the cached session or mint a fresh one.
    ///
    /// Every failure of steps 1–2 surfaces as the same
    /// `InvalidCredentials` error.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<SessionEntry, AppError> {
        let record = self
            .resolve(identifier)
            .await?
            .ok_or_else(AppError::invalid_credentials)?;

        if !self.verifier.verify(secret, &record.password_hash) {
            warn!(principal = %record.email, "Login rejected: credential mismatch");
            return Err(AppError::invalid_credentials());
        }

        let entry = self
            .cache
            .get_or_create(&record.email, || self.mint(&record))?;

        info!(
            principal = %record.email,
            session_id = %entry.claims.sid,
            "Login successful"
        );

        Ok(entry)
    }

    /// Tries the two identifier fields that both resolve to an account.
    async fn resolve(&self, identifier: &str) -> Result<Option<StaffRecord>, AppError> {
        if let Some(record) = self.directory.find_by_email(identifier).await? {
            return Ok(Some(record));
        }
        self.directory.find_by_employee_id(identifier).await
    }

    /// Mints claims with a fresh session id and the configured expiry,
    /// then signs them.
    fn mint(&self, record: &StaffRecord) -> Result<SessionEntry, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: record.email.clone(),
            role: record.role,
            sid: Uuid::new_v4(),
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        let token = self.codec.encode(&claims)?;

        Ok(SessionEntry { token, claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hotelman_core::error::ErrorKind;
    use hotelman_core::types::Role;

    use crate::directory::InMemoryStaffDirectory;

    fn make_issuer() -> (TokenIssuer, Arc<SessionCache>) {
        let verifier = CredentialVerifier::new();
        let directory = Arc::new(InMemoryStaffDirectory::new());
        directory
            .insert(StaffRecord {
                email: "alice@example.com".to_string(),
                employee_id: "EMP-001".to_string(),
                full_name: "Alice Reyes".to_string(),
                role: Role::Receptionist,
                password_hash: verifier.hash("correct-pw").unwrap(),
            })
            .unwrap();

        let config = AuthConfig::default();
        let cache = Arc::new(SessionCache::new());
        let issuer = TokenIssuer::new(
            directory,
            verifier,
            Arc::new(TokenCodec::new(&config)),
            Arc::clone(&cache),
            &config,
        );
        (issuer, cache)
    }

    #[tokio::test]
    async fn login_mints_a_future_dated_token() {
        let (issuer, _) = make_issuer();
        let entry = issuer.login("alice@example.com", "correct-pw").await.unwrap();
        assert_eq!(entry.claims.sub, "alice@example.com");
        assert_eq!(entry.claims.role, Role::Receptionist);
        assert!(entry.claims.exp > Utc::now().timestamp());
    }

    #[tokio::test]
    async fn repeated_login_reuses_the_token() {
        let (issuer, _) = make_issuer();
        let first = issuer.login("alice@example.com", "correct-pw").await.unwrap();
        let second = issuer.login("alice@example.com", "correct-pw").await.unwrap();
        assert_eq!(first.token, second.token);
        assert_eq!(first.claims.sid, second.claims.sid);
    }

    #[tokio::test]
    async fn alternate_identifier_resolves_the_same_session() {
        let (issuer, _) = make_issuer();
        let by_email = issuer.login("alice@example.com", "correct-pw").await.unwrap();
        let by_employee_id = issuer.login("EMP-001", "correct-pw").await.unwrap();
        assert_eq!(by_email.token, by_employee_id.token);
    }

    #[tokio::test]
    async fn wrong_secret_is_invalid_credentials() {
        let (issuer, cache) = make_issuer();
        let err = issuer
            .login("alice@example.com", "wrong-pw")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn unknown_identifier_is_indistinguishable_from_wrong_secret() {
        let (issuer, _) = make_issuer();
        let unknown = issuer
            .login("nobody@example.com", "correct-pw")
            .await
            .unwrap_err();
        let mismatch = issuer
            .login("alice@example.com", "wrong-pw")
            .await
            .unwrap_err();
        assert_eq!(unknown.kind, mismatch.kind);
        assert_eq!(unknown.message, mismatch.message);
    }

    #[tokio::test]
    async fn invalidated_session_gets_a_new_id_on_next_login() {
        let (issuer, cache) = make_issuer();
        let first = issuer.login("alice@example.com", "correct-pw").await.unwrap();
        cache.invalidate("alice@example.com");
        let second = issuer.login("alice@example.com", "correct-pw").await.unwrap();
        assert_ne!(first.claims.sid, second.claims.sid);
    }
}
