//! Claims structure embedded in every bearer token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelman_core::types::Role;

/// Claims payload embedded in a signed bearer token.
///
/// `exp` is strictly in the future at mint time. Expiry is enforced by
/// the session cache and the authorization middleware, never by the
/// codec itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject — the principal's canonical email.
    pub sub: String,
    /// Role at the time of issuance.
    pub role: Role,
    /// Unique session id, fresh for every mint.
    pub sid: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaims {
    /// Returns the principal identity.
    pub fn principal(&self) -> &str {
        &self.sub
    }

    /// Returns the session id.
    pub fn session_id(&self) -> Uuid {
        self.sid
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether these claims have expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
