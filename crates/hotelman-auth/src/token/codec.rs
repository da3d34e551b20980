//! Bearer-token encoding and validation.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use hotelman_core::config::auth::AuthConfig;
use hotelman_core::error::AppError;

use super::claims::SessionClaims;

/// Decode failure classification.
///
/// Messages never include signature or key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The signature does not verify against the process signing key.
    #[error("token signature verification failed")]
    InvalidSignature,
    /// The token structure cannot be parsed.
    #[error("token is malformed")]
    Malformed,
}

/// Encodes and decodes signed bearer tokens (HMAC-SHA256).
///
/// Constructed once from configuration; the signing key is held for the
/// process lifetime.
#[derive(Clone)]
pub struct TokenCodec {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry policy lives with the callers (middleware and session
        // cache), so decoding an expired token must still succeed.
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Serializes and signs the claims into an opaque bearer string.
    ///
    /// Deterministic: the same claims under the same key always produce
    /// the same bearer string.
    pub fn encode(&self, claims: &SessionClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))
    }

    /// Verifies the signature and deserializes the claims.
    ///
    /// Succeeds even when `exp` is in the past.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        Ok(token_data.claims)
    }
}
