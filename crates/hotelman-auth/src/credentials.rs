//! Argon2id secret hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use hotelman_core::error::AppError;

/// Compares supplied secrets against stored salted hashes.
#[derive(Debug, Clone, Default)]
pub struct CredentialVerifier;

impl CredentialVerifier {
    /// Creates a new verifier instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext secret using Argon2id with a random salt.
    pub fn hash(&self, secret: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext secret against a stored hash.
    ///
    /// Any mismatch — including an unparseable stored hash — reports
    /// `false`. Callers cannot distinguish the failure modes, and the
    /// plaintext never leaves the call stack.
    pub fn verify(&self, secret: &str, stored_hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
            tracing::debug!("Stored hash could not be parsed; treating as mismatch");
            return false;
        };

        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_matches() {
        let verifier = CredentialVerifier::new();
        let hash = verifier.hash("correct-pw").unwrap();
        assert!(verifier.verify("correct-pw", &hash));
    }

    #[test]
    fn wrong_secret_does_not_match() {
        let verifier = CredentialVerifier::new();
        let hash = verifier.hash("correct-pw").unwrap();
        assert!(!verifier.verify("wrong-pw", &hash));
    }

    #[test]
    fn malformed_stored_hash_is_a_mismatch() {
        let verifier = CredentialVerifier::new();
        assert!(!verifier.verify("anything", "not-a-phc-string"));
        assert!(!verifier.verify("anything", ""));
    }

    #[test]
    fn hashes_are_salted() {
        let verifier = CredentialVerifier::new();
        let a = verifier.hash("same-pw").unwrap();
        let b = verifier.hash("same-pw").unwrap();
        assert_ne!(a, b);
        assert!(verifier.verify("same-pw", &a));
        assert!(verifier.verify("same-pw", &b));
    }
}
