//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Authentication and token issuance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Loaded once at process
    /// start and held for the process lifetime.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Bearer token lifetime in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u64,
    /// Optional first-run administrator account, provisioned at startup
    /// when the staff directory is empty.
    #[serde(default)]
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// First-run administrator account definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapAdmin {
    /// Login email.
    pub email: String,
    /// Alternate identifier (employee id).
    pub employee_id: String,
    /// Display name.
    pub full_name: String,
    /// Initial plaintext password, hashed before storage.
    pub password: String,
}

impl BootstrapAdmin {
    /// The role a bootstrap account always receives.
    pub fn role(&self) -> Role {
        Role::Admin
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_days: default_token_ttl_days(),
            bootstrap_admin: None,
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl_days() -> u64 {
    7
}
