//! Response DTOs.

use serde::{Deserialize, Serialize};

use hotelman_auth::token::SessionClaims;
use hotelman_core::types::{Role, StaffRecord};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response: the bearer string plus its decoded claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token. Also set as an HttpOnly cookie.
    pub token: String,
    /// Decoded claims carried by `token`.
    pub claims: SessionClaims,
}

/// Current-session response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Claims attached by the role guard.
    pub claims: SessionClaims,
    /// The staff profile behind the session.
    pub staff: StaffResponse,
}

/// Staff summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffResponse {
    /// Login email.
    pub email: String,
    /// Alternate login identifier.
    pub employee_id: String,
    /// Display name.
    pub full_name: String,
    /// Assigned role.
    pub role: Role,
}

impl From<StaffRecord> for StaffResponse {
    fn from(record: StaffRecord) -> Self {
        Self {
            email: record.email,
            employee_id: record.employee_id,
            full_name: record.full_name,
            role: record.role,
        }
    }
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}
