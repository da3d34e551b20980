//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use hotelman_core::types::Role;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email or employee id.
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Staff account creation request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStaffRequest {
    /// Login email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Alternate login identifier.
    #[validate(length(min = 1, message = "Employee id is required"))]
    pub employee_id: String,
    /// Display name.
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    /// Initial password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Assigned role.
    pub role: Role,
}
