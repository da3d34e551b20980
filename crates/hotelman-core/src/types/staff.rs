//! Staff account record.

use super::role::Role;

/// A staff account as stored by the directory collaborator.
///
/// `email` is the canonical principal identity; `employee_id` is an
/// alternate login identifier resolving to the same account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffRecord {
    /// Login email and canonical identity.
    pub email: String,
    /// Alternate login identifier.
    pub employee_id: String,
    /// Display name.
    pub full_name: String,
    /// Assigned role.
    pub role: Role,
    /// Salted password hash. Never the plaintext.
    pub password_hash: String,
}
