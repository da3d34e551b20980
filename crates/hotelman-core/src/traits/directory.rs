//! Staff directory trait for pluggable user-record stores.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::StaffRecord;

/// Trait for the user-record store the token issuer consults at login.
///
/// Lookups are tried against two distinct identifier fields: the login
/// email and the employee id. Both resolve to the same account. This is
/// the only external I/O in the auth core; callers are expected to bound
/// it with a timeout.
#[async_trait]
pub trait StaffDirectory: Send + Sync {
    /// Look up a staff record by login email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<StaffRecord>>;

    /// Look up a staff record by employee id.
    async fn find_by_employee_id(&self, employee_id: &str) -> AppResult<Option<StaffRecord>>;
}
