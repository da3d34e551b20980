//! In-memory staff directory.
//!
//! Stand-in for the persistence collaborator: a process-lifetime store
//! keyed by email, with a secondary scan for employee-id lookups.

use async_trait::async_trait;
use dashmap::DashMap;

use hotelman_core::error::AppError;
use hotelman_core::result::AppResult;
use hotelman_core::traits::StaffDirectory;
use hotelman_core::types::StaffRecord;

/// Process-lifetime staff directory backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryStaffDirectory {
    records: DashMap<String, StaffRecord>,
}

impl InMemoryStaffDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Adds a staff record.
    ///
    /// Both identifier fields must be unused; a duplicate of either is
    /// rejected.
    pub fn insert(&self, record: StaffRecord) -> AppResult<()> {
        if self.records.contains_key(&record.email) {
            return Err(AppError::validation(format!(
                "A staff account with email '{}' already exists",
                record.email
            )));
        }
        if self
            .records
            .iter()
            .any(|existing| existing.employee_id == record.employee_id)
        {
            return Err(AppError::validation(format!(
                "A staff account with employee id '{}' already exists",
                record.employee_id
            )));
        }

        self.records.insert(record.email.clone(), record);
        Ok(())
    }

    /// Returns all staff records, ordered by email.
    pub fn list(&self) -> Vec<StaffRecord> {
        let mut records: Vec<StaffRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.email.cmp(&b.email));
        records
    }

    /// Whether the directory holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl StaffDirectory for InMemoryStaffDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<StaffRecord>> {
        Ok(self.records.get(email).map(|entry| entry.value().clone()))
    }

    async fn find_by_employee_id(&self, employee_id: &str) -> AppResult<Option<StaffRecord>> {
        Ok(self
            .records
            .iter()
            .find(|entry| entry.employee_id == employee_id)
            .map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hotelman_core::types::Role;

    fn record(email: &str, employee_id: &str) -> StaffRecord {
        StaffRecord {
            email: email.to_string(),
            employee_id: employee_id.to_string(),
            full_name: "Test Staff".to_string(),
            role: Role::Receptionist,
            password_hash: "$argon2id$placeholder".to_string(),
        }
    }

    #[tokio::test]
    async fn both_identifier_fields_resolve() {
        let directory = InMemoryStaffDirectory::new();
        directory.insert(record("alice@example.com", "EMP-001")).unwrap();

        let by_email = directory.find_by_email("alice@example.com").await.unwrap();
        let by_id = directory.find_by_employee_id("EMP-001").await.unwrap();
        assert_eq!(by_email, by_id);
        assert!(by_email.is_some());
    }

    #[tokio::test]
    async fn unknown_identifiers_return_none() {
        let directory = InMemoryStaffDirectory::new();
        assert!(directory.find_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(directory.find_by_employee_id("EMP-404").await.unwrap().is_none());
    }

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let directory = InMemoryStaffDirectory::new();
        directory.insert(record("alice@example.com", "EMP-001")).unwrap();

        assert!(directory.insert(record("alice@example.com", "EMP-002")).is_err());
        assert!(directory.insert(record("bob@example.com", "EMP-001")).is_err());
        assert_eq!(directory.list().len(), 1);
    }

    #[test]
    fn list_is_ordered_by_email() {
        let directory = InMemoryStaffDirectory::new();
        directory.insert(record("carol@example.com", "EMP-003")).unwrap();
        directory.insert(record("alice@example.com", "EMP-001")).unwrap();

        let emails: Vec<String> = directory.list().into_iter().map(|r| r.email).collect();
        assert_eq!(emails, vec!["alice@example.com", "carol@example.com"]);
    }
}
