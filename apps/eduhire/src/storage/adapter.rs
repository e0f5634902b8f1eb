use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info};

use crate::errors::StoreError;
use crate::models::user::{UserRecord, UserRecordPatch};
use crate::storage::{KeyValueStore, CURRENT_SESSION_KEY, USERS_TABLE_KEY};

pub type UsersTable = BTreeMap<String, UserRecord>;

/// Owns the users table and the session pointer.
///
/// The table is one JSON blob; every write reads it, modifies one record and
/// writes it back whole. Two writers racing on the same store (two windows on
/// one data directory) can lose an update. That is accepted for a single-user
/// local tool and is not guarded against.
#[derive(Clone)]
pub struct StorageAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl StorageAdapter {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load_table(&self) -> Result<UsersTable, StoreError> {
        match self.store.get(USERS_TABLE_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(UsersTable::new()),
        }
    }

    fn save_table(&self, table: &UsersTable) -> Result<(), StoreError> {
        let blob = serde_json::to_string(table)?;
        self.store.set(USERS_TABLE_KEY, &blob)
    }

    /// Shallow-merges `patch` into the record for `email`, creating it if
    /// absent, and stamps `last_updated`.
    pub fn try_save_user_record(
        &self,
        email: &str,
        patch: UserRecordPatch,
    ) -> Result<UserRecord, StoreError> {
        let mut table = self.load_table()?;
        let record = table
            .entry(email.to_string())
            .or_insert_with(|| UserRecord::new(email));
        patch.apply(record);
        record.last_updated = Utc::now();
        let saved = record.clone();
        self.save_table(&table)?;
        debug!("Saved user record for {email}");
        Ok(saved)
    }

    /// Applies `update` to an existing record only. Returns `None` without
    /// writing when no record exists for `email`.
    pub fn try_update_existing(
        &self,
        email: &str,
        update: impl FnOnce(&mut UserRecord),
    ) -> Result<Option<UserRecord>, StoreError> {
        let mut table = self.load_table()?;
        let Some(record) = table.get_mut(email) else {
            return Ok(None);
        };
        update(record);
        record.last_updated = Utc::now();
        let saved = record.clone();
        self.save_table(&table)?;
        Ok(Some(saved))
    }

    pub fn save_user_record(&self, email: &str, patch: UserRecordPatch) -> bool {
        match self.try_save_user_record(email, patch) {
            Ok(_) => true,
            Err(e) => {
                error!("Error saving user record for {email}: {e}");
                false
            }
        }
    }

    pub fn load_user_record(&self, email: &str) -> Option<UserRecord> {
        match self.load_table() {
            Ok(mut table) => table.remove(email),
            Err(e) => {
                error!("Error loading user record for {email}: {e}");
                None
            }
        }
    }

    /// Registration write: stores the plaintext password and stamps both
    /// timestamps.
    pub fn store_credentials(&self, email: &str, password: &str) -> bool {
        let patch = UserRecordPatch {
            password: Some(password.to_string()),
            created_at: Some(Utc::now()),
            ..Default::default()
        };
        match self.try_save_user_record(email, patch) {
            Ok(_) => {
                info!("Stored credentials for {email}");
                true
            }
            Err(e) => {
                error!("Error saving user credentials for {email}: {e}");
                false
            }
        }
    }

    /// Returns the record only when `password` matches the stored one exactly
    /// (case-sensitive, plaintext).
    pub fn validate_credentials(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.load_user_record(email)
            .filter(|record| record.password == password)
    }

    pub fn set_current_session(&self, email: &str) -> bool {
        match self.store.set(CURRENT_SESSION_KEY, email) {
            Ok(()) => true,
            Err(e) => {
                error!("Error setting current session: {e}");
                false
            }
        }
    }

    /// The active session's email. An empty pointer counts as no session.
    pub fn get_current_session_email(&self) -> Option<String> {
        match self.store.get(CURRENT_SESSION_KEY) {
            Ok(email) => email.filter(|e| !e.is_empty()),
            Err(e) => {
                error!("Error reading current session: {e}");
                None
            }
        }
    }

    pub fn clear_session(&self) -> bool {
        match self.store.remove(CURRENT_SESSION_KEY) {
            Ok(()) => true,
            Err(e) => {
                error!("Error clearing current session: {e}");
                false
            }
        }
    }

    /// Resolves the session pointer to its record. `None` if nobody is signed
    /// in or the pointer names an unknown email.
    pub fn get_current_user(&self) -> Option<UserRecord> {
        self.get_current_session_email()
            .and_then(|email| self.load_user_record(&email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileDocument;
    use crate::storage::MemoryStore;

    fn make_adapter() -> (Arc<MemoryStore>, StorageAdapter) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), StorageAdapter::new(store))
    }

    fn profile_named(first: &str) -> ProfileDocument {
        let mut doc = ProfileDocument::default();
        doc.personal.first_name = first.to_string();
        doc
    }

    #[test]
    fn test_save_creates_missing_record() {
        let (_, adapter) = make_adapter();
        assert!(adapter.save_user_record(
            "ann@example.com",
            UserRecordPatch {
                profile: Some(profile_named("Ann")),
                ..Default::default()
            }
        ));

        let record = adapter.load_user_record("ann@example.com").unwrap();
        assert_eq!(record.email, "ann@example.com");
        assert_eq!(record.password, "");
        assert_eq!(record.profile.personal.first_name, "Ann");
    }

    #[test]
    fn test_save_merges_shallowly_and_stamps_last_updated() {
        let (_, adapter) = make_adapter();
        assert!(adapter.store_credentials("ann@example.com", "secret"));
        let before = adapter.load_user_record("ann@example.com").unwrap();

        assert!(adapter.save_user_record(
            "ann@example.com",
            UserRecordPatch {
                profile: Some(profile_named("Ann")),
                ..Default::default()
            }
        ));

        let after = adapter.load_user_record("ann@example.com").unwrap();
        assert_eq!(after.password, "secret");
        assert_eq!(after.created_at, before.created_at);
        assert!(after.last_updated >= before.last_updated);
        assert_eq!(after.profile.personal.first_name, "Ann");
    }

    #[test]
    fn test_load_unknown_email_is_none() {
        let (_, adapter) = make_adapter();
        assert!(adapter.load_user_record("nobody@example.com").is_none());
    }

    #[test]
    fn test_corrupt_table_degrades_without_overwrite() {
        let (store, adapter) = make_adapter();
        store.set(USERS_TABLE_KEY, "{not json").unwrap();

        assert!(adapter.load_user_record("ann@example.com").is_none());
        assert!(!adapter.save_user_record("ann@example.com", UserRecordPatch::default()));
        assert_eq!(
            store.get(USERS_TABLE_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_table_is_keyed_by_email() {
        let (store, adapter) = make_adapter();
        adapter.store_credentials("ann@example.com", "a");
        adapter.store_credentials("bob@example.com", "b");

        let blob = store.get(USERS_TABLE_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(value["ann@example.com"]["password"], "a");
        assert_eq!(value["bob@example.com"]["email"], "bob@example.com");
        assert!(value["bob@example.com"]["lastUpdated"].is_string());
    }

    #[test]
    fn test_validate_credentials_exact_match_only() {
        let (_, adapter) = make_adapter();
        adapter.store_credentials("ann@example.com", "Secret");

        assert!(adapter
            .validate_credentials("ann@example.com", "Secret")
            .is_some());
        assert!(adapter
            .validate_credentials("ann@example.com", "secret")
            .is_none());
        assert!(adapter
            .validate_credentials("ann@example.com", "Secret ")
            .is_none());
        assert!(adapter
            .validate_credentials("bob@example.com", "Secret")
            .is_none());
    }

    #[test]
    fn test_session_pointer_is_independent_of_table() {
        let (store, adapter) = make_adapter();
        assert_eq!(adapter.get_current_session_email(), None);

        assert!(adapter.set_current_session("ann@example.com"));
        assert_eq!(
            adapter.get_current_session_email().as_deref(),
            Some("ann@example.com")
        );
        assert!(store.get(USERS_TABLE_KEY).unwrap().is_none());

        assert!(adapter.clear_session());
        assert_eq!(adapter.get_current_session_email(), None);
        assert!(adapter.clear_session());
    }

    #[test]
    fn test_current_user_requires_existing_record() {
        let (_, adapter) = make_adapter();
        adapter.set_current_session("ghost@example.com");
        assert!(adapter.get_current_user().is_none());

        adapter.store_credentials("ghost@example.com", "pw");
        assert_eq!(
            adapter.get_current_user().map(|r| r.email),
            Some("ghost@example.com".to_string())
        );
    }

    #[test]
    fn test_update_existing_skips_unknown_email() {
        let (store, adapter) = make_adapter();
        let updated = adapter
            .try_update_existing("nobody@example.com", |r| r.password = "x".to_string())
            .unwrap();
        assert!(updated.is_none());
        assert!(store.get(USERS_TABLE_KEY).unwrap().is_none());
    }
}
