use crate::models::user::UserRecord;
use crate::storage::StorageAdapter;

/// Credential check seam. Callers only see this trait, so a hashing
/// implementation can replace the plaintext one without touching them.
pub trait CredentialStore: Send + Sync {
    /// Persists credentials for `email`. `false` on storage failure.
    fn store(&self, email: &str, password: &str) -> bool;

    /// The user's record when `password` is valid for `email`.
    fn verify(&self, email: &str, password: &str) -> Option<UserRecord>;
}

/// Stores passwords as given and compares them byte for byte.
///
/// Not fit for a real product: passwords must be salted and hashed there.
pub struct PlaintextCredentialStore {
    storage: StorageAdapter,
}

impl PlaintextCredentialStore {
    pub fn new(storage: StorageAdapter) -> Self {
        Self { storage }
    }
}

impl CredentialStore for PlaintextCredentialStore {
    fn store(&self, email: &str, password: &str) -> bool {
        self.storage.store_credentials(email, password)
    }

    fn verify(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.storage.validate_credentials(email, password)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_store_then_verify() {
        let storage = StorageAdapter::new(Arc::new(MemoryStore::new()));
        let creds = PlaintextCredentialStore::new(storage);
        assert!(creds.store("ann@example.com", "pw"));
        assert_eq!(
            creds.verify("ann@example.com", "pw").map(|r| r.email),
            Some("ann@example.com".to_string())
        );
        assert!(creds.verify("ann@example.com", "PW").is_none());
    }
}
