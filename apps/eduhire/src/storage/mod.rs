// Client-side persistence: a string key-value store (the browser's local
// storage equivalent) and the user-table adapter built on top of it.
// The users table is read-modify-written as one JSON blob with no locking.

pub mod adapter;
pub mod credentials;
pub mod file;
pub mod memory;

use crate::errors::StoreError;

pub use adapter::StorageAdapter;
pub use credentials::{CredentialStore, PlaintextCredentialStore};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key holding the JSON object of user records keyed by email.
pub const USERS_TABLE_KEY: &str = "users_table";
/// Key holding the email of the active session, absent when signed out.
pub const CURRENT_SESSION_KEY: &str = "current_session";

/// String key-value persistence. Implementations must be safe to share, but
/// callers never rely on atomicity across keys.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    /// Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
