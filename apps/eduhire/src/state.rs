use std::sync::Arc;

use crate::config::Config;
use crate::models::resume::ResumeDefaults;
use crate::profile::ProfileRepository;
use crate::session::SessionManager;
use crate::storage::{CredentialStore, KeyValueStore, PlaintextCredentialStore, StorageAdapter};
use crate::studio::{ResumeStudio, SimulatedLatency};

/// Wires the services over one key-value store. This is what a UI shell
/// holds: it restores or creates a `Session` through `sessions` and passes it
/// to the other services.
pub struct AppState {
    pub storage: StorageAdapter,
    pub credentials: Arc<dyn CredentialStore>,
    pub sessions: SessionManager,
    pub profiles: ProfileRepository,
    pub studio: ResumeStudio,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        let storage = StorageAdapter::new(store);
        let credentials: Arc<dyn CredentialStore> =
            Arc::new(PlaintextCredentialStore::new(storage.clone()));
        let profiles = ProfileRepository::new(storage.clone());
        let studio = ResumeStudio::new(
            profiles.clone(),
            ResumeDefaults::sample(),
            SimulatedLatency::from_millis(config.generation_delay_ms),
            SimulatedLatency::from_millis(config.save_delay_ms),
        );
        Self {
            sessions: SessionManager::new(storage.clone(), credentials.clone()),
            storage,
            credentials,
            profiles,
            studio,
        }
    }
}
