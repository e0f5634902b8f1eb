use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::SessionError;
use crate::models::user::UserRecord;
use crate::storage::{CredentialStore, StorageAdapter};

/// The signed-in identity. Handed explicitly to every operation that acts on
/// behalf of the user; there is at most one active session per store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    email: String,
}

impl Session {
    pub fn email(&self) -> &str {
        &self.email
    }
}

pub struct SessionManager {
    storage: StorageAdapter,
    credentials: Arc<dyn CredentialStore>,
}

impl SessionManager {
    pub fn new(storage: StorageAdapter, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            storage,
            credentials,
        }
    }

    /// Creates the account with an empty profile and signs it in. The
    /// password must be non-empty.
    pub fn register(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        if password.is_empty() {
            warn!("Registration rejected: empty password for {email}");
            return Err(SessionError::EmptyPassword);
        }
        let already_registered = self
            .storage
            .load_user_record(email)
            .is_some_and(|record| !record.password.is_empty());
        if already_registered {
            warn!("Registration rejected: {email} already has an account");
            return Err(SessionError::AlreadyRegistered(email.to_string()));
        }

        if !self.credentials.store(email, password) {
            return Err(SessionError::Storage(format!(
                "could not store credentials for {email}"
            )));
        }
        info!("Registered {email}");
        self.start(email)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        if self.credentials.verify(email, password).is_none() {
            warn!("Failed login for {email}");
            return Err(SessionError::InvalidCredentials);
        }
        info!("Logged in {email}");
        self.start(email)
    }

    /// Ends the session. `false` if the pointer could not be cleared.
    pub fn logout(&self, session: Session) -> bool {
        info!("Logging out {}", session.email);
        self.storage.clear_session()
    }

    /// The session left by a previous run, if its user still exists.
    pub fn restore(&self) -> Option<Session> {
        let email = self.storage.get_current_session_email()?;
        if self.storage.load_user_record(&email).is_none() {
            warn!("Session pointer names unknown user {email}; ignoring");
            return None;
        }
        Some(Session { email })
    }

    pub fn current_user(&self, session: &Session) -> Option<UserRecord> {
        self.storage.load_user_record(&session.email)
    }

    fn start(&self, email: &str) -> Result<Session, SessionError> {
        if !self.storage.set_current_session(email) {
            return Err(SessionError::Storage(
                "could not record the active session".to_string(),
            ));
        }
        Ok(Session {
            email: email.to_string(),
        })
    }
}
