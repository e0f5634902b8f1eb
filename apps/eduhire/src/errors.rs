use thiserror::Error;

use crate::models::profile::{EntryId, Section};

/// Failure of the underlying key-value store or of (de)serializing a blob.
///
/// Never escapes the storage adapter's public contract: those operations log
/// it and degrade to `false` / `None`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Rejected pure transform over a profile document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("A {entry_type} entry cannot be stored in the {section} section")]
    SectionMismatch {
        section: &'static str,
        entry_type: &'static str,
    },

    #[error("Entry id {id} already exists in {}", .section.as_str())]
    DuplicateId { section: Section, id: EntryId },

    #[error("Unknown field '{field}' for {target}")]
    UnknownField { target: &'static str, field: String },

    #[error("Unknown skill category '{0}'")]
    UnknownSkillCategory(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("An account already exists for {0}")]
    AlreadyRegistered(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl SessionError {
    /// Generic message for the view layer. No error detail is passed through.
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::AlreadyRegistered(_) => "An account with this email already exists.",
            SessionError::InvalidCredentials => "Invalid email or password.",
            SessionError::EmptyPassword => "Please choose a password.",
            SessionError::Storage(msg) => {
                tracing::error!("Session storage error: {msg}");
                "Something went wrong. Please try again."
            }
        }
    }
}
