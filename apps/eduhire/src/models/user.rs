use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileDocument;

/// One registered account, keyed by email in the users table.
///
/// `password` is stored and compared as plaintext. See `storage::credentials`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub profile: ProfileDocument,
}

impl UserRecord {
    /// A fresh record with an empty profile.
    pub fn new(email: &str) -> Self {
        let now = Utc::now();
        Self {
            email: email.to_string(),
            password: String::new(),
            created_at: now,
            last_updated: now,
            profile: ProfileDocument::default(),
        }
    }
}

/// Fields to shallow-merge into a stored record. `None` leaves the stored
/// value as is.
#[derive(Debug, Clone, Default)]
pub struct UserRecordPatch {
    pub password: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub profile: Option<ProfileDocument>,
}

impl UserRecordPatch {
    pub fn apply(self, record: &mut UserRecord) {
        if let Some(password) = self.password {
            record.password = password;
        }
        if let Some(created_at) = self.created_at {
            record.created_at = created_at;
        }
        if let Some(profile) = self.profile {
            record.profile = profile;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_without_profile_gets_empty_document() {
        let record: UserRecord = serde_json::from_value(json!({
            "email": "ann@example.com",
            "password": "secret",
            "createdAt": "2024-01-01T00:00:00Z",
            "lastUpdated": "2024-01-02T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(record.profile, ProfileDocument::default());
        assert_eq!(record.password, "secret");
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut record = UserRecord::new("ann@example.com");
        record.password = "secret".to_string();
        let mut profile = ProfileDocument::default();
        profile.personal.first_name = "Ann".to_string();

        UserRecordPatch {
            profile: Some(profile.clone()),
            ..Default::default()
        }
        .apply(&mut record);

        assert_eq!(record.password, "secret");
        assert_eq!(record.profile, profile);
    }
}
