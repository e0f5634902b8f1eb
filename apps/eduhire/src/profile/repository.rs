use tracing::{error, info, warn};

use crate::models::profile::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProfileDocument, ProjectEntry, SkillSet,
};
use crate::profile::ids::with_unique_ids;
use crate::storage::StorageAdapter;

/// Top-level sections to replace. `None` leaves the stored section untouched;
/// there is no merging below the section level.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub personal: Option<PersonalInfo>,
    pub education: Option<Vec<EducationEntry>>,
    pub internships: Option<Vec<ExperienceEntry>>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub projects: Option<Vec<ProjectEntry>>,
    pub skills: Option<SkillSet>,
}

impl ProfilePatch {
    pub fn apply(self, doc: &mut ProfileDocument) {
        if let Some(personal) = self.personal {
            doc.personal = personal;
        }
        if let Some(education) = self.education {
            doc.education = education;
        }
        if let Some(internships) = self.internships {
            doc.internships = internships;
        }
        if let Some(experience) = self.experience {
            doc.experience = experience;
        }
        if let Some(projects) = self.projects {
            doc.projects = projects;
        }
        if let Some(skills) = self.skills {
            doc.skills = skills;
        }
    }
}

impl From<ProfileDocument> for ProfilePatch {
    fn from(doc: ProfileDocument) -> Self {
        Self {
            personal: Some(doc.personal),
            education: Some(doc.education),
            internships: Some(doc.internships),
            experience: Some(doc.experience),
            projects: Some(doc.projects),
            skills: Some(doc.skills),
        }
    }
}

#[derive(Clone)]
pub struct ProfileRepository {
    storage: StorageAdapter,
}

impl ProfileRepository {
    pub fn new(storage: StorageAdapter) -> Self {
        Self { storage }
    }

    /// The stored profile, or the empty document when the user or profile is
    /// unknown or the store cannot be read. Entries stored without an id, or
    /// with one repeated in their list, come back with fresh unique ids; the
    /// repaired ids are persisted by the next `update_profile`.
    pub fn get_profile(&self, email: &str) -> ProfileDocument {
        self.storage
            .load_user_record(email)
            .map(|record| with_unique_ids(record.profile))
            .unwrap_or_default()
    }

    /// Replaces every section with the ones in `doc`.
    pub fn update_profile(&self, email: &str, doc: &ProfileDocument) -> bool {
        self.patch_profile(email, ProfilePatch::from(doc.clone()))
    }

    /// Shallow-merges `patch` into the stored profile. `false` when no record
    /// exists for `email` or the store fails.
    pub fn patch_profile(&self, email: &str, patch: ProfilePatch) -> bool {
        match self
            .storage
            .try_update_existing(email, |record| patch.apply(&mut record.profile))
        {
            Ok(Some(_)) => {
                info!("Updated profile for {email}");
                true
            }
            Ok(None) => {
                warn!("Refusing to update profile for unregistered email {email}");
                false
            }
            Err(e) => {
                error!("Error updating user profile for {email}: {e}");
                false
            }
        }
    }
}
