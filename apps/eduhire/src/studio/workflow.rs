use serde::Serialize;
use tracing::info;

use crate::models::profile::ProfileDocument;
use crate::models::resume::{ResumeDefaults, ResumeViewModel};
use crate::profile::ProfileRepository;
use crate::resume::project;
use crate::session::Session;
use crate::studio::SimulatedLatency;

/// Result of a save, with the generic text shown to the user. No error
/// detail is passed through; a failure only fails this action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved,
    Failed,
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }

    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Saved => "Profile saved successfully!",
            SaveOutcome::Failed => "Failed to save profile. Please try again.",
        }
    }
}

pub struct ResumeStudio {
    profiles: ProfileRepository,
    defaults: ResumeDefaults,
    generation_latency: SimulatedLatency,
    save_latency: SimulatedLatency,
}

impl ResumeStudio {
    pub fn new(
        profiles: ProfileRepository,
        defaults: ResumeDefaults,
        generation_latency: SimulatedLatency,
        save_latency: SimulatedLatency,
    ) -> Self {
        Self {
            profiles,
            defaults,
            generation_latency,
            save_latency,
        }
    }

    /// Immediate preview of the current profile.
    pub fn preview(&self, session: &Session) -> ResumeViewModel {
        project(&self.profiles.get_profile(session.email()), &self.defaults)
    }

    /// "AI" generation: waits the generation delay, then projects the profile
    /// as it is when the delay ends.
    pub async fn generate(&self, session: &Session) -> ResumeViewModel {
        info!("Generating resume for {}", session.email());
        self.generation_latency
            .run(|| self.preview(session))
            .await
    }

    /// Waits the save delay, then replaces the stored profile with `doc`.
    pub async fn save(&self, session: &Session, doc: &ProfileDocument) -> SaveOutcome {
        let saved = self
            .save_latency
            .run(|| self.profiles.update_profile(session.email(), doc))
            .await;
        if saved {
            SaveOutcome::Saved
        } else {
            SaveOutcome::Failed
        }
    }
}
