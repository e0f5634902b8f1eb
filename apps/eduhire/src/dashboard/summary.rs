use serde::{Deserialize, Serialize};

use crate::dashboard::completeness;
use crate::models::user::UserRecord;

/// Fallbacks for the dashboard card when the profile is sparse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardDefaults {
    pub name: String,
    pub email: String,
    pub major: String,
    pub graduation: String,
    pub gpa: String,
    pub skills: Vec<String>,
}

impl Default for DashboardDefaults {
    fn default() -> Self {
        Self {
            name: "Student".to_string(),
            email: "email@example.com".to_string(),
            major: "Undeclared".to_string(),
            graduation: "TBD".to_string(),
            gpa: "N/A".to_string(),
            skills: vec![
                "React".to_string(),
                "Python".to_string(),
                "Machine Learning".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub name: String,
    pub email: String,
    pub major: String,
    pub graduation: String,
    pub gpa: String,
    pub internship_count: usize,
    pub project_count: usize,
    pub skills: Vec<String>,
    pub completion: u32,
}

pub fn build_summary(record: &UserRecord, defaults: &DashboardDefaults) -> DashboardSummary {
    let profile = &record.profile;
    let personal = &profile.personal;

    let name = if !personal.first_name.is_empty() && !personal.last_name.is_empty() {
        format!("{} {}", personal.first_name, personal.last_name)
    } else {
        defaults.name.clone()
    };

    let email = [&personal.email, &record.email]
        .into_iter()
        .find(|e| !e.is_empty())
        .cloned()
        .unwrap_or_else(|| defaults.email.clone());

    let latest_education = profile.education.first();

    let skills = profile.skills.flatten();
    let skills = if skills.is_empty() {
        defaults.skills.clone()
    } else {
        skills
    };

    DashboardSummary {
        name,
        email,
        major: non_empty_or(latest_education.map(|e| &e.degree), &defaults.major),
        graduation: non_empty_or(latest_education.map(|e| &e.end_date), &defaults.graduation),
        gpa: non_empty_or(latest_education.map(|e| &e.gpa), &defaults.gpa),
        internship_count: profile.internships.len() + profile.experience.len(),
        project_count: profile.projects.len(),
        skills,
        completion: completeness::score(profile),
    }
}

fn non_empty_or(value: Option<&String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .cloned()
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EducationEntry, ExperienceEntry};

    fn make_record() -> UserRecord {
        UserRecord::new("ann@example.com")
    }

    #[test]
    fn test_empty_profile_uses_fallbacks_and_account_email() {
        let summary = build_summary(&make_record(), &DashboardDefaults::default());
        assert_eq!(summary.name, "Student");
        assert_eq!(summary.email, "ann@example.com");
        assert_eq!(summary.skills, vec!["React", "Python", "Machine Learning"]);
        assert_eq!(summary.completion, 0);
    }

    #[test]
    fn test_name_requires_both_parts() {
        let mut record = make_record();
        record.profile.personal.first_name = "Ann".into();
        let summary = build_summary(&record, &DashboardDefaults::default());
        assert_eq!(summary.name, "Student");

        record.profile.personal.last_name = "Lee".into();
        let summary = build_summary(&record, &DashboardDefaults::default());
        assert_eq!(summary.name, "Ann Lee");
    }

    #[test]
    fn test_email_fallback_chain() {
        let mut record = UserRecord::new("");
        let defaults = DashboardDefaults::default();
        assert_eq!(build_summary(&record, &defaults).email, "email@example.com");

        record.profile.personal.email = "work@example.com".into();
        assert_eq!(build_summary(&record, &defaults).email, "work@example.com");
    }

    #[test]
    fn test_counts_and_first_education() {
        let mut record = make_record();
        record.profile.internships.push(ExperienceEntry::default());
        record.profile.experience.push(ExperienceEntry::default());
        record.profile.education.push(EducationEntry {
            degree: "BSc Physics".into(),
            gpa: "3.9".into(),
            ..Default::default()
        });
        record.profile.education.push(EducationEntry {
            degree: "MSc Physics".into(),
            ..Default::default()
        });

        let summary = build_summary(&record, &DashboardDefaults::default());
        assert_eq!(summary.internship_count, 2);
        assert_eq!(summary.major, "BSc Physics");
        assert_eq!(summary.gpa, "3.9");
        assert_eq!(summary.graduation, "TBD");
    }
}
