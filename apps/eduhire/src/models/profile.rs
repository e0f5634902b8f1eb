use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EntryError;

/// Identifier of a list entry. Clock-millisecond based, see `profile::ids`.
pub type EntryId = i64;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub portfolio: String,
    #[serde(alias = "avatar")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Project technologies as the forms store them: the builder keeps the raw
/// comma-separated input, other writers keep an already split list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Technologies {
    Text(String),
    List(Vec<String>),
}

impl Default for Technologies {
    fn default() -> Self {
        Technologies::Text(String::new())
    }
}

impl Technologies {
    /// Trimmed, non-empty technology names in input order.
    pub fn normalized(&self) -> Vec<String> {
        let trimmed = |s: &str| {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        };
        match self {
            Technologies::Text(text) => text.split(',').filter_map(trimmed).collect(),
            Technologies::List(items) => items
                .iter()
                .filter_map(|s| trimmed(s.as_str()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub technologies: Technologies,
    pub github: String,
    pub live_url: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Frameworks,
    Databases,
    Tools,
    Technical,
    Languages,
    Soft,
}

impl SkillCategory {
    /// Canonical order. The builder categories come first, then the
    /// categories used by the standalone profile view.
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Programming,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Tools,
        SkillCategory::Technical,
        SkillCategory::Languages,
        SkillCategory::Soft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Databases => "databases",
            SkillCategory::Tools => "tools",
            SkillCategory::Technical => "technical",
            SkillCategory::Languages => "languages",
            SkillCategory::Soft => "soft",
        }
    }
}

impl FromStr for SkillCategory {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EntryError::UnknownSkillCategory(s.to_string()))
    }
}

/// Canonical skills schema. Unifies the builder shape
/// (`programming/frameworks/databases/tools`) with the profile-view shape
/// (`technical/languages/soft`); absent categories deserialize as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SkillSet {
    pub programming: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
    pub technical: Vec<String>,
    pub languages: Vec<String>,
    pub soft: Vec<String>,
}

impl SkillSet {
    pub fn category(&self, category: SkillCategory) -> &Vec<String> {
        match category {
            SkillCategory::Programming => &self.programming,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Technical => &self.technical,
            SkillCategory::Languages => &self.languages,
            SkillCategory::Soft => &self.soft,
        }
    }

    pub fn category_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Programming => &mut self.programming,
            SkillCategory::Frameworks => &mut self.frameworks,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Languages => &mut self.languages,
            SkillCategory::Soft => &mut self.soft,
        }
    }

    pub fn is_empty(&self) -> bool {
        SkillCategory::ALL
            .iter()
            .all(|c| self.category(*c).is_empty())
    }

    /// All skills in canonical category order. Duplicates across categories
    /// are kept.
    pub fn flatten(&self) -> Vec<String> {
        SkillCategory::ALL
            .iter()
            .flat_map(|c| self.category(*c).iter().cloned())
            .collect()
    }
}

/// The structured profile sub-document of a user record.
///
/// Every section is always present: missing keys in stored JSON deserialize
/// to empty strings, empty lists and empty skill categories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProfileDocument {
    pub personal: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub internships: Vec<ExperienceEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillSet,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Education,
    Internships,
    Experience,
    Projects,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Education,
        Section::Internships,
        Section::Experience,
        Section::Projects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Internships => "internships",
            Section::Experience => "experience",
            Section::Projects => "projects",
        }
    }
}

/// A list entry tagged with its shape, for the section-generic transforms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "entry_type", rename_all = "snake_case")]
pub enum SectionEntry {
    Education(EducationEntry),
    Experience(ExperienceEntry),
    Project(ProjectEntry),
}

impl SectionEntry {
    pub fn id(&self) -> EntryId {
        match self {
            SectionEntry::Education(e) => e.id,
            SectionEntry::Experience(e) => e.id,
            SectionEntry::Project(e) => e.id,
        }
    }

    pub fn entry_type_str(&self) -> &'static str {
        match self {
            SectionEntry::Education(_) => "education",
            SectionEntry::Experience(_) => "experience",
            SectionEntry::Project(_) => "project",
        }
    }
}

impl ProfileDocument {
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Education => self.education.len(),
            Section::Internships => self.internships.len(),
            Section::Experience => self.experience.len(),
            Section::Projects => self.projects.len(),
        }
    }

    pub fn section_ids(&self, section: Section) -> Vec<EntryId> {
        match section {
            Section::Education => self.education.iter().map(|e| e.id).collect(),
            Section::Internships => self.internships.iter().map(|e| e.id).collect(),
            Section::Experience => self.experience.iter().map(|e| e.id).collect(),
            Section::Projects => self.projects.iter().map(|e| e.id).collect(),
        }
    }

    pub fn section_ids_mut(&mut self, section: Section) -> Vec<&mut EntryId> {
        match section {
            Section::Education => self.education.iter_mut().map(|e| &mut e.id).collect(),
            Section::Internships => self.internships.iter_mut().map(|e| &mut e.id).collect(),
            Section::Experience => self.experience.iter_mut().map(|e| &mut e.id).collect(),
            Section::Projects => self.projects.iter_mut().map(|e| &mut e.id).collect(),
        }
    }
}
