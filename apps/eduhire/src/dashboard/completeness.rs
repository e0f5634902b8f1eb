//! Profile completion: a coarse presence heuristic, not a quality score.
//!
//! The checklist has ten items:
//! - five personal fields (first name, last name, email, phone, location)
//! - four list sections (education, experience, projects, internships), each
//!   satisfied by any single entry regardless of how complete it is
//! - one skills item, satisfied by a skill in any category
//!
//! `score = round_half_up(100 * satisfied / 10)`. Missing sections stay in the
//! denominator, so they lower the score instead of being skipped.

use serde::{Deserialize, Serialize};

use crate::models::profile::{ProfileDocument, Section};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub key: String,
    pub satisfied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletenessReport {
    pub score: u32,
    pub items: Vec<ChecklistItem>,
    pub missing: Vec<String>,
}

const PERSONAL_FIELDS: &[&str] = &["firstName", "lastName", "email", "phone", "location"];

const LIST_SECTIONS: [Section; 4] = [
    Section::Education,
    Section::Experience,
    Section::Projects,
    Section::Internships,
];

pub fn checklist(doc: &ProfileDocument) -> Vec<ChecklistItem> {
    let p = &doc.personal;
    let personal_values = [
        &p.first_name,
        &p.last_name,
        &p.email,
        &p.phone,
        &p.location,
    ];

    let personal = PERSONAL_FIELDS
        .iter()
        .zip(personal_values)
        .map(|(key, value)| ChecklistItem {
            key: format!("personal.{key}"),
            satisfied: !value.is_empty(),
        });

    let sections = LIST_SECTIONS.iter().map(|section| ChecklistItem {
        key: section.as_str().to_string(),
        satisfied: doc.section_len(*section) > 0,
    });

    let skills = std::iter::once(ChecklistItem {
        key: "skills".to_string(),
        satisfied: !doc.skills.is_empty(),
    });

    personal.chain(sections).chain(skills).collect()
}

/// Completion percentage in `[0, 100]`.
pub fn score(doc: &ProfileDocument) -> u32 {
    let items = checklist(doc);
    let satisfied = items.iter().filter(|i| i.satisfied).count();
    round_half_up_percent(satisfied, items.len())
}

pub fn compute_completeness_report(doc: &ProfileDocument) -> CompletenessReport {
    let items = checklist(doc);
    let satisfied = items.iter().filter(|i| i.satisfied).count();
    let missing = items
        .iter()
        .filter(|i| !i.satisfied)
        .map(|i| i.key.clone())
        .collect();
    CompletenessReport {
        score: round_half_up_percent(satisfied, items.len()),
        items,
        missing,
    }
}

fn round_half_up_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)) as u32
}
