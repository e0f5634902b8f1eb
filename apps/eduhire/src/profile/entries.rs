//! Pure profile transforms: each takes the current document and returns the
//! edited copy. Nothing here persists; callers hand the result to
//! `ProfileRepository::update_profile` when the user saves.

use crate::errors::EntryError;
use crate::models::profile::{
    EducationEntry, EntryId, ExperienceEntry, PersonalInfo, ProfileDocument, ProjectEntry,
    Section, SectionEntry, SkillCategory, Technologies,
};
use crate::profile::EntryIdGenerator;

/// A new, empty entry of the shape `section` holds.
pub fn blank_entry(section: Section, id: EntryId) -> SectionEntry {
    match section {
        Section::Education => SectionEntry::Education(EducationEntry {
            id,
            ..Default::default()
        }),
        Section::Internships | Section::Experience => SectionEntry::Experience(ExperienceEntry {
            id,
            ..Default::default()
        }),
        Section::Projects => SectionEntry::Project(ProjectEntry {
            id,
            ..Default::default()
        }),
    }
}

/// Appends `entry` to `section`. List order is insertion order.
pub fn add_entry(
    doc: &ProfileDocument,
    section: Section,
    entry: SectionEntry,
) -> Result<ProfileDocument, EntryError> {
    let id = entry.id();
    if doc.section_ids(section).contains(&id) {
        return Err(EntryError::DuplicateId { section, id });
    }

    let mut next = doc.clone();
    match (section, entry) {
        (Section::Education, SectionEntry::Education(e)) => next.education.push(e),
        (Section::Internships, SectionEntry::Experience(e)) => next.internships.push(e),
        (Section::Experience, SectionEntry::Experience(e)) => next.experience.push(e),
        (Section::Projects, SectionEntry::Project(e)) => next.projects.push(e),
        (section, entry) => {
            return Err(EntryError::SectionMismatch {
                section: section.as_str(),
                entry_type: entry.entry_type_str(),
            })
        }
    }
    Ok(next)
}

/// Appends a blank entry with a freshly issued id, as the "add" buttons of
/// the editing forms do. Returns the new document and the new entry's id.
pub fn add_blank_entry(
    doc: &ProfileDocument,
    section: Section,
    ids: &EntryIdGenerator,
) -> Result<(ProfileDocument, EntryId), EntryError> {
    let id = ids.next_id();
    let next = add_entry(doc, section, blank_entry(section, id))?;
    Ok((next, id))
}

/// Drops the entry with `id` from `section`. Unknown ids leave the list as is.
pub fn remove_entry(doc: &ProfileDocument, section: Section, id: EntryId) -> ProfileDocument {
    let mut next = doc.clone();
    match section {
        Section::Education => next.education.retain(|e| e.id != id),
        Section::Internships => next.internships.retain(|e| e.id != id),
        Section::Experience => next.experience.retain(|e| e.id != id),
        Section::Projects => next.projects.retain(|e| e.id != id),
    }
    next
}

/// Sets one field of the entry with `id` in `section`.
///
/// `field` may be given in the persisted camelCase (`startDate`) or in
/// snake_case (`start_date`). An unknown field is an error even when no entry
/// matches `id`; an unknown `id` is a no-op.
pub fn update_entry_field(
    doc: &ProfileDocument,
    section: Section,
    id: EntryId,
    field: &str,
    value: &str,
) -> Result<ProfileDocument, EntryError> {
    let field = camel_case(field);
    let mut next = doc.clone();
    match section {
        Section::Education => {
            check_field(&field, EDUCATION_FIELDS, "education entry")?;
            if let Some(entry) = next.education.iter_mut().find(|e| e.id == id) {
                set_education_field(entry, &field, value);
            }
        }
        Section::Internships | Section::Experience => {
            check_field(&field, EXPERIENCE_FIELDS, "experience entry")?;
            let list = if section == Section::Internships {
                &mut next.internships
            } else {
                &mut next.experience
            };
            if let Some(entry) = list.iter_mut().find(|e| e.id == id) {
                set_experience_field(entry, &field, value);
            }
        }
        Section::Projects => {
            check_field(&field, PROJECT_FIELDS, "project entry")?;
            if let Some(entry) = next.projects.iter_mut().find(|e| e.id == id) {
                set_project_field(entry, &field, value);
            }
        }
    }
    Ok(next)
}

/// Sets one personal-info field. Same field-name rules as
/// [`update_entry_field`].
pub fn set_personal_field(
    doc: &ProfileDocument,
    field: &str,
    value: &str,
) -> Result<ProfileDocument, EntryError> {
    let field = camel_case(field);
    let mut next = doc.clone();
    let slot = personal_slot(&mut next.personal, &field).ok_or(EntryError::UnknownField {
        target: "personal info",
        field,
    })?;
    *slot = value.to_string();
    Ok(next)
}

/// Appends a trimmed skill to `category`. Blank input leaves the document
/// unchanged.
pub fn add_skill(doc: &ProfileDocument, category: SkillCategory, skill: &str) -> ProfileDocument {
    let mut next = doc.clone();
    let skill = skill.trim();
    if !skill.is_empty() {
        next.skills.category_mut(category).push(skill.to_string());
    }
    next
}

/// Removes the skill at `index` in `category`. Out-of-range is a no-op.
pub fn remove_skill(
    doc: &ProfileDocument,
    category: SkillCategory,
    index: usize,
) -> ProfileDocument {
    let mut next = doc.clone();
    let skills = next.skills.category_mut(category);
    if index < skills.len() {
        skills.remove(index);
    }
    next
}

const EDUCATION_FIELDS: &[&str] = &[
    "degree",
    "institution",
    "location",
    "startDate",
    "endDate",
    "gpa",
    "description",
];

const EXPERIENCE_FIELDS: &[&str] = &[
    "title",
    "company",
    "location",
    "startDate",
    "endDate",
    "description",
    "technologies",
];

const PROJECT_FIELDS: &[&str] = &["title", "description", "technologies", "github", "liveUrl"];

fn check_field(field: &str, known: &[&str], target: &'static str) -> Result<(), EntryError> {
    if known.contains(&field) {
        Ok(())
    } else {
        Err(EntryError::UnknownField {
            target,
            field: field.to_string(),
        })
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.trim().chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn set_education_field(entry: &mut EducationEntry, field: &str, value: &str) {
    let slot = match field {
        "degree" => &mut entry.degree,
        "institution" => &mut entry.institution,
        "location" => &mut entry.location,
        "startDate" => &mut entry.start_date,
        "endDate" => &mut entry.end_date,
        "gpa" => &mut entry.gpa,
        "description" => &mut entry.description,
        _ => return,
    };
    *slot = value.to_string();
}

fn set_experience_field(entry: &mut ExperienceEntry, field: &str, value: &str) {
    let slot = match field {
        "title" => &mut entry.title,
        "company" => &mut entry.company,
        "location" => &mut entry.location,
        "startDate" => &mut entry.start_date,
        "endDate" => &mut entry.end_date,
        "description" => &mut entry.description,
        "technologies" => {
            entry.technologies = Technologies::Text(value.to_string()).normalized();
            return;
        }
        _ => return,
    };
    *slot = value.to_string();
}

fn set_project_field(entry: &mut ProjectEntry, field: &str, value: &str) {
    let slot = match field {
        "title" => &mut entry.title,
        "description" => &mut entry.description,
        "github" => &mut entry.github,
        "liveUrl" => &mut entry.live_url,
        // Kept as typed; the projector normalizes on read.
        "technologies" => {
            entry.technologies = Technologies::Text(value.to_string());
            return;
        }
        _ => return,
    };
    *slot = value.to_string();
}

fn personal_slot<'a>(personal: &'a mut PersonalInfo, field: &str) -> Option<&'a mut String> {
    Some(match field {
        "firstName" => &mut personal.first_name,
        "lastName" => &mut personal.last_name,
        "email" => &mut personal.email,
        "phone" => &mut personal.phone,
        "location" => &mut personal.location,
        "linkedin" => &mut personal.linkedin,
        "github" => &mut personal.github,
        "portfolio" => &mut personal.portfolio,
        "avatarUrl" | "avatar" => &mut personal.avatar_url,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_education(id: EntryId, degree: &str) -> SectionEntry {
        SectionEntry::Education(EducationEntry {
            id,
            degree: degree.to_string(),
            ..Default::default()
        })
    }

    fn make_doc_with_education(ids: &[EntryId]) -> ProfileDocument {
        ids.iter().fold(ProfileDocument::default(), |doc, id| {
            add_entry(&doc, Section::Education, make_education(*id, "BSc")).unwrap()
        })
    }

    #[test]
    fn test_add_entry_preserves_insertion_order() {
        let doc = make_doc_with_education(&[3, 1, 2]);
        assert_eq!(doc.section_ids(Section::Education), vec![3, 1, 2]);
    }

    #[test]
    fn test_add_entry_is_pure() {
        let doc = ProfileDocument::default();
        let next = add_entry(&doc, Section::Projects, blank_entry(Section::Projects, 7)).unwrap();
        assert!(doc.projects.is_empty());
        assert_eq!(next.projects.len(), 1);
    }

    #[test]
    fn test_add_entry_rejects_duplicate_id() {
        let doc = make_doc_with_education(&[1]);
        let err = add_entry(&doc, Section::Education, make_education(1, "MSc")).unwrap_err();
        assert_eq!(
            err,
            EntryError::DuplicateId {
                section: Section::Education,
                id: 1
            }
        );
    }

    #[test]
    fn test_same_id_allowed_in_different_sections() {
        let doc = make_doc_with_education(&[1]);
        let next = add_entry(&doc, Section::Internships, blank_entry(Section::Internships, 1));
        assert!(next.is_ok());
    }

    #[test]
    fn test_add_entry_rejects_wrong_shape() {
        let doc = ProfileDocument::default();
        let err = add_entry(&doc, Section::Projects, make_education(1, "BSc")).unwrap_err();
        assert!(matches!(err, EntryError::SectionMismatch { section: "projects", .. }));
    }

    #[test]
    fn test_blank_entry_shapes() {
        assert!(matches!(
            blank_entry(Section::Internships, 1),
            SectionEntry::Experience(_)
        ));
        assert!(matches!(
            blank_entry(Section::Experience, 1),
            SectionEntry::Experience(_)
        ));
        assert!(matches!(
            blank_entry(Section::Education, 1),
            SectionEntry::Education(_)
        ));
    }

    #[test]
    fn test_add_blank_entry_issues_distinct_ids() {
        let doc = ProfileDocument::default();
        let ids = EntryIdGenerator::for_document(&doc);
        let (doc, first) = add_blank_entry(&doc, Section::Internships, &ids).unwrap();
        let (doc, second) = add_blank_entry(&doc, Section::Internships, &ids).unwrap();
        assert_ne!(first, second);
        assert_eq!(doc.section_ids(Section::Internships), vec![first, second]);
    }

    #[test]
    fn test_remove_entry_filters_by_id() {
        let doc = make_doc_with_education(&[1, 2, 3]);
        let next = remove_entry(&doc, Section::Education, 2);
        assert_eq!(next.section_ids(Section::Education), vec![1, 3]);
        assert_eq!(doc.education.len(), 3);

        let unchanged = remove_entry(&next, Section::Education, 99);
        assert_eq!(unchanged, next);
    }

    #[test]
    fn test_update_entry_field_accepts_both_spellings() {
        let doc = make_doc_with_education(&[1]);
        let doc = update_entry_field(&doc, Section::Education, 1, "startDate", "2020").unwrap();
        let doc = update_entry_field(&doc, Section::Education, 1, "end_date", "2024").unwrap();
        assert_eq!(doc.education[0].start_date, "2020");
        assert_eq!(doc.education[0].end_date, "2024");
    }

    #[test]
    fn test_update_entry_field_unknown_id_is_noop() {
        let doc = make_doc_with_education(&[1]);
        let next = update_entry_field(&doc, Section::Education, 42, "degree", "PhD").unwrap();
        assert_eq!(next, doc);
    }

    #[test]
    fn test_update_entry_field_unknown_field_errors() {
        let doc = make_doc_with_education(&[1]);
        let err = update_entry_field(&doc, Section::Education, 1, "salary", "1").unwrap_err();
        assert!(matches!(err, EntryError::UnknownField { .. }));

        let err = update_entry_field(&doc, Section::Education, 1, "id", "5").unwrap_err();
        assert!(matches!(err, EntryError::UnknownField { .. }));
    }

    #[test]
    fn test_experience_technologies_are_split() {
        let doc = add_entry(
            &ProfileDocument::default(),
            Section::Internships,
            blank_entry(Section::Internships, 1),
        )
        .unwrap();
        let doc =
            update_entry_field(&doc, Section::Internships, 1, "technologies", "Rust, SQL ,").unwrap();
        assert_eq!(doc.internships[0].technologies, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_project_technologies_kept_as_typed() {
        let doc = add_entry(
            &ProfileDocument::default(),
            Section::Projects,
            blank_entry(Section::Projects, 1),
        )
        .unwrap();
        let doc =
            update_entry_field(&doc, Section::Projects, 1, "technologies", "Rust, Axum").unwrap();
        assert_eq!(
            doc.projects[0].technologies,
            Technologies::Text("Rust, Axum".to_string())
        );
        let doc =
            update_entry_field(&doc, Section::Projects, 1, "live_url", "https://x.dev").unwrap();
        assert_eq!(doc.projects[0].live_url, "https://x.dev");
    }

    #[test]
    fn test_set_personal_field() {
        let doc = set_personal_field(&ProfileDocument::default(), "first_name", "Ann").unwrap();
        assert_eq!(doc.personal.first_name, "Ann");

        let err = set_personal_field(&doc, "nickname", "A").unwrap_err();
        assert_eq!(
            err,
            EntryError::UnknownField {
                target: "personal info",
                field: "nickname".to_string()
            }
        );
    }

    #[test]
    fn test_add_skill_trims_and_ignores_blank() {
        let doc = add_skill(&ProfileDocument::default(), SkillCategory::Programming, "  Rust ");
        let doc = add_skill(&doc, SkillCategory::Programming, "   ");
        assert_eq!(doc.skills.programming, vec!["Rust"]);
    }

    #[test]
    fn test_remove_skill_by_index() {
        let doc = add_skill(&ProfileDocument::default(), SkillCategory::Tools, "Git");
        let doc = add_skill(&doc, SkillCategory::Tools, "Docker");
        let doc = remove_skill(&doc, SkillCategory::Tools, 0);
        assert_eq!(doc.skills.tools, vec!["Docker"]);

        let same = remove_skill(&doc, SkillCategory::Tools, 5);
        assert_eq!(same, doc);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("live_url"), "liveUrl");
        assert_eq!(camel_case("startDate"), "startDate");
        assert_eq!(camel_case("_gpa"), "gpa");
    }
}
