//! Resume Projector: profile document -> resume view model.
//!
//! Every field renders something. A profile value is used when non-empty,
//! otherwise the caller's fallback is substituted.
//!
//! Known limitation: only the first education entry is projected; further
//! entries are ignored.

use crate::models::profile::{EducationEntry, ExperienceEntry, ProfileDocument, ProjectEntry};
use crate::models::resume::{
    ResumeDefaults, ResumeEducation, ResumeExperience, ResumePersonalInfo, ResumeProject,
    ResumeViewModel,
};

pub fn project(doc: &ProfileDocument, fallback: &ResumeDefaults) -> ResumeViewModel {
    ResumeViewModel {
        personal_info: project_personal(doc, fallback),
        summary: fallback.summary.clone(),
        experience: project_experience(doc, fallback),
        education: doc
            .education
            .first()
            .map(|e| project_education(e, fallback))
            .unwrap_or_else(|| fallback.education.clone()),
        skills: project_skills(doc, fallback),
        projects: project_projects(doc, fallback),
    }
}

fn or_fallback(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn project_personal(doc: &ProfileDocument, fallback: &ResumeDefaults) -> ResumePersonalInfo {
    let p = &doc.personal;
    let name = if !p.first_name.is_empty() && !p.last_name.is_empty() {
        format!("{} {}", p.first_name, p.last_name)
    } else {
        fallback.name.clone()
    };
    ResumePersonalInfo {
        name,
        email: or_fallback(&p.email, &fallback.email),
        phone: or_fallback(&p.phone, &fallback.phone),
        location: or_fallback(&p.location, &fallback.location),
        linkedin: or_fallback(&p.linkedin, &fallback.linkedin),
    }
}

fn project_education(entry: &EducationEntry, fallback: &ResumeDefaults) -> ResumeEducation {
    let f = &fallback.education;
    ResumeEducation {
        degree: or_fallback(&entry.degree, &f.degree),
        institution: or_fallback(&entry.institution, &f.institution),
        graduation: or_fallback(&entry.end_date, &f.graduation),
        gpa: or_fallback(&entry.gpa, &f.gpa),
    }
}

/// Internships first, then entries from the profile view's experience list.
fn project_experience(doc: &ProfileDocument, fallback: &ResumeDefaults) -> Vec<ResumeExperience> {
    let entries: Vec<&ExperienceEntry> =
        doc.internships.iter().chain(doc.experience.iter()).collect();

    if entries.is_empty() {
        return vec![fallback_experience(fallback)];
    }

    entries
        .into_iter()
        .map(|e| ResumeExperience {
            title: or_fallback(&e.title, &fallback.experience_title),
            company: or_fallback(&e.company, &fallback.experience_company),
            duration: format!(
                "{} - {}",
                or_fallback(&e.start_date, &fallback.experience_start),
                or_fallback(&e.end_date, &fallback.experience_end)
            ),
            description: or_fallback(&e.description, &fallback.experience_description),
            achievements: fallback.achievements.clone(),
        })
        .collect()
}

fn fallback_experience(fallback: &ResumeDefaults) -> ResumeExperience {
    ResumeExperience {
        title: fallback.experience_title.clone(),
        company: fallback.experience_company.clone(),
        duration: format!("{} - {}", fallback.experience_start, fallback.experience_end),
        description: fallback.experience_description.clone(),
        achievements: fallback.achievements.clone(),
    }
}

fn project_projects(doc: &ProfileDocument, fallback: &ResumeDefaults) -> Vec<ResumeProject> {
    if doc.projects.is_empty() {
        return vec![ResumeProject {
            title: fallback.project_title.clone(),
            description: fallback.project_description.clone(),
            technologies: fallback.project_technologies.clone(),
        }];
    }
    doc.projects
        .iter()
        .map(|p| project_one(p, fallback))
        .collect()
}

fn project_one(p: &ProjectEntry, fallback: &ResumeDefaults) -> ResumeProject {
    let technologies = p.technologies.normalized();
    ResumeProject {
        title: or_fallback(&p.title, &fallback.project_title),
        description: or_fallback(&p.description, &fallback.project_description),
        technologies: if technologies.is_empty() {
            fallback.project_technologies.clone()
        } else {
            technologies
        },
    }
}

fn project_skills(doc: &ProfileDocument, fallback: &ResumeDefaults) -> Vec<String> {
    let skills = doc.skills.flatten();
    if skills.is_empty() {
        fallback.skills.clone()
    } else {
        skills
    }
}
