use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumePersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeEducation {
    pub degree: String,
    pub institution: String,
    pub graduation: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Display-ready resume. Every field holds either profile data or a fallback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeViewModel {
    pub personal_info: ResumePersonalInfo,
    pub summary: String,
    pub experience: Vec<ResumeExperience>,
    pub education: ResumeEducation,
    pub skills: Vec<String>,
    pub projects: Vec<ResumeProject>,
}

/// Caller-supplied fallbacks for resume fields the profile leaves empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDefaults {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub summary: String,
    pub experience_title: String,
    pub experience_company: String,
    pub experience_start: String,
    pub experience_end: String,
    pub experience_description: String,
    pub achievements: Vec<String>,
    pub education: ResumeEducation,
    pub skills: Vec<String>,
    pub project_title: String,
    pub project_description: String,
    pub project_technologies: Vec<String>,
}

impl ResumeDefaults {
    /// Illustrative sample values for previews of an unfilled profile.
    pub fn sample() -> Self {
        Self {
            name: "Alex Morgan".to_string(),
            email: "alex.morgan@example.edu".to_string(),
            phone: "+1 555 010 2030".to_string(),
            location: "Springfield, USA".to_string(),
            linkedin: "linkedin.com/in/alexmorgan".to_string(),
            summary: "Computer Science student with hands-on software development experience, \
                      eager to contribute to engineering teams building reliable products."
                .to_string(),
            experience_title: "Software Engineering Intern".to_string(),
            experience_company: "Acme Corp".to_string(),
            experience_start: "Jun 2023".to_string(),
            experience_end: "Sep 2023".to_string(),
            experience_description: "Developed and maintained internal data tools.".to_string(),
            achievements: vec![
                "Reduced data processing time by 40% through optimization".to_string(),
                "Mentored 2 junior interns and conducted code reviews".to_string(),
                "Implemented automated testing reducing bugs by 60%".to_string(),
            ],
            education: ResumeEducation {
                degree: "Bachelor of Science in Computer Science".to_string(),
                institution: "State University".to_string(),
                graduation: "Expected June 2025".to_string(),
                gpa: "3.8/4.0".to_string(),
            },
            skills: vec![
                "Python".to_string(),
                "JavaScript".to_string(),
                "SQL".to_string(),
                "Git".to_string(),
            ],
            project_title: "Resume Parser".to_string(),
            project_description: "Extracts and categorizes information from resumes."
                .to_string(),
            project_technologies: vec!["Python".to_string(), "React".to_string()],
        }
    }
}
