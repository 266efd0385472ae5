// src/types/resume.rs
//! Resume request model shared by the renderers, the web layer and the CLI

use serde::{Deserialize, Serialize};

pub const DEFAULT_HEADER_ID: &str = "universal";
pub const DEFAULT_BODY_ID: &str = "iitb_one_page.tex";

/// Returns the trimmed value, or `None` when the field is empty or only whitespace.
pub fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

// ===== Section Keys =====

/// Closed set of content categories a caller can place in the section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    ScholasticAchievements,
    ProfessionalExperience,
    KeyProjects,
    PositionsOfResponsibility,
    ExtraCurriculars,
    TechnicalSkills,
}

impl SectionKey {
    pub const ALL: [SectionKey; 6] = [
        SectionKey::ScholasticAchievements,
        SectionKey::ProfessionalExperience,
        SectionKey::KeyProjects,
        SectionKey::PositionsOfResponsibility,
        SectionKey::ExtraCurriculars,
        SectionKey::TechnicalSkills,
    ];

    /// Heading text printed above the category.
    pub fn title(self) -> &'static str {
        match self {
            SectionKey::ScholasticAchievements => "Scholastic Achievements",
            SectionKey::ProfessionalExperience => "Professional Experience",
            SectionKey::KeyProjects => "Key Projects",
            SectionKey::PositionsOfResponsibility => "Positions of Responsibility",
            SectionKey::ExtraCurriculars => "Extracurricular Activities",
            SectionKey::TechnicalSkills => "Technical Skills",
        }
    }

    /// Key as it appears in request JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::ScholasticAchievements => "scholasticAchievements",
            SectionKey::ProfessionalExperience => "professionalExperience",
            SectionKey::KeyProjects => "keyProjects",
            SectionKey::PositionsOfResponsibility => "positionsOfResponsibility",
            SectionKey::ExtraCurriculars => "extraCurriculars",
            SectionKey::TechnicalSkills => "technicalSkills",
        }
    }
}

fn default_section_order() -> Vec<SectionKey> {
    vec![
        SectionKey::ScholasticAchievements,
        SectionKey::ProfessionalExperience,
        SectionKey::KeyProjects,
        SectionKey::TechnicalSkills,
        SectionKey::PositionsOfResponsibility,
        SectionKey::ExtraCurriculars,
    ]
}

fn default_header_id() -> String {
    DEFAULT_HEADER_ID.to_string()
}

fn default_body_id() -> String {
    DEFAULT_BODY_ID.to_string()
}

// ===== Records =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalDetails {
    pub name: String,
    pub branch: String,
    pub institution: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub location: String,
    pub cpi: String,
    pub grad_year: String,
    pub roll_no: String,
    pub dob: String,
    pub gender: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScholasticAchievement {
    pub text: String,
    // Older clients send the achievement as structured exam fields.
    pub percentile: String,
    pub exam_name: String,
    pub num_candidates: String,
    pub year: String,
}

impl ScholasticAchievement {
    /// Free-text description, composed from the exam fields when `text` is empty.
    /// Composed text carries `**` markers so the figures render bold.
    pub fn description(&self) -> Option<String> {
        if let Some(text) = present(&self.text) {
            return Some(text.to_string());
        }

        let mut clauses = Vec::new();
        if let Some(percentile) = present(&self.percentile) {
            clauses.push(format!("Among the top **{}** percentile", percentile));
        }
        if let Some(exam) = present(&self.exam_name) {
            clauses.push(format!("in **{}** examination", exam));
        }
        if let Some(candidates) = present(&self.num_candidates) {
            clauses.push(format!(
                "out of **{}** million candidates all over India",
                candidates
            ));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" "))
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub dates: String,
    pub description: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub subtitle: String,
    pub dates: String,
    pub description: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Responsibility {
    pub role: String,
    pub organization: String,
    pub dates: String,
    pub description: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraCurricular {
    pub text: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnicalSkill {
    pub category: String,
    pub skills: String,
}

// ===== Request Root =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(default = "default_header_id")]
    pub header_id: String,
    #[serde(default = "default_body_id", alias = "template_name")]
    pub body_id: String,
    #[serde(rename = "sectionOrder", default = "default_section_order")]
    pub section_order: Vec<SectionKey>,
    #[serde(rename = "personalDetails", default)]
    pub personal_details: PersonalDetails,
    #[serde(rename = "scholasticAchievements", default)]
    pub scholastic_achievements: Vec<ScholasticAchievement>,
    #[serde(rename = "professionalExperience", default)]
    pub professional_experience: Vec<Experience>,
    #[serde(rename = "keyProjects", default)]
    pub key_projects: Vec<Project>,
    #[serde(rename = "positionsOfResponsibility", default)]
    pub positions_of_responsibility: Vec<Responsibility>,
    #[serde(rename = "extraCurriculars", default)]
    pub extra_curriculars: Vec<ExtraCurricular>,
    #[serde(rename = "technicalSkills", default)]
    pub technical_skills: Vec<TechnicalSkill>,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            header_id: default_header_id(),
            body_id: default_body_id(),
            section_order: default_section_order(),
            personal_details: PersonalDetails::default(),
            scholastic_achievements: Vec::new(),
            professional_experience: Vec::new(),
            key_projects: Vec::new(),
            positions_of_responsibility: Vec::new(),
            extra_curriculars: Vec::new(),
            technical_skills: Vec::new(),
        }
    }
}

impl ResumeData {
    /// Number of records supplied for a category.
    pub fn section_len(&self, key: SectionKey) -> usize {
        match key {
            SectionKey::ScholasticAchievements => self.scholastic_achievements.len(),
            SectionKey::ProfessionalExperience => self.professional_experience.len(),
            SectionKey::KeyProjects => self.key_projects.len(),
            SectionKey::PositionsOfResponsibility => self.positions_of_responsibility.len(),
            SectionKey::ExtraCurriculars => self.extra_curriculars.len(),
            SectionKey::TechnicalSkills => self.technical_skills.len(),
        }
    }
}
