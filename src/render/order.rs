// src/render/order.rs
use crate::render::sections;
use crate::render::style::StyleSheet;
use crate::types::{ResumeData, SectionKey};

type SectionRenderer = fn(&StyleSheet, &ResumeData) -> String;

fn renderer_for(key: SectionKey) -> SectionRenderer {
    match key {
        SectionKey::ScholasticAchievements => {
            |style, data| sections::render_achievements(style, &data.scholastic_achievements)
        }
        SectionKey::ProfessionalExperience => {
            |style, data| sections::render_experience(style, &data.professional_experience)
        }
        SectionKey::KeyProjects => |style, data| sections::render_projects(style, &data.key_projects),
        SectionKey::PositionsOfResponsibility => {
            |style, data| sections::render_responsibilities(style, &data.positions_of_responsibility)
        }
        SectionKey::ExtraCurriculars => {
            |style, data| sections::render_extracurriculars(style, &data.extra_curriculars)
        }
        SectionKey::TechnicalSkills => {
            |style, data| sections::render_skills(style, &data.technical_skills)
        }
    }
}

/// Render the categories named in `order`, in that order, separated by blank lines.
///
/// Keys the style does not register and empty collections are skipped. A key
/// listed twice renders twice.
pub fn assemble_sections(order: &[SectionKey], style: &StyleSheet, data: &ResumeData) -> String {
    let mut content = String::new();

    for &key in order {
        if !style.supports(key) || data.section_len(key) == 0 {
            continue;
        }
        let fragment = renderer_for(key)(style, data);
        if fragment.trim().is_empty() {
            continue;
        }
        content.push_str(fragment.trim_end());
        content.push_str("\n\n");
    }

    content
}
