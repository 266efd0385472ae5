// src/render/sections.rs
//! Section renderers: one per category, parameterised by a `StyleSheet`

use crate::render::escape::format;
use crate::render::style::StyleSheet;
use crate::types::{
    present, ExtraCurricular, Experience, Project, Responsibility, ScholasticAchievement,
    SectionKey, TechnicalSkill,
};

/// How the subtitle of an entry title line is emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emphasis {
    Bold,
    Italic,
    Plain,
}

/// One titled record with a bullet list (experience, project, responsibility).
struct Entry<'a> {
    title: &'a str,
    subtitle: &'a str,
    emphasis: Emphasis,
    dates: &'a str,
    summary: &'a str,
    points: &'a [String],
}

/// One line of a list category.
struct ListItem {
    text: String,
    date: Option<String>,
}

// ===== Category Renderers =====

pub fn render_experience(style: &StyleSheet, experiences: &[Experience]) -> String {
    let entries = experiences.iter().map(|exp| Entry {
        title: &exp.company,
        subtitle: &exp.role,
        emphasis: Emphasis::Bold,
        dates: &exp.dates,
        summary: &exp.description,
        points: &exp.points,
    });
    render_entries(style, SectionKey::ProfessionalExperience, entries)
}

pub fn render_projects(style: &StyleSheet, projects: &[Project]) -> String {
    let entries = projects.iter().map(|proj| Entry {
        title: &proj.name,
        subtitle: &proj.subtitle,
        emphasis: Emphasis::Italic,
        dates: &proj.dates,
        summary: &proj.description,
        points: &proj.points,
    });
    render_entries(style, SectionKey::KeyProjects, entries)
}

pub fn render_responsibilities(style: &StyleSheet, positions: &[Responsibility]) -> String {
    let entries = positions.iter().map(|por| Entry {
        title: &por.role,
        subtitle: &por.organization,
        emphasis: Emphasis::Plain,
        dates: &por.dates,
        summary: &por.description,
        points: &por.points,
    });
    render_entries(style, SectionKey::PositionsOfResponsibility, entries)
}

pub fn render_achievements(style: &StyleSheet, achievements: &[ScholasticAchievement]) -> String {
    let items = achievements.iter().filter_map(|ach| {
        ach.description().map(|text| ListItem {
            text: format(&text),
            date: present(&ach.year).map(format),
        })
    });
    render_list(style, SectionKey::ScholasticAchievements, items)
}

pub fn render_extracurriculars(style: &StyleSheet, activities: &[ExtraCurricular]) -> String {
    let items = activities.iter().filter_map(|ec| {
        present(&ec.text).map(|_| ListItem {
            text: format(&ec.text),
            date: present(&ec.date).map(format),
        })
    });
    render_list(style, SectionKey::ExtraCurriculars, items)
}

pub fn render_skills(style: &StyleSheet, skills: &[TechnicalSkill]) -> String {
    let items = skills.iter().filter_map(|skill| {
        let text = match (present(&skill.category), present(&skill.skills)) {
            (None, None) => return None,
            (Some(_), None) => format!("\\textbf{{{}}}", format(&skill.category)),
            (None, Some(_)) => format(&skill.skills),
            (Some(_), Some(_)) => format!(
                "\\textbf{{{}:}} {}",
                format(skill.category.trim()),
                format(&skill.skills)
            ),
        };
        Some(ListItem { text, date: None })
    });
    render_list(style, SectionKey::TechnicalSkills, items)
}

// ===== Shared Layout =====

fn render_entries<'a>(
    style: &StyleSheet,
    key: SectionKey,
    entries: impl Iterator<Item = Entry<'a>>,
) -> String {
    let mut blocks = entries.map(|entry| render_entry(style, &entry)).peekable();
    if blocks.peek().is_none() {
        return String::new();
    }

    let mut fragment = style.heading.render(key.title());
    for (i, block) in blocks.enumerate() {
        if i > 0 {
            fragment.push_str(&format!("\\vspace{{{}}}\n", style.entry_gap));
        }
        fragment.push_str(&block);
    }
    fragment.push_str(&format!("\\vspace{{{}}}\n", style.closing_gap));
    fragment
}

fn render_entry(style: &StyleSheet, entry: &Entry<'_>) -> String {
    let mut block = format!("\\noindent \\textbf{{\\large {}}}", format(entry.title));

    if present(entry.subtitle).is_some() {
        let subtitle = format(entry.subtitle);
        match entry.emphasis {
            Emphasis::Bold => block.push_str(&format!(" | \\textbf{{\\large {}}}", subtitle)),
            Emphasis::Italic => block.push_str(&format!(" \\textit{{| {}}}", subtitle)),
            Emphasis::Plain => block.push_str(&format!(" | {}", subtitle)),
        }
    }
    if present(entry.dates).is_some() {
        block.push_str(&format!(" \\hfill{{\\textit{{{}}}}}", format(entry.dates)));
    }
    block.push_str("\n\\vspace{-3mm}\n\\\\ \\rule{\\textwidth}{0.2mm}\n");

    match present(entry.summary) {
        Some(_) => {
            let (before, after) = style.summary_gaps;
            block.push_str(&format!(
                "\\vspace{{{}}}\n\\textit{{{}}}\n\\vspace{{{}}}\n",
                before,
                format(entry.summary),
                after
            ));
        }
        None => block.push_str(&format!("\\vspace{{{}}}\n", style.rule_gap)),
    }

    let points: Vec<&String> = entry
        .points
        .iter()
        .filter(|point| present(point).is_some())
        .collect();
    if !points.is_empty() {
        block.push_str(&format!(
            "\\begin{{itemize}}[itemsep=0mm, leftmargin=6mm, label={{{}}}]\n",
            style.bullet
        ));
        for point in points {
            block.push_str(&format!(
                "    \\item\\textls[{}]{{{}}}\n",
                style.tracking,
                format(point)
            ));
        }
        block.push_str("\\end{itemize}\n");
    }

    block
}

fn render_list(
    style: &StyleSheet,
    key: SectionKey,
    items: impl Iterator<Item = ListItem>,
) -> String {
    let mut lines = String::new();
    for item in items {
        lines.push_str(&format!("    \\item\\textls[{}]{{{}}}", style.tracking, item.text));
        if let Some(date) = item.date {
            lines.push_str(&format!("\\hfill{{\\sl \\small {{[}}{}{{]}}}}", date));
        }
        lines.push('\n');
    }
    if lines.is_empty() {
        return String::new();
    }

    let mut fragment = style.heading.render(key.title());
    fragment.push_str(&format!(
        "\\begin{{itemize}}[itemsep={}, leftmargin=*, label={{{}}}]\n",
        style.list_itemsep, style.bullet
    ));
    fragment.push_str(&lines);
    fragment.push_str("\\end{itemize}\n");
    fragment.push_str(&format!("\\vspace{{{}}}\n", style.closing_gap));
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::{BOXED, CLASSIC, DENSE};

    fn experience(points: &[&str]) -> Experience {
        Experience {
            company: "Acme & Sons".to_string(),
            role: "SDE_Intern".to_string(),
            dates: "May 2024 - Jul 2024".to_string(),
            description: String::new(),
            points: points.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_collections_render_nothing() {
        for style in [&CLASSIC, &DENSE, &BOXED] {
            assert_eq!(render_experience(style, &[]), "");
            assert_eq!(render_projects(style, &[]), "");
            assert_eq!(render_responsibilities(style, &[]), "");
            assert_eq!(render_achievements(style, &[]), "");
            assert_eq!(render_extracurriculars(style, &[]), "");
            assert_eq!(render_skills(style, &[]), "");
        }
    }

    #[test]
    fn test_blank_points_are_dropped() {
        let fragment = render_experience(&CLASSIC, &[experience(&["", "  ", "Did X"])]);
        assert_eq!(fragment.matches("\\item").count(), 1);
        assert!(fragment.contains("\\item\\textls[5]{Did X}"));
    }

    #[test]
    fn test_points_keep_order_and_duplicates() {
        let fragment = render_experience(&CLASSIC, &[experience(&["B", "A", "B"])]);
        let items: Vec<&str> = fragment
            .lines()
            .filter(|line| line.contains("\\item"))
            .collect();
        assert_eq!(
            items,
            vec![
                "    \\item\\textls[5]{B}",
                "    \\item\\textls[5]{A}",
                "    \\item\\textls[5]{B}"
            ]
        );
    }

    #[test]
    fn test_entry_without_points_has_no_list() {
        let fragment = render_experience(&CLASSIC, &[experience(&["", " "])]);
        assert!(fragment.contains("Professional Experience"));
        assert!(!fragment.contains("\\begin{itemize}"));
    }

    #[test]
    fn test_experience_block_layout() {
        let fragment = render_experience(&CLASSIC, &[experience(&["Built **fast** APIs"])]);
        let expected = concat!(
            "\\noindent \\textbf{\\large Acme \\& Sons} | \\textbf{\\large SDE\\_Intern} \\hfill{\\textit{May 2024 - Jul 2024}}\n",
            "\\vspace{-3mm}\n",
            "\\\\ \\rule{\\textwidth}{0.2mm}\n",
            "\\vspace{-6.2mm}\n",
            "\\begin{itemize}[itemsep=0mm, leftmargin=6mm, label={\\textbullet}]\n",
            "    \\item\\textls[5]{Built \\textbf{fast} APIs}\n",
            "\\end{itemize}\n",
            "\\vspace{-6mm}\n",
        );
        assert!(fragment.ends_with(expected), "unexpected fragment:\n{fragment}");
        assert!(fragment.starts_with(&CLASSIC.heading.render("Professional Experience")));
    }

    #[test]
    fn test_spacer_only_between_records() {
        let records = vec![experience(&["one"]), experience(&["two"]), experience(&["three"])];
        let fragment = render_experience(&DENSE, &records);
        assert_eq!(fragment.matches("\\vspace{-1.5mm}\n\\noindent").count(), 2);
        assert!(fragment.ends_with("\\end{itemize}\n\\vspace{-5mm}\n"));
        let heading = DENSE.heading.render("Professional Experience");
        assert!(fragment.starts_with(&format!("{heading}\\noindent")));
    }

    #[test]
    fn test_summary_line_only_when_present() {
        let mut por = Responsibility {
            role: "Alumni Secretary".to_string(),
            organization: "Hostel 4".to_string(),
            dates: "2024".to_string(),
            description: String::new(),
            points: vec!["Raised funds".to_string()],
        };
        let without = render_responsibilities(&CLASSIC, &[por.clone()]);
        assert!(!without.contains("\\textit{\\vspace"));
        assert!(without.contains("\\vspace{-6.2mm}\n\\begin{itemize}"));
        assert!(without.contains("\\textbf{\\large Alumni Secretary} | Hostel 4"));

        por.description = "Led a council of **12**".to_string();
        let with = render_responsibilities(&CLASSIC, &[por]);
        assert!(with.contains("\\vspace{-1.5mm}\n\\textit{Led a council of \\textbf{12}}\n\\vspace{-1mm}\n"));
        assert!(!with.contains("\\vspace{-6.2mm}"));
    }

    #[test]
    fn test_project_subtitle_italic_and_optional() {
        let project = Project {
            name: "Apex".to_string(),
            subtitle: "Resume Generator".to_string(),
            dates: String::new(),
            description: String::new(),
            points: vec!["Shipped".to_string()],
        };
        let fragment = render_projects(&BOXED, &[project.clone()]);
        assert!(fragment.contains("\\textbf{\\large Apex} \\textit{| Resume Generator}\n"));
        assert!(!fragment.contains("\\hfill"));

        let bare = Project {
            subtitle: " ".to_string(),
            ..project
        };
        let fragment = render_projects(&BOXED, &[bare]);
        assert!(fragment.contains("\\textbf{\\large Apex}\n"));
        assert!(!fragment.contains('|'));
    }

    #[test]
    fn test_style_variant_isolation() {
        let record = [experience(&["Cut latency by 30%", "Shipped v2"])];
        let classic = render_experience(&CLASSIC, &record);
        let dense = render_experience(&DENSE, &record);

        assert_ne!(classic, dense);
        assert!(classic.contains("\\colorbox{gray!20}"));
        assert!(dense.contains("\\color{denseblue}"));
        assert!(classic.contains("\\vspace{-6mm}"));
        assert!(dense.contains("\\vspace{-5mm}"));

        for fragment in [&classic, &dense] {
            assert!(fragment.contains("Acme \\& Sons"));
            assert!(fragment.contains("SDE\\_Intern"));
            assert!(fragment.contains("Cut latency by 30\\%"));
            assert!(fragment.contains("Shipped v2"));
        }
    }

    #[test]
    fn test_achievements_list() {
        let achievements = vec![
            ScholasticAchievement {
                text: "AIR **42** in JEE".to_string(),
                ..Default::default()
            },
            ScholasticAchievement::default(),
            ScholasticAchievement {
                percentile: "99.9".to_string(),
                exam_name: "KVPY".to_string(),
                year: "2021".to_string(),
                ..Default::default()
            },
        ];
        let fragment = render_achievements(&CLASSIC, &achievements);
        assert!(fragment.contains("Scholastic Achievements"));
        assert!(fragment.contains("\\begin{itemize}[itemsep=-0.8mm, leftmargin=*, label={\\textbullet}]"));
        assert!(fragment.contains("    \\item\\textls[5]{AIR \\textbf{42} in JEE}\n"));
        assert!(fragment.contains(
            "\\item\\textls[5]{Among the top \\textbf{99.9} percentile in \\textbf{KVPY} examination}\\hfill{\\sl \\small {[}2021{]}}"
        ));
        assert_eq!(fragment.matches("\\item").count(), 2);
    }

    #[test]
    fn test_list_category_with_only_blank_records_renders_nothing() {
        let activities = vec![ExtraCurricular {
            text: "   ".to_string(),
            date: "2023".to_string(),
        }];
        assert_eq!(render_extracurriculars(&CLASSIC, &activities), "");
    }

    #[test]
    fn test_extracurricular_date_optional() {
        let activities = vec![
            ExtraCurricular {
                text: "Inter-IIT Tech Meet".to_string(),
                date: "[2023]".to_string(),
            },
            ExtraCurricular {
                text: "Chess club".to_string(),
                date: String::new(),
            },
        ];
        let fragment = render_extracurriculars(&DENSE, &activities);
        assert!(fragment.contains("{Inter-IIT Tech Meet}\\hfill{\\sl \\small {[}{[}2023{]}{]}}\n"));
        assert!(fragment.contains("{Chess club}\n"));
    }

    #[test]
    fn test_skills_drop_only_fully_empty_records() {
        let skills = vec![
            TechnicalSkill {
                category: "Languages".to_string(),
                skills: "C++, Rust".to_string(),
            },
            TechnicalSkill {
                category: String::new(),
                skills: String::new(),
            },
            TechnicalSkill {
                category: "Tools".to_string(),
                skills: " ".to_string(),
            },
            TechnicalSkill {
                category: String::new(),
                skills: "Docker".to_string(),
            },
        ];
        let fragment = render_skills(&CLASSIC, &skills);
        assert_eq!(fragment.matches("\\item").count(), 3);
        assert!(fragment.contains("{\\textbf{Languages:} C++, Rust}"));
        assert!(fragment.contains("{\\textbf{Tools}}"));
        assert!(fragment.contains("{Docker}"));
    }
}
