// src/render/style.rs
//! Style variants for the body sections and the body-template registry

use crate::types::SectionKey;

/// How a category heading is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// Title on a full-width gray band.
    GrayBand,
    /// Uppercase coloured title over a coloured rule.
    ColoredRule { color: &'static str },
    /// Title inside a tcolorbox.
    TitleBox { color: &'static str },
}

impl HeadingStyle {
    pub fn render(&self, title: &str) -> String {
        match self {
            HeadingStyle::GrayBand => format!(
                "\\noindent\\colorbox{{gray!20}}{{\\makebox[\\dimexpr\\textwidth-2\\fboxsep][l]{{\\textbf{{\\large {title}}}}}}}\n\\vspace{{1mm}}\n"
            ),
            HeadingStyle::ColoredRule { color } => format!(
                "\\noindent{{\\color{{{color}}}\\textbf{{\\large \\MakeUppercase{{{title}}}}}}}\\\\[-3mm]\n{{\\color{{{color}}}\\rule{{\\textwidth}}{{0.5mm}}}}\n"
            ),
            HeadingStyle::TitleBox { color } => format!(
                "\\begin{{tcolorbox}}[colback={color}!8,colframe={color},boxrule=0.5pt,arc=1mm,left=1.5mm,top=0.5mm,bottom=0.5mm]\n\\textbf{{\\large {title}}}\n\\end{{tcolorbox}}\n"
            ),
        }
    }
}

/// Visual parameters shared by every section renderer.
#[derive(Debug)]
pub struct StyleSheet {
    pub id: &'static str,
    pub heading: HeadingStyle,
    /// `label=` value of every `itemize`.
    pub bullet: &'static str,
    /// Letter-spacing passed to `\textls` on bullet points.
    pub tracking: i32,
    /// Space between two records of one category.
    pub entry_gap: &'static str,
    /// Space after the last record, compensating the list's trailing skip.
    pub closing_gap: &'static str,
    /// Space between the title rule and the bullet list when there is no summary.
    pub rule_gap: &'static str,
    /// Space around an italic summary line.
    pub summary_gaps: (&'static str, &'static str),
    /// `itemsep` of one-line list categories.
    pub list_itemsep: &'static str,
    pub sections: &'static [SectionKey],
}

impl StyleSheet {
    pub fn supports(&self, key: SectionKey) -> bool {
        self.sections.contains(&key)
    }
}

pub static CLASSIC: StyleSheet = StyleSheet {
    id: "classic",
    heading: HeadingStyle::GrayBand,
    bullet: r"\textbullet",
    tracking: 5,
    entry_gap: "-0.5mm",
    closing_gap: "-6mm",
    rule_gap: "-6.2mm",
    summary_gaps: ("-1.5mm", "-1mm"),
    list_itemsep: "-0.8mm",
    sections: &SectionKey::ALL,
};

pub static DENSE: StyleSheet = StyleSheet {
    id: "dense",
    heading: HeadingStyle::ColoredRule { color: "denseblue" },
    bullet: r"{\color{denseblue}\scriptsize$\blacktriangleright$}",
    tracking: 0,
    entry_gap: "-1.5mm",
    closing_gap: "-5mm",
    rule_gap: "-6.8mm",
    summary_gaps: ("-2mm", "-1.5mm"),
    list_itemsep: "-1.2mm",
    sections: &SectionKey::ALL,
};

pub static BOXED: StyleSheet = StyleSheet {
    id: "boxed",
    heading: HeadingStyle::TitleBox { color: "boxblue" },
    bullet: r"{\color{boxblue}$\circ$}",
    tracking: 5,
    entry_gap: "-1mm",
    closing_gap: "-4mm",
    rule_gap: "-6mm",
    summary_gaps: ("-1.5mm", "-1mm"),
    list_itemsep: "-0.5mm",
    sections: &SectionKey::ALL,
};

// ===== Body Template Registry =====

/// A body skeleton the caller can select, and the style its sections use.
#[derive(Debug)]
pub struct BodyTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub style: &'static StyleSheet,
}

pub static BODY_TEMPLATES: [BodyTemplate; 3] = [
    BodyTemplate {
        id: "iitb_one_page.tex",
        name: "IITB Style",
        style: &CLASSIC,
    },
    BodyTemplate {
        id: "dense_blue.tex",
        name: "IITB Style (Dense)",
        style: &DENSE,
    },
    BodyTemplate {
        id: "tcolorbox_style.tex",
        name: "T-Colorbox Style",
        style: &BOXED,
    },
];

pub fn find_body_template(id: &str) -> Option<&'static BodyTemplate> {
    BODY_TEMPLATES.iter().find(|template| template.id == id)
}
