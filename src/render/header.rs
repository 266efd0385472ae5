// src/render/header.rs
//! Banner renderers for the top of the document

use std::fmt;
use std::str::FromStr;

use crate::render::error::RenderError;
use crate::render::escape::{escape_latex, escape_url};
use crate::types::{present, PersonalDetails};

const IITB_NAME: &str = "Indian Institute of Technology Bombay";
const IITB_SHORT: &str = "IIT Bombay";
const IITB_GRAD_YEAR: &str = "2027";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Universal,
    Iitb,
    IitbCompact,
    Blank,
}

impl HeaderStyle {
    pub const ALL: [HeaderStyle; 4] = [
        HeaderStyle::Universal,
        HeaderStyle::Iitb,
        HeaderStyle::IitbCompact,
        HeaderStyle::Blank,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HeaderStyle::Universal => "universal",
            HeaderStyle::Iitb => "iitb",
            HeaderStyle::IitbCompact => "iitb_2",
            HeaderStyle::Blank => "blank",
        }
    }

    /// Label shown in the template picker.
    pub fn display_name(self) -> &'static str {
        match self {
            HeaderStyle::Universal => "Universal",
            HeaderStyle::Iitb => "IITB Official",
            HeaderStyle::IitbCompact => "IITB (Editable Institute)",
            HeaderStyle::Blank => "Blank (add your own)",
        }
    }
}

impl FromStr for HeaderStyle {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderStyle::ALL
            .into_iter()
            .find(|style| style.id() == s)
            .ok_or_else(|| RenderError::UnknownHeaderStyle(s.to_string()))
    }
}

impl fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub fn render_header(style: HeaderStyle, details: &PersonalDetails) -> String {
    match style {
        HeaderStyle::Universal => render_universal(details),
        HeaderStyle::Iitb => render_institute(details, &InstituteLayout::official()),
        HeaderStyle::IitbCompact => render_institute(details, &InstituteLayout::from_details(details)),
        HeaderStyle::Blank => "\\vspace*{3.5cm}\n".to_string(),
    }
}

/// Escaped value of a field, if present.
fn field(value: &str) -> Option<String> {
    present(value).map(|v| escape_latex(v).into_owned())
}

/// Stacks the present lines of a tabular cell or minipage column.
fn stack(lines: Vec<Option<String>>) -> String {
    lines
        .into_iter()
        .flatten()
        .map(|line| format!("        {}", line))
        .collect::<Vec<_>>()
        .join(" \\\\\n")
}

// ===== Universal =====

fn render_universal(details: &PersonalDetails) -> String {
    let contact = stack(vec![
        present(&details.email).map(|email| {
            format!(
                "{{\\faEnvelope}} \\href{{mailto:{}}}{{{}}}",
                escape_url(email),
                escape_latex(email)
            )
        }),
        field(&details.phone).map(|phone| format!("{{\\faPhone}} {}", phone)),
        present(&details.linkedin_url)
            .map(|url| format!("{{\\faLinkedin}} \\href{{{}}}{{LinkedIn}}", escape_url(url))),
        present(&details.github_url)
            .map(|url| format!("{{\\faGithub}} \\href{{{}}}{{GitHub}}", escape_url(url))),
    ]);

    let identity = stack(vec![
        field(&details.name).map(|name| format!("{{\\Large\\textbf{{{}}}}}", name)),
        field(&details.branch),
        field(&details.institution),
    ]);

    let standing = stack(vec![
        field(&details.cpi).map(|cpi| format!("CPI: {}", cpi)),
        field(&details.grad_year).map(|year| format!("Class of {}", year)),
        field(&details.location),
    ]);

    format!(
        "\\noindent\n\
\\begin{{minipage}}[t]{{0.33\\textwidth}}\n\
    \\raggedright\\small\n\
{contact}\n\
\\end{{minipage}}%\n\
\\begin{{minipage}}[t]{{0.34\\textwidth}}\n\
    \\centering\n\
{identity}\n\
\\end{{minipage}}%\n\
\\begin{{minipage}}[t]{{0.33\\textwidth}}\n\
    \\raggedleft\\small\n\
{standing}\n\
\\end{{minipage}}\n\
\\par\\vspace{{1mm}}\n\
\\noindent\\rule{{\\textwidth}}{{0.4pt}}\n"
    )
}

// ===== Institute =====

/// Fixed text of the institute banner and results table.
struct InstituteLayout {
    institute: String,
    short_name: String,
    grad_year: String,
    email: Option<String>,
}

impl InstituteLayout {
    fn official() -> Self {
        Self {
            institute: IITB_NAME.to_string(),
            short_name: IITB_SHORT.to_string(),
            grad_year: IITB_GRAD_YEAR.to_string(),
            email: None,
        }
    }

    /// Institute name, graduation year and email taken from the caller's details.
    fn from_details(details: &PersonalDetails) -> Self {
        let institute = field(&details.institution).unwrap_or_else(|| IITB_NAME.to_string());
        Self {
            short_name: institute.clone(),
            institute,
            grad_year: field(&details.grad_year).unwrap_or_default(),
            email: present(&details.email).map(|email| {
                format!(
                    "\\href{{mailto:{}}}{{{}}}",
                    escape_url(email),
                    escape_latex(email)
                )
            }),
        }
    }
}

fn render_institute(details: &PersonalDetails, layout: &InstituteLayout) -> String {
    let identity = stack(vec![
        field(&details.name).map(|name| format!("\\textbf{{\\Large {}}}", name)),
        field(&details.branch),
        Some(layout.institute.clone()),
        layout.email.clone(),
    ]);

    let registration = stack(vec![
        field(&details.roll_no).map(|roll| format!("\\textbf{{{}}}", roll)),
        Some("B.Tech".to_string()),
        field(&details.gender).map(|gender| format!("Gender: {}", gender)),
        field(&details.dob).map(|dob| format!("DOB: {}", dob)),
    ]);

    let cpi = field(&details.cpi).unwrap_or_default();

    format!(
        "\\begin{{tabular*}}{{\\textwidth}}{{@{{}}l@{{\\extracolsep{{\\fill}}}}lr@{{}}}}\n\
    \\IfFileExists{{iitb_logo.png}}{{\\raisebox{{-0.25\\height}}{{\\includegraphics[height=1.5cm]{{iitb_logo.png}}}}}}{{}} &\n\
    \\begin{{tabular}}[b]{{l}}\n\
{identity}\n\
    \\end{{tabular}} &\n\
    \\begin{{tabular}}[b]{{l}}\n\
{registration}\n\
    \\end{{tabular}}\n\
\\end{{tabular*}}\n\
\\vspace{{2mm}}\n\
\\begin{{tabular*}}{{\\textwidth}}{{@{{\\extracolsep{{\\fill}}}}lllrr}}\n\
    \\hline\n\
    \\textbf{{Examination}} & \\textbf{{University}} & \\textbf{{Institute}} & \\textbf{{Year}} & \\textbf{{CPI / \\%}} \\\\ \\hline\n\
    Graduation & {short} & {short} & {year} & {cpi} \\\\ \\hline\n\
\\end{{tabular*}}\n",
        short = layout.short_name,
        year = layout.grad_year,
    )
}
