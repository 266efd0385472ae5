// src/utils.rs
use anyhow::Result;
use chrono::Datelike;

const FALLBACK_DOWNLOAD_STEM: &str = "MyResume";

/// Turn a person's name into a file-name stem: words joined by `_`, other characters dropped
pub fn normalize_name_for_file(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Attachment name for a generated PDF: `<Name>_Resume_<year>.pdf`, or `MyResume.pdf`
pub fn download_filename(name: &str, year: i32) -> String {
    let stem = normalize_name_for_file(name);
    if stem.is_empty() {
        format!("{}.pdf", FALLBACK_DOWNLOAD_STEM)
    } else {
        format!("{}_Resume_{}.pdf", stem, year)
    }
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Minimal shape check for an email address
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}
