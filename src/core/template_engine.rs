// src/core/template_engine.rs
//! Body template loading and placeholder substitution

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::render::error::RenderError;
use crate::render::style::{find_body_template, BodyTemplate, BODY_TEMPLATES};

pub const HEADER_PLACEHOLDER: &str = "__HEADER_SECTION__";
pub const CONTENT_PLACEHOLDER: &str = "__DYNAMIC_CONTENT_SECTION__";

// ===== Template Models =====

#[derive(Debug, Clone)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub path: PathBuf,
}

// ===== Main Template Engine =====

#[derive(Debug, Clone)]
pub struct TemplateEngine {
    templates_dir: PathBuf,
}

impl TemplateEngine {
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Registered body templates whose file is present in the templates directory.
    pub fn list_templates(&self) -> Vec<TemplateInfo> {
        let templates: Vec<TemplateInfo> = BODY_TEMPLATES
            .iter()
            .map(|template| self.template_info(template))
            .filter(|info| {
                let exists = info.path.is_file();
                if !exists {
                    warn!("Body template missing on disk: {}", info.path.display());
                }
                exists
            })
            .collect();

        debug!("Found {} body templates", templates.len());
        templates
    }

    fn template_info(&self, template: &BodyTemplate) -> TemplateInfo {
        TemplateInfo {
            id: template.id,
            name: template.name,
            path: self.templates_dir.join(template.id),
        }
    }

    /// Reject ids that could leave the templates directory, then ids that are not registered.
    /// Touches no files.
    pub fn validate_template_id(template_id: &str) -> Result<&'static BodyTemplate, RenderError> {
        let is_unsafe = template_id.is_empty()
            || template_id.contains("..")
            || template_id.contains('/')
            || template_id.contains('\\')
            || Path::new(template_id).is_absolute();
        if is_unsafe {
            return Err(RenderError::UnsafeTemplateId(template_id.to_string()));
        }

        find_body_template(template_id)
            .ok_or_else(|| RenderError::UnknownTemplate(template_id.to_string()))
    }

    /// Read a body template after validating its id.
    pub async fn load_template(&self, template_id: &str) -> Result<String, RenderError> {
        let template = Self::validate_template_id(template_id)?;
        let path = self.templates_dir.join(template.id);

        debug!("Loading body template {}", path.display());
        tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                RenderError::TemplateNotFound(path.clone())
            } else {
                RenderError::TemplateRead {
                    path: path.clone(),
                    source,
                }
            }
        })
    }

    /// Load the body template and substitute both placeholders.
    pub async fn assemble_document(
        &self,
        template_id: &str,
        header: &str,
        content: &str,
    ) -> Result<String, RenderError> {
        let skeleton = self.load_template(template_id).await?;
        substitute(template_id, &skeleton, header, content)
    }
}

/// Literal replacement of the two placeholders. A skeleton lacking either one is rejected.
pub fn substitute(
    template_id: &str,
    skeleton: &str,
    header: &str,
    content: &str,
) -> Result<String, RenderError> {
    for placeholder in [HEADER_PLACEHOLDER, CONTENT_PLACEHOLDER] {
        if !skeleton.contains(placeholder) {
            return Err(RenderError::MissingPlaceholder {
                template: template_id.to_string(),
                placeholder,
            });
        }
    }

    // Only the skeleton is scanned for markers. Neither fragment is searched
    // after insertion, so a marker inside header or content text stays literal.
    Ok(skeleton
        .split(HEADER_PLACEHOLDER)
        .map(|part| part.replace(CONTENT_PLACEHOLDER, content))
        .collect::<Vec<_>>()
        .join(header))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKELETON: &str =
        "\\documentclass{article}\n\\begin{document}\n__HEADER_SECTION__\n__DYNAMIC_CONTENT_SECTION__\n\\end{document}\n";

    fn engine_with(files: &[(&str, &str)]) -> (tempfile::TempDir, TemplateEngine) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        let engine = TemplateEngine::new(dir.path());
        (dir, engine)
    }

    #[test]
    fn test_validate_rejects_traversal() {
        for id in ["../secret.tex", "..", "a/../b.tex", "sub/iitb_one_page.tex", "/etc/passwd", ""] {
            let err = TemplateEngine::validate_template_id(id).unwrap_err();
            assert!(matches!(err, RenderError::UnsafeTemplateId(_)), "{id} accepted");
        }
    }

    #[test]
    fn test_validate_rejects_unregistered() {
        let err = TemplateEngine::validate_template_id("resume.tex").unwrap_err();
        assert!(matches!(err, RenderError::UnknownTemplate(ref id) if id == "resume.tex"));
        assert!(TemplateEngine::validate_template_id("dense_blue.tex").is_ok());
    }

    #[tokio::test]
    async fn test_assemble_substitutes_placeholders() {
        let (_dir, engine) = engine_with(&[("iitb_one_page.tex", SKELETON)]);
        let document = engine
            .assemble_document("iitb_one_page.tex", "HEADER", "BODY")
            .await
            .unwrap();
        assert_eq!(
            document,
            "\\documentclass{article}\n\\begin{document}\nHEADER\nBODY\n\\end{document}\n"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let (_dir, engine) = engine_with(&[]);
        let err = engine
            .assemble_document("dense_blue.tex", "", "")
            .await
            .unwrap_err();
        assert!(matches!(err, RenderError::TemplateNotFound(_)));
    }

    #[tokio::test]
    async fn test_missing_placeholder_fails_loudly() {
        let (_dir, engine) = engine_with(&[(
            "tcolorbox_style.tex",
            "\\begin{document}\n__HEADER_SECTION__\n\\end{document}\n",
        )]);
        let err = engine
            .assemble_document("tcolorbox_style.tex", "H", "C")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::MissingPlaceholder { placeholder, .. } if placeholder == CONTENT_PLACEHOLDER
        ));
    }

    #[tokio::test]
    async fn test_unsafe_id_checked_before_file_access() {
        let engine = TemplateEngine::new("/nonexistent/templates/dir");
        let err = engine.load_template("../iitb_one_page.tex").await.unwrap_err();
        assert!(matches!(err, RenderError::UnsafeTemplateId(_)));
    }

    #[test]
    fn test_list_templates_only_existing_files() {
        let (_dir, engine) = engine_with(&[("dense_blue.tex", SKELETON)]);
        let ids: Vec<&str> = engine.list_templates().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["dense_blue.tex"]);
        assert_eq!(
            engine.list_templates()[0].path,
            engine.templates_dir().join("dense_blue.tex")
        );
    }

    #[test]
    fn test_fragments_are_not_rescanned_for_markers() {
        let header = format!("\\href{{https://github.com/{}}}{{gh}}", CONTENT_PLACEHOLDER);
        let content = format!("body {}", HEADER_PLACEHOLDER);
        let document = substitute("t.tex", SKELETON, &header, &content).unwrap();

        assert_eq!(
            document,
            format!(
                "\\documentclass{{article}}\n\\begin{{document}}\n{}\n{}\n\\end{{document}}\n",
                header, content
            )
        );
        assert_eq!(document.matches("body").count(), 1);
    }

    #[test]
    fn test_bundled_templates_carry_both_placeholders() {
        let engine = TemplateEngine::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"));
        assert_eq!(engine.list_templates().len(), BODY_TEMPLATES.len());
        for template in engine.list_templates() {
            let skeleton = std::fs::read_to_string(&template.path).unwrap();
            assert_eq!(skeleton.matches(HEADER_PLACEHOLDER).count(), 1, "{}", template.id);
            assert_eq!(skeleton.matches(CONTENT_PLACEHOLDER).count(), 1, "{}", template.id);
        }
    }
}
