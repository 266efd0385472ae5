// src/render/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures the rendering pipeline reports to its caller.
///
/// Selector variants are raised before any template file is touched; the HTTP
/// layer maps them to client errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown header style '{0}'")]
    UnknownHeaderStyle(String),

    #[error("invalid template id '{0}'")]
    UnsafeTemplateId(String),

    #[error("unknown body template '{0}'")]
    UnknownTemplate(String),

    #[error("template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("failed to read template {}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template '{template}' has no {placeholder} placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },
}

impl RenderError {
    /// True for errors caused by the caller's selectors rather than the deployment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RenderError::UnknownHeaderStyle(_)
                | RenderError::UnsafeTemplateId(_)
                | RenderError::UnknownTemplate(_)
        )
    }
}
