// src/web/handlers/mod.rs
pub mod funnel_handlers;
pub mod resume_handlers;
pub mod system_handlers;
pub mod text_handlers;

pub use funnel_handlers::*;
pub use resume_handlers::*;
pub use system_handlers::*;
pub use text_handlers::*;

use rocket::http::Status;
use tracing::error;

use crate::render::RenderError;
use crate::web::types::{ApiError, StandardErrorResponse};

/// Map a rendering failure to its HTTP error. Selector problems are the caller's;
/// a missing or unreadable template is the deployment's.
pub fn render_error_response(err: &RenderError) -> ApiError {
    let (status, code, suggestions) = match err {
        RenderError::UnknownHeaderStyle(_) => (
            Status::BadRequest,
            "UNKNOWN_HEADER_STYLE",
            vec!["Use one of: universal, iitb, iitb_2, blank".to_string()],
        ),
        RenderError::UnsafeTemplateId(_) => (
            Status::BadRequest,
            "INVALID_TEMPLATE_ID",
            vec!["Template ids are plain file names such as iitb_one_page.tex".to_string()],
        ),
        RenderError::UnknownTemplate(_) => (
            Status::BadRequest,
            "UNKNOWN_TEMPLATE",
            vec!["GET /templates lists the available body templates".to_string()],
        ),
        RenderError::TemplateNotFound(_) => (
            Status::NotFound,
            "TEMPLATE_NOT_FOUND",
            vec!["The template is registered but missing on the server".to_string()],
        ),
        RenderError::TemplateRead { .. } | RenderError::MissingPlaceholder { .. } => {
            error!("Template error: {}", err);
            return internal_error_response("Failed to generate resume", "GENERATION_ERROR");
        }
    };

    StandardErrorResponse::new(err.to_string(), code.to_string(), suggestions).with_status(status)
}

/// Generic 500 body; the detailed cause is logged by the caller.
pub fn internal_error_response(message: &str, code: &str) -> ApiError {
    StandardErrorResponse::new(
        message.to_string(),
        code.to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    )
    .with_status(Status::InternalServerError)
}

pub fn bad_request_response(message: &str, code: &str, suggestion: &str) -> ApiError {
    StandardErrorResponse::new(
        message.to_string(),
        code.to_string(),
        vec![suggestion.to_string()],
    )
    .with_status(Status::BadRequest)
}
