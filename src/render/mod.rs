// src/render/mod.rs
//! Resume data to LaTeX source

pub mod error;
pub mod escape;
pub mod header;
pub mod order;
pub mod sections;
pub mod style;

use tracing::debug;

use crate::core::TemplateEngine;
use crate::types::{ResumeData, SectionKey};

pub use error::RenderError;
pub use header::{render_header, HeaderStyle};
pub use order::assemble_sections;
pub use style::StyleSheet;

/// Render a complete document using the selectors carried by `data`.
pub async fn render_document(
    engine: &TemplateEngine,
    data: &ResumeData,
) -> Result<String, RenderError> {
    render_document_with(
        engine,
        &data.body_id,
        &data.header_id,
        &data.section_order,
        data,
    )
    .await
}

/// Render a complete document with explicit selectors.
///
/// Both selectors are checked before anything is rendered or read from disk.
pub async fn render_document_with(
    engine: &TemplateEngine,
    body_id: &str,
    header_id: &str,
    order: &[SectionKey],
    data: &ResumeData,
) -> Result<String, RenderError> {
    let header_style: HeaderStyle = header_id.parse()?;
    let body = TemplateEngine::validate_template_id(body_id)?;

    debug!(
        "Rendering body '{}' ({}) with header '{}' and {} sections",
        body.id,
        body.style.id,
        header_style,
        order.len()
    );

    let header = render_header(header_style, &data.personal_details);
    let content = assemble_sections(order, body.style, data);
    engine.assemble_document(body.id, &header, &content).await
}
