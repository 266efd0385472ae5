// src/web/handlers/resume_handlers.rs
//! PDF generation handler
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use super::{internal_error_response, render_error_response};
use crate::render::render_document;
use crate::types::ResumeData;
use crate::utils::{current_year, download_filename};
use crate::web::types::{ApiError, PdfResponse, ServerState};

pub async fn generate_pdf_handler(
    request: Json<ResumeData>,
    state: &State<ServerState>,
) -> Result<PdfResponse, ApiError> {
    let data = request.into_inner();
    info!(
        "Generating resume: body={}, header={}, sections={}",
        data.body_id,
        data.header_id,
        data.section_order.len()
    );

    let source = render_document(&state.engine, &data).await.map_err(|e| {
        if !e.is_client_error() {
            error!("Failed to render resume: {}", e);
        }
        render_error_response(&e)
    })?;

    let pdf = state.compiler.compile(&source).await.map_err(|e| {
        error!("Failed to compile resume: {:#}", e);
        internal_error_response("Failed to generate resume PDF", "GENERATION_ERROR")
    })?;

    let filename = download_filename(&data.personal_details.name, current_year());
    info!("Resume generated: {} ({} bytes)", filename, pdf.len());
    Ok(PdfResponse::with_filename(pdf, filename))
}
