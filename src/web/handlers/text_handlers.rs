// src/web/handlers/text_handlers.rs
//! Bullet point rewriting handlers
use rocket::serde::json::Json;
use rocket::State;
use tracing::error;

use super::{bad_request_response, internal_error_response};
use crate::core::RewriteMode;
use crate::types::present;
use crate::web::types::{
    AdjustedTextResponse, ApiError, ImprovedTextResponse, ServerState, TextRequest,
};

async fn rewrite(
    request: &TextRequest,
    mode: RewriteMode,
    state: &ServerState,
) -> Result<String, ApiError> {
    let text = present(&request.text).ok_or_else(|| {
        bad_request_response(
            "Text cannot be empty",
            "EMPTY_TEXT",
            "Send the bullet point to rewrite in the text field",
        )
    })?;

    state.gemini.rewrite(text, mode).await.map_err(|e| {
        error!("Failed to {} text: {:#}", mode, e);
        internal_error_response("An error occurred with the AI model", "AI_ERROR")
    })
}

pub async fn improve_text_handler(
    request: Json<TextRequest>,
    state: &State<ServerState>,
) -> Result<Json<ImprovedTextResponse>, ApiError> {
    let improved_text = rewrite(&request, RewriteMode::Improve, state).await?;
    Ok(Json(ImprovedTextResponse { improved_text }))
}

pub async fn adjust_text_handler(
    request: Json<TextRequest>,
    mode: RewriteMode,
    state: &State<ServerState>,
) -> Result<Json<AdjustedTextResponse>, ApiError> {
    let adjusted_text = rewrite(&request, mode, state).await?;
    Ok(Json(AdjustedTextResponse { adjusted_text }))
}
