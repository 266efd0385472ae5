// src/web/handlers/funnel_handlers.rs
//! Funnel and waitlist submissions
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use super::{bad_request_response, internal_error_response};
use crate::core::service_client::{funnel_fields, waitlist_fields};
use crate::utils::is_plausible_email;
use crate::web::types::{ActionResponse, ApiError, FunnelRequest, ServerState, WaitlistRequest};

pub async fn funnel_submit_handler(
    request: Json<FunnelRequest>,
    state: &State<ServerState>,
) -> Result<Json<ActionResponse>, ApiError> {
    let data = &request.resume_data;
    let fields = funnel_fields(data).map_err(|e| {
        error!("Failed to prepare funnel submission: {:#}", e);
        internal_error_response("Failed to submit resume", "SUBMISSION_ERROR")
    })?;

    state
        .forms
        .submit(state.form_urls.funnel_url.as_deref(), &fields)
        .await
        .map_err(|e| {
            error!("Funnel submission failed: {:#}", e);
            internal_error_response("Failed to submit resume", "SUBMISSION_ERROR")
        })?;

    info!("Funnel submission forwarded");
    Ok(Json(ActionResponse::success(
        "Resume submitted successfully".to_string(),
        "funnel_submitted".to_string(),
    )))
}

pub async fn waitlist_submit_handler(
    request: Json<WaitlistRequest>,
    state: &State<ServerState>,
) -> Result<Json<ActionResponse>, ApiError> {
    if !is_plausible_email(&request.email) {
        return Err(bad_request_response(
            "A valid email address is required",
            "INVALID_EMAIL",
            "Check the email address and try again",
        ));
    }

    state
        .forms
        .submit(
            state.form_urls.waitlist_url.as_deref(),
            &waitlist_fields(&request.email),
        )
        .await
        .map_err(|e| {
            error!("Waitlist submission failed: {:#}", e);
            internal_error_response("Failed to join the waitlist", "SUBMISSION_ERROR")
        })?;

    info!("Waitlist submission forwarded");
    Ok(Json(ActionResponse::success(
        "Added to the waitlist".to_string(),
        "waitlist_joined".to_string(),
    )))
}
