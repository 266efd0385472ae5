// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::render::HeaderStyle;
use crate::types::SectionKey;
use crate::web::types::{DataResponse, ServerState, TemplateOption, TemplateOptions, TextResponse};

pub async fn get_templates_handler(state: &State<ServerState>) -> Json<DataResponse<TemplateOptions>> {
    let headers = HeaderStyle::ALL
        .iter()
        .map(|style| TemplateOption {
            id: style.id().to_string(),
            name: style.display_name().to_string(),
        })
        .collect();

    let bodies: Vec<TemplateOption> = state
        .engine
        .list_templates()
        .into_iter()
        .map(|template| TemplateOption {
            id: template.id.to_string(),
            name: template.name.to_string(),
        })
        .collect();

    let sections = SectionKey::ALL
        .iter()
        .map(|key| key.as_str().to_string())
        .collect();

    Json(DataResponse::success(
        format!("{} body templates available", bodies.len()),
        TemplateOptions {
            headers,
            bodies,
            sections,
        },
    ))
}

pub async fn health_handler() -> Json<TextResponse> {
    info!("Health check");
    Json(TextResponse::success("OK".to_string()))
}
