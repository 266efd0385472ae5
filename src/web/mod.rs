// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

use crate::core::{AppConfig, FormClient, GeminiClient, LatexCompiler, RewriteMode, TemplateEngine};
use crate::types::ResumeData;

// CORS Fairing
pub struct Cors {
    allowed_origins: Vec<String>,
}

impl Cors {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    /// Origin to echo back. A `*` entry admits any origin, but the request
    /// origin is still echoed since credentials are allowed.
    fn allow(&self, origin: &str) -> Option<String> {
        self.allowed_origins
            .iter()
            .any(|o| o == "*" || o == origin)
            .then(|| origin.to_string())
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let Some(origin) = request.headers().get_one("Origin") else {
            return;
        };
        let Some(allowed) = self.allow(origin) else {
            return;
        };

        response.set_header(Header::new("Access-Control-Allow-Origin", allowed));
        response.set_header(Header::new("Vary", "Origin"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
        response.set_header(Header::new(
            "Access-Control-Expose-Headers",
            "Content-Disposition",
        ));
    }
}

// ===== Routes =====

#[post("/generate_pdf", data = "<request>")]
pub async fn generate_pdf(
    request: Json<ResumeData>,
    state: &State<ServerState>,
) -> Result<PdfResponse, ApiError> {
    handlers::generate_pdf_handler(request, state).await
}

#[post("/improve_text", data = "<request>")]
pub async fn improve_text(
    request: Json<TextRequest>,
    state: &State<ServerState>,
) -> Result<Json<ImprovedTextResponse>, ApiError> {
    handlers::improve_text_handler(request, state).await
}

#[post("/lengthen_text", data = "<request>")]
pub async fn lengthen_text(
    request: Json<TextRequest>,
    state: &State<ServerState>,
) -> Result<Json<AdjustedTextResponse>, ApiError> {
    handlers::adjust_text_handler(request, RewriteMode::Lengthen, state).await
}

#[post("/shorten_text", data = "<request>")]
pub async fn shorten_text(
    request: Json<TextRequest>,
    state: &State<ServerState>,
) -> Result<Json<AdjustedTextResponse>, ApiError> {
    handlers::adjust_text_handler(request, RewriteMode::Shorten, state).await
}

#[post("/funnel/submit", data = "<request>")]
pub async fn funnel_submit(
    request: Json<FunnelRequest>,
    state: &State<ServerState>,
) -> Result<Json<ActionResponse>, ApiError> {
    handlers::funnel_submit_handler(request, state).await
}

#[post("/waitlist/submit", data = "<request>")]
pub async fn waitlist_submit(
    request: Json<WaitlistRequest>,
    state: &State<ServerState>,
) -> Result<Json<ActionResponse>, ApiError> {
    handlers::waitlist_submit_handler(request, state).await
}

#[get("/templates")]
pub async fn get_templates(state: &State<ServerState>) -> Json<DataResponse<TemplateOptions>> {
    handlers::get_templates_handler(state).await
}

#[get("/health")]
pub async fn health() -> Json<TextResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec![
            "Check your request JSON format".to_string(),
            "Verify all required fields are present".to_string(),
        ],
    ))
}

#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        format!("No route for {} {}", request.method(), request.uri().path()),
        "NOT_FOUND".to_string(),
        vec!["Check the endpoint path and HTTP method".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request body does not match the expected shape".to_string(),
        "INVALID_PAYLOAD".to_string(),
        vec![
            "Section order keys must be one of the known categories".to_string(),
            "Text fields must be strings and lists must be arrays".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec![
            "Try again in a few moments".to_string(),
            "Contact support if the problem persists".to_string(),
        ],
    ))
}

impl ServerState {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let api_key = config.require_api_key()?;
        let gemini = GeminiClient::with_base_url(
            api_key.to_string(),
            config.gemini.model.clone(),
            config.gemini.base_url.clone(),
        )?;

        Ok(Self {
            engine: TemplateEngine::new(&config.templates_dir),
            compiler: LatexCompiler::new(
                config.latex.program.clone(),
                &config.latex.work_dir,
                &config.templates_dir,
            )
            .with_passes(config.latex.passes),
            gemini,
            forms: FormClient::new()?,
            form_urls: config.forms.clone(),
        })
    }
}

/// Assemble the Rocket instance without launching it.
pub fn build_rocket(state: ServerState, allowed_origins: Vec<String>) -> Rocket<Build> {
    rocket::build()
        .attach(Cors::new(allowed_origins))
        .manage(state)
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        )
        .mount(
            "/",
            routes![
                generate_pdf,
                improve_text,
                lengthen_text,
                shorten_text,
                funnel_submit,
                waitlist_submit,
                get_templates,
                health,
                options,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: AppConfig) -> Result<()> {
    config.ensure_directories().await?;
    let state = ServerState::from_config(&config)?;

    info!("Starting resume server on port {}", config.port);
    info!("Templates: {}", config.templates_dir.display());
    info!(
        "LaTeX: {} x{} in {}",
        config.latex.program,
        config.latex.passes,
        config.latex.work_dir.display()
    );
    info!("Gemini model: {}", config.gemini.model);

    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("address", "0.0.0.0"));

    let _rocket = build_rocket(state, config.allowed_origins.clone())
        .configure(figment)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config_manager::FormsConfig;
    use rocket::http::ContentType;
    use rocket::local::asynchronous::Client;
    use std::path::Path;

    fn test_state(work_dir: &Path) -> ServerState {
        let templates = Path::new(env!("CARGO_MANIFEST_DIR")).join("templates");
        ServerState {
            engine: TemplateEngine::new(&templates),
            compiler: LatexCompiler::new("definitely-not-a-latex-binary", work_dir, &templates),
            gemini: GeminiClient::with_base_url(
                "test-key".to_string(),
                "gemini-2.5-flash".to_string(),
                "http://127.0.0.1:9".to_string(),
            )
            .unwrap(),
            forms: FormClient::new().unwrap(),
            form_urls: FormsConfig::default(),
        }
    }

    async fn client(work_dir: &Path) -> Client {
        let rocket = build_rocket(
            test_state(work_dir),
            vec!["http://localhost:5173".to_string()],
        );
        Client::tracked(rocket).await.unwrap()
    }

    async fn error_code(response: rocket::local::asynchronous::LocalResponse<'_>) -> String {
        let body: serde_json::Value = response.into_json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["type"], "error");
        body["error_code"].as_str().unwrap().to_string()
    }

    #[rocket::async_test]
    async fn test_health() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;
        let response = client.get("/health").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: serde_json::Value = response.into_json().await.unwrap();
        assert_eq!(body["message"], "OK");
    }

    #[rocket::async_test]
    async fn test_unknown_header_is_bad_request() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;
        let response = client
            .post("/generate_pdf")
            .header(ContentType::JSON)
            .body(r#"{"header_id": "fancy"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(error_code(response).await, "UNKNOWN_HEADER_STYLE");
    }

    #[rocket::async_test]
    async fn test_traversal_template_is_bad_request() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;
        let response = client
            .post("/generate_pdf")
            .header(ContentType::JSON)
            .body(r#"{"template_name": "../../etc/passwd"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(error_code(response).await, "INVALID_TEMPLATE_ID");
    }

    #[rocket::async_test]
    async fn test_unknown_section_key_is_unprocessable() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;
        let response = client
            .post("/generate_pdf")
            .header(ContentType::JSON)
            .body(r#"{"sectionOrder": ["hobbies"]}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::UnprocessableEntity);
        assert_eq!(error_code(response).await, "INVALID_PAYLOAD");
    }

    #[rocket::async_test]
    async fn test_compiler_failure_is_generic_500() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;
        let response = client
            .post("/generate_pdf")
            .header(ContentType::JSON)
            .body(r#"{"personalDetails": {"name": "Trisha"}}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(error_code(response).await, "GENERATION_ERROR");
    }

    #[rocket::async_test]
    async fn test_empty_text_rejected_before_ai_call() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;
        for path in ["/improve_text", "/lengthen_text", "/shorten_text"] {
            let response = client
                .post(path)
                .header(ContentType::JSON)
                .body(r#"{"text": "   "}"#)
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::BadRequest);
            assert_eq!(error_code(response).await, "EMPTY_TEXT");
        }
    }

    #[rocket::async_test]
    async fn test_waitlist_validation_and_unconfigured_form() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;

        let response = client
            .post("/waitlist/submit")
            .header(ContentType::JSON)
            .body(r#"{"email": "not-an-email"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(error_code(response).await, "INVALID_EMAIL");

        let response = client
            .post("/waitlist/submit")
            .header(ContentType::JSON)
            .body(r#"{"email": "trisha@example.com"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(error_code(response).await, "SUBMISSION_ERROR");
    }

    #[rocket::async_test]
    async fn test_templates_lists_headers_and_bodies() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;
        let response = client.get("/templates").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let body: serde_json::Value = response.into_json().await.unwrap();
        let headers = body["data"]["headers"].as_array().unwrap();
        let bodies = body["data"]["bodies"].as_array().unwrap();
        assert_eq!(headers.len(), 4);
        assert_eq!(bodies.len(), 3);
        assert_eq!(bodies[0]["id"], "iitb_one_page.tex");
    }

    #[rocket::async_test]
    async fn test_cors_only_for_allowed_origins() {
        let work = tempfile::tempdir().unwrap();
        let client = client(work.path()).await;

        let response = client
            .options("/generate_pdf")
            .header(Header::new("Origin", "http://localhost:5173"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("http://localhost:5173")
        );

        let response = client
            .get("/health")
            .header(Header::new("Origin", "https://evil.example"))
            .dispatch()
            .await;
        assert!(response.headers().get_one("Access-Control-Allow-Origin").is_none());
    }

    #[rocket::async_test]
    async fn test_cors_wildcard_echoes_origin_with_credentials() {
        let work = tempfile::tempdir().unwrap();
        let rocket = build_rocket(test_state(work.path()), vec!["*".to_string()]);
        let client = Client::tracked(rocket).await.unwrap();

        let response = client
            .get("/health")
            .header(Header::new("Origin", "https://app.example"))
            .dispatch()
            .await;
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("https://app.example")
        );
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Credentials"),
            Some("true")
        );
    }
}
