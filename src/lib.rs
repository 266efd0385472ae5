pub mod cli;
pub mod core;
pub mod render;
pub mod types;
pub mod utils;
pub mod web;

pub use crate::core::{AppConfig, ConfigManager, TemplateEngine};
pub use crate::render::{render_document, render_document_with, RenderError};
pub use crate::types::ResumeData;
pub use crate::web::start_web_server;
