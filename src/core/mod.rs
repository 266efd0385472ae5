// src/core/mod.rs
//! Template loading, configuration and the external collaborators

pub mod ai_client;
pub mod compiler;
pub mod config_manager;
pub mod fs_ops;
pub mod service_client;
pub mod template_engine;

pub use ai_client::{GeminiClient, RewriteMode};
pub use compiler::LatexCompiler;
pub use config_manager::{AppConfig, ConfigManager};
pub use fs_ops::FsOps;
pub use service_client::FormClient;
pub use template_engine::TemplateEngine;
