// src/core/config_manager.rs
//! Application configuration: optional config.yaml section plus environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::ai_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::core::compiler::DEFAULT_PASSES;

pub const CONFIG_FILE: &str = "config.yaml";
pub const TEMPLATES_DIR: &str = "templates";
pub const DEFAULT_PORT: u16 = 8000;

const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "https://resume-generator-chi-eosin.vercel.app",
];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub templates_dir: PathBuf,
    pub gemini: GeminiConfig,
    pub forms: FormsConfig,
    pub latex: LatexConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct FormsConfig {
    pub funnel_url: Option<String>,
    pub waitlist_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LatexConfig {
    pub program: String,
    pub work_dir: PathBuf,
    pub passes: usize,
}

/// One environment section of config.yaml. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSection {
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
    gemini_model: Option<String>,
    gemini_base_url: Option<String>,
    funnel_form_url: Option<String>,
    waitlist_form_url: Option<String>,
    latex_program: Option<String>,
    latex_passes: Option<usize>,
    work_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    local: FileSection,
    production: FileSection,
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from `config.yaml` (if present) and the process environment.
    pub fn load() -> Result<AppConfig> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let file = Self::read_config_file(Path::new(CONFIG_FILE))?;
        Self::from_sources(&environment, file.as_deref(), |key| std::env::var(key).ok())
    }

    fn get_environment() -> String {
        std::env::var("RESUME_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn read_config_file(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            info!("{} not found, using defaults", path.display());
            return Ok(None);
        }
        std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Build the configuration from a config file body and a variable lookup.
    pub fn from_sources(
        environment: &str,
        file: Option<&str>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<AppConfig> {
        let config_file: ConfigFile = match file {
            Some(content) => {
                serde_yaml::from_str(content).context("Failed to parse config.yaml")?
            }
            None => ConfigFile::default(),
        };
        let section = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        let var = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got '{}'", port))?,
            None => section.port.unwrap_or(DEFAULT_PORT),
        };

        let allowed_origins = match var("ALLOWED_ORIGINS") {
            Some(origins) => origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            None => section
                .allowed_origins
                .unwrap_or_else(|| DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect()),
        };

        Ok(AppConfig {
            environment: environment.to_string(),
            port,
            allowed_origins,
            templates_dir: PathBuf::from(TEMPLATES_DIR),
            gemini: GeminiConfig {
                api_key: var("GEMINI_API_KEY"),
                model: var("GEMINI_MODEL")
                    .or(section.gemini_model)
                    .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: section
                    .gemini_base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            },
            forms: FormsConfig {
                funnel_url: var("FUNNEL_FORM_URL").or(section.funnel_form_url),
                waitlist_url: var("WAITLIST_FORM_URL").or(section.waitlist_form_url),
            },
            latex: LatexConfig {
                program: var("LATEX_PROGRAM")
                    .or(section.latex_program)
                    .unwrap_or_else(|| "pdflatex".to_string()),
                work_dir: var("WORK_DIR")
                    .map(PathBuf::from)
                    .or(section.work_dir)
                    .unwrap_or_else(|| std::env::temp_dir().join("resume-forge")),
                passes: section.latex_passes.unwrap_or(DEFAULT_PASSES),
            },
        })
    }
}

impl AppConfig {
    /// The Gemini key, required before serving the rewrite endpoints.
    pub fn require_api_key(&self) -> Result<&str> {
        self.gemini
            .api_key
            .as_deref()
            .context("GEMINI_API_KEY environment variable not set")
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        crate::core::FsOps::ensure_dir_exists(&self.latex.work_dir).await
    }
}
