// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::{AppConfig, FsOps, LatexCompiler, TemplateEngine};
use crate::render::{render_document, HeaderStyle};
use crate::types::ResumeData;
use crate::utils::validate_file_extension;
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "resume-forge")]
#[command(about = "Render resume data to LaTeX and PDF, or serve the HTTP API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Render a resume JSON file to LaTeX source
    Render {
        #[arg(long, short)]
        input: PathBuf,
        /// Write to this .tex file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Render and compile a resume JSON file to PDF
    Build {
        #[arg(long, short)]
        input: PathBuf,
        #[arg(long, short)]
        output: PathBuf,
    },
    /// List header styles and body templates
    Templates,
}

pub async fn handle_command(cli: Cli, config: AppConfig) -> Result<()> {
    let engine = TemplateEngine::new(&config.templates_dir);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => start_web_server(config).await,

        Command::Render { input, output } => {
            let source = render_file(&engine, &input).await?;
            match output {
                Some(path) => {
                    validate_file_extension(&path.to_string_lossy(), &["tex"])?;
                    FsOps::write_file_safe(&path, &source).await?;
                    info!("Wrote {}", path.display());
                }
                None => print!("{}", source),
            }
            Ok(())
        }

        Command::Build { input, output } => {
            validate_file_extension(&output.to_string_lossy(), &["pdf"])?;
            let source = render_file(&engine, &input).await?;

            config.ensure_directories().await?;
            let compiler = LatexCompiler::new(
                config.latex.program.clone(),
                &config.latex.work_dir,
                &config.templates_dir,
            )
            .with_passes(config.latex.passes);

            let pdf = compiler.compile(&source).await?;
            FsOps::write_file_safe(&output, &pdf).await?;
            info!("Wrote {} ({} bytes)", output.display(), pdf.len());
            Ok(())
        }

        Command::Templates => {
            println!("Header styles:");
            for style in HeaderStyle::ALL {
                println!("  {:<10} {}", style.id(), style.display_name());
            }
            println!("Body templates ({}):", engine.templates_dir().display());
            for template in engine.list_templates() {
                println!("  {:<22} {}", template.id, template.name);
            }
            Ok(())
        }
    }
}

async fn render_file(engine: &TemplateEngine, input: &Path) -> Result<String> {
    let json = FsOps::read_file_safe(input).await?;
    let data: ResumeData = serde_json::from_str(&json)
        .with_context(|| format!("Invalid resume data in {}", input.display()))?;

    render_document(engine, &data)
        .await
        .with_context(|| format!("Failed to render {}", input.display()))
}
