// src/core/compiler.rs
//! pdflatex invocation in an isolated per-job directory

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::FsOps;

pub const DEFAULT_PASSES: usize = 2;
const NO_LOG: &str = "No log file found.";

#[derive(Debug, Clone)]
pub struct LatexCompiler {
    program: String,
    work_root: PathBuf,
    templates_dir: PathBuf,
    passes: usize,
}

impl LatexCompiler {
    pub fn new(
        program: impl Into<String>,
        work_root: impl Into<PathBuf>,
        templates_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            work_root: work_root.into(),
            templates_dir: templates_dir.into(),
            passes: DEFAULT_PASSES,
        }
    }

    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes.max(1);
        self
    }

    /// Compile LaTeX source to PDF bytes.
    ///
    /// Every call gets its own directory under the work root, removed afterwards
    /// whether or not compilation succeeded.
    pub async fn compile(&self, source: &str) -> Result<Vec<u8>> {
        let job_id = Uuid::new_v4().to_string();
        let job_dir = std::path::absolute(self.work_root.join(&job_id))
            .context("Failed to resolve compile work directory")?;

        FsOps::ensure_dir_exists(&job_dir).await?;
        let result = self.run_job(&job_dir, &job_id, source).await;

        if let Err(e) = FsOps::remove_dir_all(&job_dir).await {
            warn!("Failed to clean up compile job {}: {:#}", job_id, e);
        }
        result
    }

    async fn run_job(&self, job_dir: &Path, job_id: &str, source: &str) -> Result<Vec<u8>> {
        let tex_name = format!("{}.tex", job_id);
        FsOps::write_file_safe(&job_dir.join(&tex_name), source).await?;

        let texinputs = self.texinputs()?;
        for pass in 1..=self.passes {
            debug!("{} pass {}/{} for job {}", self.program, pass, self.passes, job_id);

            let output = Command::new(&self.program)
                .arg("-interaction=nonstopmode")
                .arg(format!("-output-directory={}", job_dir.display()))
                .arg(&tex_name)
                .current_dir(job_dir)
                .env("TEXINPUTS", &texinputs)
                .output()
                .await
                .with_context(|| format!("Failed to execute {}", self.program))?;

            if !output.status.success() {
                debug!(
                    "{} exited with {} on pass {}: {}",
                    self.program,
                    output.status,
                    pass,
                    String::from_utf8_lossy(&output.stdout)
                );
            }
        }

        let pdf_path = job_dir.join(format!("{}.pdf", job_id));
        match FsOps::read_optional(&pdf_path).await? {
            Some(pdf) => {
                info!("Compiled job {} ({} bytes)", job_id, pdf.len());
                Ok(pdf)
            }
            None => {
                let log_path = job_dir.join(format!("{}.log", job_id));
                let log = match FsOps::read_optional(&log_path).await? {
                    Some(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                    None => NO_LOG.to_string(),
                };
                anyhow::bail!("PDF file was not created. LaTeX log: {}", log)
            }
        }
    }

    /// Search path with the templates directory first, then the TeX defaults.
    fn texinputs(&self) -> Result<OsString> {
        let templates = std::path::absolute(&self.templates_dir).with_context(|| {
            format!(
                "Failed to resolve templates directory: {}",
                self.templates_dir.display()
            )
        })?;
        std::env::join_paths([templates, PathBuf::new()])
            .context("Templates directory cannot be placed on TEXINPUTS")
    }
}
