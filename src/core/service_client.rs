// src/core/service_client.rs
//! Forwards funnel and waitlist submissions to the hosted form service

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::types::{present, ResumeData};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct FormClient {
    client: reqwest::Client,
}

impl FormClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// POST `fields` as `application/x-www-form-urlencoded`.
    pub async fn submit(&self, url: Option<&str>, fields: &[(&str, String)]) -> Result<()> {
        let url = url
            .and_then(present)
            .context("Form submission URL is not configured")?;

        info!("Submitting {} form fields to {}", fields.len(), url);

        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .with_context(|| format!("Failed to POST form to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Form service error {}: {}", status, error_text);
            anyhow::bail!("Form service returned error {}: {}", status, error_text);
        }

        Ok(())
    }
}

/// Fields sent for a funnel submission: contact details plus the full resume JSON.
pub fn funnel_fields(data: &ResumeData) -> Result<Vec<(&'static str, String)>> {
    let details = &data.personal_details;
    let resume_json =
        serde_json::to_string(data).context("Failed to serialize resume data for submission")?;

    Ok(vec![
        ("name", details.name.trim().to_string()),
        ("email", details.email.trim().to_string()),
        ("phone", details.phone.trim().to_string()),
        ("branch", details.branch.trim().to_string()),
        ("institution", details.institution.trim().to_string()),
        ("cpi", details.cpi.trim().to_string()),
        ("grad_year", details.grad_year.trim().to_string()),
        ("resume_data", resume_json),
    ])
}

pub fn waitlist_fields(email: &str) -> Vec<(&'static str, String)> {
    vec![("email", email.trim().to_string())]
}
