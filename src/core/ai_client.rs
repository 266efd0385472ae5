// src/core/ai_client.rs
//! Bullet point rewriting through the Gemini generateContent API

use anyhow::{Context, Result};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use tracing::{error, info};

use crate::types::response::{GenerateContentRequest, GenerateContentResponse, ServiceErrorResponse};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

const STYLE_EXAMPLES: [&str; 3] = [
    "Engineered the MVP, an AI agent on n8n, automating resume data extraction via Google Gemini and OCR API's",
    "Trained a predictive FinBERT NLP model to predict stock trends from 25,000+ news articles, reaching 73% accuracy",
    "Managed the estate vertical solely and was overseeing an annual amenities budget of INR 1M+ for new initiatives",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    Improve,
    Lengthen,
    Shorten,
}

impl fmt::Display for RewriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RewriteMode::Improve => "improve",
            RewriteMode::Lengthen => "lengthen",
            RewriteMode::Shorten => "shorten",
        };
        f.write_str(name)
    }
}

impl RewriteMode {
    pub fn prompt(self, text: &str) -> String {
        let task = match self {
            RewriteMode::Improve => "rewrite it to match the high-quality, dense, and metric-driven style of the examples provided",
            RewriteMode::Lengthen => "expand it to roughly 1.3 to 1.5 times its current length by adding concrete detail about scope, method and impact, in the style of the examples provided",
            RewriteMode::Shorten => "compress it to roughly 60 to 70 percent of its current length, keeping every metric and the strongest action verb, in the style of the examples provided",
        };

        format!(
            r#"You are an expert resume writing assistant for students at a top-tier engineering college like an IIT in India.
Your task is to take a user-written bullet point and {task}.
Examples:
- {}
- {}
- {}
Follow these rules strictly:
1. Start with a strong, impressive action verb.
2. Use the STAR (Situation, Task, Action, Result) method. Focus on quantifiable results.
3. Keep the tone highly professional and concise.
4. Do not use personal pronouns like "I" or "we".
5. Do not use any Markdown formatting.
6. CRITICAL RULE: The final output must be a single, unbroken line of text.
User Text: "{text}"
Perfect Output:"#,
            STYLE_EXAMPLES[0], STYLE_EXAMPLES[1], STYLE_EXAMPLES[2]
        )
    }
}

/// Reduce model output to one plain line.
pub fn normalize(text: &str) -> String {
    text.trim()
        .replace("**", "")
        .replace("\r\n", " ")
        .replace('\n', " ")
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn rewrite(&self, text: &str, mode: RewriteMode) -> Result<String> {
        let prompt = mode.prompt(text);
        let request = GenerateContentRequest::user_prompt(&prompt);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        info!("Sending {} request to Gemini model {}", mode, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Gemini API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ServiceErrorResponse>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            error!("Gemini API error {}: {}", status, message);
            anyhow::bail!("Gemini API returned error {}: {}", status, message);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = body
            .text()
            .map(|raw| normalize(&raw))
            .filter(|text| !text.is_empty())
            .context("Gemini API returned no text")?;

        info!("Received {} rewrite ({} chars)", mode, text.len());
        Ok(text)
    }
}
