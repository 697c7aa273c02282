//! Gemini `generateContent` client

use crate::config::ServiceConfig;
use crate::error::{AtsMatchError, Result};
use crate::pipeline::keywords::KeywordSet;
use crate::service::prompts::PromptTemplates;
use crate::service::SemanticService;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// HTTP client for the Gemini REST API.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    prompts: PromptTemplates,
}

impl GeminiClient {
    pub fn new(config: &ServiceConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AtsMatchError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            prompts: PromptTemplates::default(),
        })
    }

    /// Send one prompt through `generateContent` and return the model's
    /// answer text.
    async fn generate_content(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!("Calling Gemini model {}", self.model);
        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(AtsMatchError::ServiceUnavailable(format!(
                "Gemini API returned {}",
                response.status()
            )));
        }

        let payload: Value = response.json().await?;
        let text = payload
            .get("candidates")
            .and_then(|c| c.get(0))
            .and_then(|c| c.pointer("/content/parts/0/text"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                AtsMatchError::ServiceUnavailable(
                    "Gemini response contained no answer text".to_string(),
                )
            })?;

        Ok(text.to_string())
    }
}

impl SemanticService for GeminiClient {
    async fn extract_keywords(&self, text: &str) -> Result<String> {
        let prompt = self.prompts.render_keyword_extraction(text);
        self.generate_content(&prompt).await
    }

    async fn find_soft_matches(&self, resume: &KeywordSet, job: &KeywordSet) -> Result<String> {
        let prompt = self.prompts.render_soft_match(resume, job);
        self.generate_content(&prompt).await
    }
}
