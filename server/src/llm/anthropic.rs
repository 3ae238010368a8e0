//! Anthropic Messages API client.
//!
//! Thin HTTP wrapper for `/v1/messages`. Pure parsing in `parse_response`
//! for testability; prompt text and slide extraction live in
//! [`super::prompt`].

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod anthropic_test;

use std::time::Duration;

use async_trait::async_trait;
use canvas::slide::Slide;

use super::config::LlmConfig;
use super::prompt;
use super::types::{LlmError, SlideGenerator};

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 8192;

// =============================================================================
// CLIENT
// =============================================================================

pub struct AnthropicClient {
    http: reqwest::Client,
    config: LlmConfig,
}

impl AnthropicClient {
    /// # Errors
    ///
    /// Returns [`LlmError::HttpClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// One system + user exchange, returning the response's text content.
    async fn complete(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let body = ApiRequest {
            model: &self.config.model,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![ApiMessage { role: "user", content: user }],
        };

        let response = self
            .http
            .post(API_URL)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", API_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

#[async_trait]
impl SlideGenerator for AnthropicClient {
    async fn generate(&self, topic: &str, count: u32, tone: &str) -> Result<Vec<Slide>, LlmError> {
        let raw = self
            .complete(
                prompt::GENERATION_SYSTEM_PROMPT,
                &prompt::generation_user_prompt(topic, count, tone),
            )
            .await?;
        prompt::extract_slides(&raw)
    }

    async fn edit(&self, html: &str, instruction: &str) -> Result<String, LlmError> {
        let raw = self
            .complete(
                prompt::EDIT_SYSTEM_PROMPT,
                &prompt::edit_user_prompt(html, instruction),
            )
            .await?;
        prompt::extract_fragment(&raw)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    content: Vec<ContentBlock>,
}

#[derive(serde::Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    /// Any unrecognized block type (tool use, thinking) — skipped.
    #[serde(other)]
    Unknown,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str) -> Result<String, LlmError> {
    let api: ApiResponse =
        serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    let text = api
        .content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::Unknown => None,
        })
        .collect::<Vec<_>>()
        .join("\n");

    if text.is_empty() {
        return Err(LlmError::ApiParse("no text content in response".into()));
    }
    Ok(text)
}
