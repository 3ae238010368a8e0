//! Generator configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use super::types::LlmError;

pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default number of slides per generated deck.
pub const DEFAULT_SLIDE_COUNT: u32 = 5;

/// Default design tone passed to the generator.
pub const DEFAULT_TONE: &str = "professional, clean, and modern";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl LlmConfig {
    /// Build typed generator config from environment variables.
    ///
    /// Required:
    /// - `LLM_API_KEY`
    ///
    /// Optional:
    /// - `LLM_MODEL`: provider default when absent
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 120
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] when `LLM_API_KEY` is unset and
    /// [`LlmError::ConfigParse`] when a timeout override is not a number.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_parts(
            std::env::var("LLM_API_KEY").ok(),
            std::env::var("LLM_MODEL").ok(),
            std::env::var("LLM_REQUEST_TIMEOUT_SECS").ok(),
            std::env::var("LLM_CONNECT_TIMEOUT_SECS").ok(),
        )
    }

    /// Pure constructor behind [`LlmConfig::from_env`], testable without
    /// touching the process environment.
    pub fn from_parts(
        api_key: Option<String>,
        model: Option<String>,
        request_timeout: Option<String>,
        connect_timeout: Option<String>,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.ok_or(LlmError::MissingApiKey { var: "LLM_API_KEY".into() })?;
        Ok(Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            request_timeout_secs: parse_secs(request_timeout, DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_timeout_secs: parse_secs(connect_timeout, DEFAULT_CONNECT_TIMEOUT_SECS)?,
        })
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> Result<u64, LlmError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| LlmError::ConfigParse(format!("invalid timeout: {value}"))),
    }
}
