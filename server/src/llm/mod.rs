//! Generative backend — the Anthropic client behind a provider-neutral seam.
//!
//! DESIGN
//! ======
//! The editor treats generation as two opaque calls: topic in, slides out;
//! fragment plus instruction in, fragment out. [`types::SlideGenerator`] is
//! the seam routes depend on; the Anthropic Messages client is the provider
//! wired in. Prompt text and response extraction live in [`prompt`] as pure
//! functions so they are testable without the network.

pub mod anthropic;
pub mod config;
pub mod prompt;
pub mod types;

use types::LlmError;

/// Build the default generator from environment variables.
///
/// # Errors
///
/// Returns an error if the API key is missing or the HTTP client cannot be
/// constructed.
pub fn client_from_env() -> Result<anthropic::AnthropicClient, LlmError> {
    let config = config::LlmConfig::from_env()?;
    anthropic::AnthropicClient::new(config)
}
