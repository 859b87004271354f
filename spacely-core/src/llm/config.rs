//! Gateway configuration from environment variables.

use std::env;

use super::LlmError;

/// Default AI gateway base URL (OpenAI-compatible).
pub const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev/v1";

/// Default model routed through the gateway.
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// AI gateway client configuration.
///
/// Loaded once at startup and injected into the provider; request handling
/// never reads the environment.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bearer credential for the gateway.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `LOVABLE_API_KEY`: gateway credential
    ///
    /// Optional:
    /// - `SPACELY_AI_MODEL` (default: "google/gemini-2.5-flash")
    /// - `SPACELY_AI_BASE_URL` (default: "https://ai.gateway.lovable.dev/v1")
    pub fn from_env() -> Result<Self, LlmError> {
        let api_key = env::var("LOVABLE_API_KEY")
            .map_err(|_| LlmError::NotConfigured("LOVABLE_API_KEY not set".to_string()))?;

        let model = env::var("SPACELY_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("SPACELY_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            model,
            base_url,
        })
    }

    /// Build a configuration with explicit values (tests, embedding).
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
        }
    }
}
