//! LLM provider abstraction for the chat assistant.
//!
//! A trait-based abstraction over the AI gateway so the composer can be
//! exercised in tests without network access. The real provider talks to an
//! OpenAI-compatible chat-completions endpoint.

mod config;
mod fake;
mod gateway;

pub use config::{GatewayConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use fake::FakeProvider;
pub use gateway::GatewayProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::types::ChatMessage;

/// Error type for LLM operations. Display strings double as user-facing
/// error text, hence the Indonesian wording on the service-side failures.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Gagal menghubungi layanan AI")]
    RequestFailed(String),

    #[error("Gagal menghubungi layanan AI")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limit exceeded. Silakan coba lagi dalam beberapa saat.")]
    RateLimited,

    #[error("Layanan AI memerlukan top-up. Silakan hubungi administrator.")]
    PaymentRequired,

    #[error("AI service not configured")]
    NotConfigured(String),
}

/// Trait for chat-completion providers.
///
/// Implementations are stateless and thread-safe; one outbound call per
/// invocation, no retries.
#[async_trait]
pub trait ChatProvider: Send + Sync + fmt::Debug {
    /// Send a conversation to the model and get its text reply.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;

    /// Provider name (e.g., "gateway", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g., "google/gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment configuration.
///
/// - `SPACELY_AI_PROVIDER`: "gateway" (default) | "fake"
/// - `LOVABLE_API_KEY`: gateway credential (required for "gateway")
/// - `SPACELY_AI_MODEL`, `SPACELY_AI_BASE_URL`: optional overrides
pub fn create_provider_from_env() -> Result<Box<dyn ChatProvider>, LlmError> {
    let provider =
        std::env::var("SPACELY_AI_PROVIDER").unwrap_or_else(|_| "gateway".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "gateway" => {
            let config = GatewayConfig::from_env()?;
            Ok(Box::new(GatewayProvider::new(config)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
