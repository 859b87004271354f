//! AI gateway provider (OpenAI-compatible chat completions).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ChatProvider, GatewayConfig, LlmError};
use crate::types::{ChatMessage, Role};

/// Fallback reply when the gateway returns no usable content.
const EMPTY_COMPLETION_FALLBACK: &str =
    "Maaf, saya tidak dapat memproses permintaan Anda saat ini.";

/// Chat provider backed by the Lovable AI gateway.
#[derive(Debug)]
pub struct GatewayProvider {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl GatewayProvider {
    /// Create a provider with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

/// Gateway request format.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for WireMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        let role = match msg.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role,
            content: &msg.content,
        }
    }
}

/// Gateway response format.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl ChatProvider for GatewayProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: &self.config.model,
            messages: messages.iter().map(WireMessage::from).collect(),
            stream: false,
        };

        let url = format!("{}/chat/completions", self.config.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(LlmError::RateLimited);
        }
        if status == 402 {
            return Err(LlmError::PaymentRequired);
        }

        let body = response
            .text()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::error!(status = status, body = %body, "AI gateway error");
            return Err(LlmError::ApiError {
                status,
                message: body,
            });
        }

        let response: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::ParseError(e.to_string()))?;

        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string());

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gateway"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
