//! Fake chat provider for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::{ChatProvider, LlmError};
use crate::types::ChatMessage;

/// A fake provider for testing.
///
/// Responses are matched by checking whether any message in the conversation
/// contains a registered substring (case-insensitive). Without a match, the
/// default response is returned, or an error when none is set.
#[derive(Debug)]
pub struct FakeProvider {
    responses: RwLock<HashMap<String, String>>,
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("Baik, saya bantu carikan furniture-nya!".to_string()),
        }
    }
}

impl FakeProvider {
    /// Create a provider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a provider returning `response` for conversations mentioning a
    /// substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Register a response for conversations containing a substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl ChatProvider for FakeProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        let conversation = messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        for (pattern, response) in responses.iter() {
            if conversation.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(
                "FakeProvider: no response configured for conversation".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
