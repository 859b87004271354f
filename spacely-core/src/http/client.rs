//! HTTP client trait and implementations.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::FetchError;

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch text content from a URL.
    ///
    /// Non-success statuses are errors; callers treat any failure here as
    /// fatal for the current request.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Configuration for [`FetchClient`].
#[derive(Clone)]
pub struct FetchClientBuilder {
    timeout: Duration,
    user_agent: String,
}

impl Default for FetchClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClientBuilder {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Mozilla/5.0 (compatible; Spacely/1.0)".to_string(),
        }
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FetchClient, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()?;
        Ok(FetchClient { inner })
    }
}

/// Real HTTP client backed by reqwest.
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
}

impl FetchClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self, reqwest::Error> {
        FetchClientBuilder::new().build()
    }
}

#[async_trait]
impl HttpClient for FetchClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url = url, "fetching");
        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Canned response for [`MockClient`].
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Successful text body.
    Text(String),
    /// HTTP error status.
    Status(u16),
    /// Transport-level failure.
    Error(String),
}

/// Mock HTTP client for tests. Responses are keyed by exact URL.
#[derive(Debug, Default)]
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add a text response for a URL.
    pub fn with_text(self, url: &str, body: &str) -> Self {
        self.with_response(url, MockResponse::Text(body.to_string()))
    }

    /// Add an error status for a URL.
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// Add a transport error for a URL.
    pub fn with_error(self, url: &str, error: &str) -> Self {
        self.with_response(url, MockResponse::Error(error.to_string()))
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        match self.responses.get(url) {
            Some(MockResponse::Text(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(FetchError::Status {
                status: *status,
                url: url.to_string(),
            }),
            Some(MockResponse::Error(e)) => Err(FetchError::InvalidUrl(e.clone())),
            None => Err(FetchError::InvalidUrl(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
