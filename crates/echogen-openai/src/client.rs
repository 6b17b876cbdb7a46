use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::debug;

use crate::{
    api_v1::{ChatCompletionRequest, ChatCompletionResponse},
    error::OpenAiError,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Every request is bounded so one hanging call cannot stall the
/// orchestrator's whole fallback chain.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Minimal HTTP client for OpenAI's *chat/completions* endpoint.
///
/// * Non-streaming only (one request, one response).
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `OpenAiClient` is cheap.
#[derive(Clone)]
pub struct OpenAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl OpenAiClient {
    /// Convenience constructor building a default `reqwest` client with the
    /// default request timeout and Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT, None)
    }

    /// Build with an explicit request timeout and optional base URL
    /// (self-hosted gateways, proxies).
    pub fn with_timeout(
        api_key: impl Into<String>,
        timeout: Duration,
        base_url: Option<String>,
    ) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, base_url)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(api_key: impl Into<String>, http: HttpClient, base_url: Option<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, OpenAiError> {
        let url = format!("{}/chat/completions", self.base);
        debug!(model = %request.model, "posting chat completion");

        let resp = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OpenAiError::Api { status, body });
        }

        let bytes = resp.bytes().await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}
