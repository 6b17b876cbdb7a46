use std::time::Duration;

use reqwest::Client as HttpClient;
use tracing::debug;

use crate::{
    api::{GenerateRequest, GenerateResponse, TagsResponse},
    error::OllamaError,
};

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Local models can be slow on first load; still bounded so a wedged server
/// cannot stall the fallback chain indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Minimal HTTP client for a local Ollama server.
#[derive(Clone)]
pub struct OllamaClient {
    http: HttpClient,
    base: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .expect("building reqwest client");

        Self {
            http,
            base: base_url.into(),
        }
    }

    pub fn default_base_url() -> &'static str {
        DEFAULT_BASE_URL
    }

    /// Perform a **non-streaming** generation round-trip.
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, OllamaError> {
        let url = format!("{}/api/generate", self.base);
        debug!(model = %request.model, "posting generate request");

        let resp = self.http.post(url).json(&request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OllamaError::Api { status, body });
        }

        let parsed: GenerateResponse = resp.json().await?;
        Ok(parsed)
    }

    /// List locally pulled models. Doubles as a health probe.
    pub async fn list_models(&self) -> Result<Vec<String>, OllamaError> {
        let url = format!("{}/api/tags", self.base);
        let resp = self.http.get(url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(OllamaError::Api { status, body });
        }

        let parsed: TagsResponse = resp.json().await?;
        Ok(parsed.models.into_iter().map(|m| m.name).collect())
    }

    /// Whether the server answers at all.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base);
        match self.http.get(url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
