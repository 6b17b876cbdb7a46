use std::{env, future::Future, pin::Pin, sync::Arc, time::Duration};

use echogen_core::{
    error::Result,
    provider::{GenerationCall, GenerationProvider},
};

use crate::{
    api::GenerateRequest,
    client::{OllamaClient, DEFAULT_TIMEOUT},
    error::OllamaError,
};

/// Wires the HTTP client [`OllamaClient`] into a value implementing
/// [`GenerationProvider`], so a local Ollama install can serve as the
/// orchestrator's backend.
pub struct OllamaAdapter {
    client: Arc<OllamaClient>,
}

impl OllamaAdapter {
    /// Whether the configured server currently responds.
    pub async fn is_available(&self) -> bool {
        self.client.is_available().await
    }

    /// Names of the models pulled on the server, useful for building a
    /// registry that matches the actual deployment.
    ///
    /// # Errors
    ///
    /// Any transport failure, forwarded as [`OllamaError`].
    pub async fn installed_models(&self) -> std::result::Result<Vec<String>, OllamaError> {
        self.client.list_models().await
    }
}

impl GenerationProvider for OllamaAdapter {
    fn invoke<'p>(
        &'p self,
        call: GenerationCall,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request = GenerateRequest::from(call);
            let response = client.generate(request).await?;

            if !response.done {
                return Err(OllamaError::Format("generation did not complete".into()).into());
            }
            Ok(response.response)
        })
    }
}

/// Builder for [`OllamaAdapter`].
///
/// ```rust,no_run
/// use echogen_ollama::OllamaAdapterBuilder;
///
/// let backend = OllamaAdapterBuilder::new_from_env().build();
/// ```
#[derive(Default)]
pub struct OllamaAdapterBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl OllamaAdapterBuilder {
    /// Create a builder targeting the default local server.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor honouring `OLLAMA_HOST` when set.
    pub fn new_from_env() -> Self {
        Self {
            base_url: env::var("OLLAMA_HOST").ok(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout; a slow candidate past this deadline counts as a
    /// failed attempt in the orchestrator.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder. Infallible: a missing host falls back to the
    /// default local address, and reachability is a runtime concern probed
    /// via [`OllamaAdapter::is_available`].
    pub fn build(self) -> OllamaAdapter {
        let base = self
            .base_url
            .unwrap_or_else(|| OllamaClient::default_base_url().to_owned());
        let client = OllamaClient::with_timeout(base, self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        OllamaAdapter {
            client: Arc::new(client),
        }
    }
}
