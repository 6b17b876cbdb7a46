use std::{env, sync::Arc, time::Duration};

use echogen_core::error::{CoreError, Result};

use crate::client::{OpenAiClient, DEFAULT_TIMEOUT};

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value
/// implementing [`echogen_core::provider::GenerationProvider`].
///
/// The type itself purposefully exposes **no additional methods**: all
/// user-facing functionality sits on the generic
/// [`echogen_core::Orchestrator`] once the adapter is plugged in.
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

impl std::fmt::Debug for OpenAiAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiAdapter").finish_non_exhaustive()
    }
}

/// Builder for [`OpenAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use echogen_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor loading `OPENAI_API_KEY` and, when present,
    /// `OPENAI_API_BASE` from the environment.
    ///
    /// Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            base_url: env::var("OPENAI_API_BASE").ok(),
            timeout: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a compatible non-default endpoint.
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

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// [`CoreError::Configuration`] if the API key is missing.
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self.api_key.ok_or_else(|| {
            CoreError::Configuration("missing env variable: `OPENAI_API_KEY`".into())
        })?;

        let client = OpenAiClient::with_timeout(
            api_key,
            self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            self.base_url,
        );

        Ok(OpenAiAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_api_key_is_a_configuration_error() {
        let err = OpenAiAdapterBuilder::new().build().unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }
}
