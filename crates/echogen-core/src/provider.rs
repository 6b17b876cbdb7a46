//! The backend seam: one trait a provider crate implements to plug into the
//! orchestrator.
//!
//! A **generation backend** turns a prompt into a network call against a
//! concrete runtime (OpenAI, Ollama, …) and returns plain text. The trait is
//! intentionally minimal:
//!
//! * **One method** – `invoke`, a single non-streaming round-trip.
//! * **Typed failure** – any transport or provider error surfaces as
//!   [`CoreError`](crate::error::CoreError) and is absorbed by the
//!   orchestrator's fallback chain, never by the caller.
//!
//! The method returns a [`Pin<Box<dyn Future>>`] so the trait stays
//! object-safe without pulling in `async_trait`.

use std::{future::Future, pin::Pin};

use crate::{error::Result, model::ModelId, params::GenerationParameters};

/// Everything a backend needs for one generation attempt.
#[derive(Debug, Clone)]
pub struct GenerationCall {
    pub model: ModelId,
    pub prompt: String,
    pub parameters: GenerationParameters,
}

impl GenerationCall {
    pub fn new(model: ModelId, prompt: impl Into<String>, parameters: GenerationParameters) -> Self {
        Self {
            model,
            prompt: prompt.into(),
            parameters,
        }
    }
}

/// A backend capable of executing a [`GenerationCall`].
///
/// Implementations must bound the call with a request timeout so one slow
/// candidate cannot starve the whole fallback chain.
pub trait GenerationProvider: Send + Sync {
    /// Execute a single generation round-trip and return the raw text.
    fn invoke<'p>(
        &'p self,
        call: GenerationCall,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>;
}
