//! Ollama backend adapter for the echogen generation orchestrator.
//!
//! Targets a locally running Ollama server through its non-streaming
//! `/api/generate` endpoint and exposes `/api/tags` as an availability and
//! model-discovery probe. Like the OpenAI adapter, this crate only
//! translates; retries, validation and fallback live in `echogen-core`.

mod adapter;
pub mod api;
mod client;
pub mod error;

pub use adapter::{OllamaAdapter, OllamaAdapterBuilder};
pub use client::{OllamaClient, DEFAULT_TIMEOUT};
