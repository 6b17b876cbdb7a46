//! OpenAI backend adapter for the echogen generation orchestrator.
//!
//! The crate is a thin translation layer: it maps a
//! [`GenerationCall`](echogen_core::provider::GenerationCall) onto the
//! *chat/completions* wire format, performs one bounded, non-streaming HTTP
//! round-trip and hands the raw text back to the orchestrator. Retry,
//! validation and fallback decisions all live upstream in `echogen-core`.

mod adapter;
mod provider_impl;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::{OpenAiClient, DEFAULT_TIMEOUT};
