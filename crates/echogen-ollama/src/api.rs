//! Wire structs for Ollama's `/api/generate` endpoint, non-streaming only.

use echogen_core::provider::GenerationCall;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

/// Sampling options; Ollama calls the output budget `num_predict`.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct GenerateOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub num_predict: u32,
}

impl From<GenerationCall> for GenerateRequest {
    fn from(call: GenerationCall) -> Self {
        Self {
            model: call.model.as_str().to_owned(),
            prompt: call.prompt,
            stream: false,
            options: Some(GenerateOptions {
                temperature: call.parameters.temperature,
                top_p: call.parameters.top_p,
                num_predict: call.parameters.max_tokens,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub model: String,
    pub response: String,
    pub done: bool,
    pub prompt_eval_count: Option<u64>,
    pub eval_count: Option<u64>,
    pub total_duration: Option<u64>,
}

/// Subset of `/api/tags` used for the availability probe.
#[derive(Debug, Deserialize)]
pub struct TagsResponse {
    pub models: Vec<TaggedModel>,
}

#[derive(Debug, Deserialize)]
pub struct TaggedModel {
    pub name: String,
}
