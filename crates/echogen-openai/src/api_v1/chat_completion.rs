//! Wire structs for the *chat/completions* endpoint, reduced to the
//! non-streaming, text-only subset the orchestrator needs.

use echogen_core::provider::GenerationCall;
use serde::{Deserialize, Serialize};

use super::common;

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl From<GenerationCall> for ChatCompletionRequest {
    fn from(call: GenerationCall) -> Self {
        Self {
            model: call.model.as_str().to_owned(),
            messages: vec![ChatCompletionMessage {
                role: MessageRole::User,
                content: call.prompt,
            }],
            temperature: Some(call.parameters.temperature),
            top_p: Some(call.parameters.top_p),
            max_tokens: Some(call.parameters.max_tokens),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
    Tool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponseMessage {
    pub role: MessageRole,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionResponseMessage,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: Option<common::Usage>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
}

#[cfg(test)]
mod tests {
    use super::*;
    use echogen_core::params::parameters_for;
    use echogen_core::{ModelId, TaskType};

    #[test]
    fn request_carries_model_prompt_and_sampling_knobs() {
        let call = GenerationCall::new(
            ModelId::from("gpt-4.1-mini"),
            "Describe the layout",
            parameters_for(&TaskType::TECHNICAL),
        );
        let request = ChatCompletionRequest::from(call);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["model"], "gpt-4.1-mini");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Describe the layout");
        assert_eq!(value["max_tokens"], 2048);
    }

    #[test]
    fn response_with_missing_optional_fields_deserialises() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "model": "gpt-4.1-mini",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "hello"}, "finish_reason": "stop"}
            ]
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
        assert!(parsed.usage.is_none());
    }
}
