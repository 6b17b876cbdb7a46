//! Ergonomic helpers for composing prompt text for the echogen orchestrator.

pub mod builder;
pub mod task_prompt;

pub use builder::PromptBuilder;
pub use task_prompt::TaskPrompt;
