//! Pairing of a rendered prompt with the task type that should generate it.

use echogen_core::task::TaskType;

/// A ready-to-send prompt plus its routing tag.
///
/// Section builders emit these so callers never pass a prompt to the
/// orchestrator with the wrong task type attached.
#[derive(Debug, Clone)]
pub struct TaskPrompt {
    pub task: TaskType,
    pub text: String,
}

impl TaskPrompt {
    pub fn new(task: TaskType, text: impl Into<String>) -> Self {
        Self {
            task,
            text: text.into(),
        }
    }
}
