//! Heuristic acceptance check for generated text.
//!
//! This is a coarse topicality and sanity filter, **not** semantic
//! validation: a passing text is plausibly on-topic and long enough to be
//! useful, nothing more. The checks run in a fixed order and the function is
//! pure, so the same input always yields the same verdict.

use crate::task::TaskType;

/// Anything shorter than this is treated as truncated or degenerate output.
pub const MIN_ACCEPTED_LEN: usize = 50;

/// Explicit error marker some runtimes echo into their own output.
const ERROR_MARKER: &str = "[error]";

/// More mentions of "failed" than this and the model is probably describing
/// its own failure rather than the requested content.
const MAX_FAILED_MENTIONS: usize = 2;

/// Topical keyword a task's output must contain, if any.
fn required_keyword(task: &TaskType) -> Option<&'static str> {
    match task.as_str() {
        "technical" => Some("implementation"),
        "design" => Some("design"),
        "ux" => Some("user"),
        "content" => Some("content"),
        "functionality" => Some("feature"),
        _ => None,
    }
}

/// Accept or reject a candidate output for `task`.
pub fn is_acceptable(text: &str, task: &TaskType) -> bool {
    if text.trim().len() < MIN_ACCEPTED_LEN {
        return false;
    }

    let lowered = text.to_lowercase();

    if let Some(keyword) = required_keyword(task) {
        if !lowered.contains(keyword) {
            return false;
        }
    }

    if lowered.contains(ERROR_MARKER) {
        return false;
    }
    if lowered.matches("failed").count() > MAX_FAILED_MENTIONS {
        return false;
    }

    true
}
