//! Sampling parameters, derived deterministically from the task type.
//!
//! Three buckets override a base default: technical-like tasks sample close
//! to greedy, creative-like tasks sample wide, analytical tasks sit in the
//! middle but get the largest output budget. Everything else receives the
//! base default, so the function is total.

use crate::task::TaskType;

/// Sampling knobs passed to the generation backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

/// Base default applied to any task type without a bucket override.
pub const BASE_PARAMETERS: GenerationParameters = GenerationParameters {
    temperature: 0.7,
    top_p: 0.9,
    max_tokens: 1500,
};

/// Select sampling parameters for `task`. Pure and total.
pub fn parameters_for(task: &TaskType) -> GenerationParameters {
    match task.as_str() {
        // Technical-like: deterministic, with room for long listings.
        "technical" | "code_generation" | "structured_output" => GenerationParameters {
            temperature: 0.3,
            top_p: 0.8,
            max_tokens: 2048,
        },
        // Creative-like: wide sampling.
        "design" | "content" | "ux" => GenerationParameters {
            temperature: 0.9,
            top_p: 0.95,
            max_tokens: 1500,
        },
        // Analytical: middle temperature, longest budget.
        "analysis" | "functionality" => GenerationParameters {
            temperature: 0.5,
            top_p: 0.9,
            max_tokens: 3072,
        },
        _ => BASE_PARAMETERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_calls_are_identical() {
        for name in ["technical", "design", "analysis", "default", "made_up"] {
            let task = TaskType::new(name);
            assert_eq!(parameters_for(&task), parameters_for(&task));
        }
    }

    #[test]
    fn buckets_diverge_from_base() {
        let technical = parameters_for(&TaskType::TECHNICAL);
        let creative = parameters_for(&TaskType::DESIGN);
        let analytical = parameters_for(&TaskType::ANALYSIS);

        assert!(technical.temperature < BASE_PARAMETERS.temperature);
        assert!(creative.temperature > BASE_PARAMETERS.temperature);
        assert!(analytical.max_tokens > technical.max_tokens);
        assert!(analytical.max_tokens > creative.max_tokens);
    }

    #[test]
    fn unknown_task_gets_base_default() {
        assert_eq!(parameters_for(&TaskType::new("frobnicate")), BASE_PARAMETERS);
        assert_eq!(parameters_for(&TaskType::QUICK_TASKS), BASE_PARAMETERS);
    }
}
