//! Process-lifetime success statistics per (task type, model).
//!
//! The tracker feeds the orchestrator's candidate ordering: models that
//! historically validated well for a task are tried before the rest. Counters
//! live only as long as the tracker and are never persisted.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::ModelId;
use crate::task::TaskType;

/// Attempt/success counters for one (task, model) pair.
///
/// `success_rate` is recomputed on every update, never set independently, so
/// `success_rate == successes / attempts` holds whenever `attempts > 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModelStats {
    pub attempts: u64,
    pub successes: u64,
    pub success_rate: f64,
}

/// Mutex-guarded map task → per-model counters.
///
/// Per-task entries are kept in a `Vec` in first-seen order, so candidate
/// ordering stays stable across models with equal success rates.
#[derive(Debug, Default)]
pub struct PerformanceTracker {
    inner: Mutex<HashMap<TaskType, Vec<(ModelId, ModelStats)>>>,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one generation attempt. Lazily initialises the
    /// counters for a previously unseen (task, model) pair.
    pub fn record(&self, task: &TaskType, model: &ModelId, success: bool) {
        let mut inner = self.inner.lock().expect("tracker mutex poisoned");
        let entries = inner.entry(task.clone()).or_default();

        let idx = match entries.iter().position(|(id, _)| id == model) {
            Some(idx) => idx,
            None => {
                entries.push((model.clone(), ModelStats::default()));
                entries.len() - 1
            }
        };

        let stats = &mut entries[idx].1;
        stats.attempts += 1;
        if success {
            stats.successes += 1;
        }
        stats.success_rate = stats.successes as f64 / stats.attempts as f64;
    }

    /// Models previously attempted for `task`, best success rate first.
    /// Ties keep first-seen order. No history yields an empty list.
    pub fn ordered_candidates(&self, task: &TaskType) -> Vec<ModelId> {
        let inner = self.inner.lock().expect("tracker mutex poisoned");
        let Some(entries) = inner.get(task) else {
            return Vec::new();
        };

        let mut ranked: Vec<(ModelId, f64)> = entries
            .iter()
            .map(|(id, stats)| (id.clone(), stats.success_rate))
            .collect();
        // sort_by is stable, preserving insertion order for equal rates.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().map(|(id, _)| id).collect()
    }

    /// Current counters for one pair, if any attempt was recorded.
    pub fn stats(&self, task: &TaskType, model: &ModelId) -> Option<ModelStats> {
        let inner = self.inner.lock().expect("tracker mutex poisoned");
        inner
            .get(task)?
            .iter()
            .find(|(id, _)| id == model)
            .map(|(_, stats)| *stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_recomputed_on_every_record() {
        let tracker = PerformanceTracker::new();
        let task = TaskType::TECHNICAL;
        let model = ModelId::from("gpt-4.1-mini");

        tracker.record(&task, &model, true);
        tracker.record(&task, &model, false);
        tracker.record(&task, &model, true);

        let stats = tracker.stats(&task, &model).unwrap();
        assert_eq!(stats.attempts, 3);
        assert_eq!(stats.successes, 2);
        assert!((stats.success_rate - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ordering_prefers_higher_success_rate() {
        let tracker = PerformanceTracker::new();
        let task = TaskType::DESIGN;
        let weak = ModelId::from("model-a");
        let strong = ModelId::from("model-b");

        tracker.record(&task, &weak, false);
        tracker.record(&task, &strong, true);
        tracker.record(&task, &strong, true);

        assert_eq!(tracker.ordered_candidates(&task), vec![strong, weak]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let tracker = PerformanceTracker::new();
        let task = TaskType::CONTENT;
        let first = ModelId::from("first");
        let second = ModelId::from("second");

        tracker.record(&task, &first, true);
        tracker.record(&task, &second, true);

        assert_eq!(tracker.ordered_candidates(&task), vec![first, second]);
    }

    #[test]
    fn no_history_is_empty_not_an_error() {
        let tracker = PerformanceTracker::new();
        assert!(tracker.ordered_candidates(&TaskType::new("never_seen")).is_empty());
        assert!(tracker
            .stats(&TaskType::DEFAULT, &ModelId::from("nobody"))
            .is_none());
    }
}
