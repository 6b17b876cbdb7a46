//! Generation orchestrator: cache check, ordered candidate iteration,
//! validation, statistics and graceful exhaustion.
//!
//! The orchestrator is **generic over the backend type `B`**, so one
//! implementation serves hosted APIs and local runtimes alike. Its contract
//! towards callers is deliberately absolute: [`Orchestrator::generate`]
//! never fails. Every backend error and every validator rejection is
//! absorbed into the fallback chain, and total exhaustion degrades to a
//! static template instead of an error. The one place this crate *does*
//! fail loudly is registry construction, where configuration defects belong.
//!
//! Per call the candidate order is: the preferred model for the task type,
//! then historically successful models (best validated success rate first),
//! then every remaining registered model. Each model is tried at most once.
//!
//! Shared state (performance counters, prompt cache) is mutex-guarded, so an
//! orchestrator instance can sit behind a multi-threaded server.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::cache::{CacheKey, PromptCache};
use crate::fallback::fallback_for;
use crate::model::ModelId;
use crate::params::{parameters_for, GenerationParameters};
use crate::provider::{GenerationCall, GenerationProvider};
use crate::registry::ModelRegistry;
use crate::stats::PerformanceTracker;
use crate::task::TaskType;
use crate::validate::is_acceptable;

/// Cost/latency cap on ensemble fan-out.
const MAX_ENSEMBLE_MODELS: usize = 2;

/// Fallback-driven generation client bound to a single backend.
pub struct Orchestrator<B> {
    backend: Arc<B>,
    registry: ModelRegistry,
    tracker: PerformanceTracker,
    cache: Mutex<PromptCache>,
}

impl<B> Orchestrator<B>
where
    B: GenerationProvider,
{
    /// Create an orchestrator with the default cache capacity.
    pub fn new(backend: B, registry: ModelRegistry) -> Self {
        Self::with_cache_capacity(backend, registry, PromptCache::DEFAULT_CAPACITY)
    }

    /// Create an orchestrator with an explicit result-cache capacity.
    pub fn with_cache_capacity(backend: B, registry: ModelRegistry, capacity: usize) -> Self {
        Self {
            backend: Arc::new(backend),
            registry,
            tracker: PerformanceTracker::new(),
            cache: Mutex::new(PromptCache::new(capacity)),
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Read access to the per-(task, model) success statistics.
    pub fn tracker(&self) -> &PerformanceTracker {
        &self.tracker
    }

    /// Generate text for `prompt` using the single-model fallback chain.
    /// Never fails; worst case returns the task's static fallback template.
    pub async fn generate(&self, prompt: &str, task: &TaskType) -> String {
        self.generate_with(prompt, task, false).await
    }

    /// Generate text, optionally through the multi-model ensemble path for
    /// ensemble-eligible task types.
    pub async fn generate_with(&self, prompt: &str, task: &TaskType, use_ensemble: bool) -> String {
        let key = CacheKey::new(prompt, task, use_ensemble);
        if let Some(hit) = self.cache_get(&key) {
            debug!(task = %task, "prompt cache hit");
            return hit;
        }

        if use_ensemble && self.registry.has_ensemble(task) {
            return self.generate_ensemble(prompt, task).await;
        }

        match self.try_candidates(prompt, task).await {
            Some(text) => {
                self.cache_put(key, &text);
                text
            }
            None => {
                warn!(task = %task, "all model candidates exhausted, serving fallback template");
                fallback_for(task).to_owned()
            }
        }
    }

    /// Ensemble path: query up to [`MAX_ENSEMBLE_MODELS`] models from the
    /// task's profile and merge the accepted outputs. Falls back to the
    /// single-model chain when nothing is accepted.
    pub async fn generate_ensemble(&self, prompt: &str, task: &TaskType) -> String {
        let key = CacheKey::new(prompt, task, true);
        if let Some(hit) = self.cache_get(&key) {
            debug!(task = %task, "prompt cache hit (ensemble)");
            return hit;
        }

        let parameters = parameters_for(task);
        let mut accepted = Vec::new();
        for model in self
            .registry
            .ensemble_models(task)
            .into_iter()
            .take(MAX_ENSEMBLE_MODELS)
        {
            if let Some(text) = self.attempt(&model, prompt, task, parameters).await {
                accepted.push(text);
            }
        }

        if let Some(text) = merge_outputs(accepted) {
            self.cache_put(key, &text);
            return text;
        }

        debug!(task = %task, "ensemble produced no accepted output, using single-model chain");
        match self.try_candidates(prompt, task).await {
            Some(text) => {
                self.cache_put(key, &text);
                text
            }
            None => {
                warn!(task = %task, "all model candidates exhausted, serving fallback template");
                fallback_for(task).to_owned()
            }
        }
    }

    /// Ordered, de-duplicated candidate list: preferred model first, then
    /// performance-ranked history, then the remaining registered models.
    fn candidate_order(&self, task: &TaskType) -> Vec<ModelId> {
        let mut order = vec![self.registry.model_for_task(task).clone()];
        for model in self.tracker.ordered_candidates(task) {
            if !order.contains(&model) {
                order.push(model);
            }
        }
        for model in self.registry.models() {
            if !order.contains(model) {
                order.push(model.clone());
            }
        }
        order
    }

    /// Walk the candidate list until one output passes validation.
    async fn try_candidates(&self, prompt: &str, task: &TaskType) -> Option<String> {
        let parameters = parameters_for(task);
        for model in self.candidate_order(task) {
            if let Some(text) = self.attempt(&model, prompt, task, parameters).await {
                return Some(text);
            }
        }
        None
    }

    /// One generation attempt against one model. Backend errors and
    /// validator rejections both count as failures for routing purposes.
    async fn attempt(
        &self,
        model: &ModelId,
        prompt: &str,
        task: &TaskType,
        parameters: GenerationParameters,
    ) -> Option<String> {
        let call = GenerationCall::new(model.clone(), prompt, parameters);
        match self.backend.invoke(call).await {
            Ok(text) if is_acceptable(&text, task) => {
                self.tracker.record(task, model, true);
                debug!(task = %task, model = %model, "candidate accepted");
                Some(text)
            }
            Ok(_) => {
                self.tracker.record(task, model, false);
                debug!(task = %task, model = %model, "candidate rejected by validator");
                None
            }
            Err(err) => {
                self.tracker.record(task, model, false);
                debug!(task = %task, model = %model, error = %err, "backend invocation failed");
                None
            }
        }
    }

    fn cache_get(&self, key: &CacheKey) -> Option<String> {
        self.cache.lock().expect("cache mutex poisoned").get(key)
    }

    fn cache_put(&self, key: CacheKey, text: &str) {
        self.cache
            .lock()
            .expect("cache mutex poisoned")
            .insert(key, text.to_owned());
    }
}

/// Merge policy for ensemble outputs: keep the longest accepted text.
///
/// Intentionally simple; the one guarantee callers may rely on is that the
/// result is one of the accepted candidates.
fn merge_outputs(candidates: Vec<String>) -> Option<String> {
    candidates.into_iter().max_by_key(|text| text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_picks_the_longest_candidate() {
        let merged = merge_outputs(vec!["short".into(), "much longer text".into()]);
        assert_eq!(merged.as_deref(), Some("much longer text"));
    }

    #[test]
    fn merge_of_nothing_is_none() {
        assert!(merge_outputs(Vec::new()).is_none());
    }
}
