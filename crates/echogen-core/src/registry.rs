//! Model registry: binds roles to concrete models, tasks to roles, and
//! complex tasks to ensemble profiles.
//!
//! The registry is read-only after construction. [`ModelRegistryBuilder::build`]
//! validates the whole configuration up front: a task routed to a role
//! without a model, or an ensemble referencing an unmapped role, is a
//! deployment defect and fails fast instead of surfacing mid-request.

use std::collections::HashMap;

use crate::error::{CoreError, Result};
use crate::model::{ModelId, ModelRole};
use crate::task::TaskType;

/// Validated, immutable routing configuration.
#[derive(Debug, Clone)]
pub struct ModelRegistry {
    // Registration order is meaningful: it fixes the exhaustive-fallback
    // ordering of candidates no history exists for.
    models: Vec<(ModelRole, ModelId)>,
    routes: HashMap<TaskType, ModelRole>,
    ensembles: HashMap<TaskType, Vec<ModelRole>>,
}

impl ModelRegistry {
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    /// Default configuration against hosted OpenAI-style model names.
    pub fn recommended() -> Self {
        Self::recommended_builder()
            .model(ModelRole::Primary, "gpt-4.1-mini")
            .model(ModelRole::Reasoning, "o4-mini")
            .model(ModelRole::Creative, "gpt-4o")
            .model(ModelRole::Detailed, "gpt-4.1")
            .model(ModelRole::Efficient, "gpt-4o-mini")
            .model(ModelRole::Code, "gpt-4.1")
            .model(ModelRole::Conversational, "gpt-4o-mini")
            .model(ModelRole::Instruction, "gpt-4.1-mini")
            .build()
            .expect("recommended registry is internally consistent")
    }

    /// Default configuration against commonly pulled Ollama models.
    pub fn recommended_ollama() -> Self {
        Self::recommended_builder()
            .model(ModelRole::Primary, "llama3.1:8b")
            .model(ModelRole::Reasoning, "deepseek-r1:8b")
            .model(ModelRole::Creative, "mistral:7b")
            .model(ModelRole::Detailed, "llama3.1:70b")
            .model(ModelRole::Efficient, "llama3.2:3b")
            .model(ModelRole::Code, "qwen2.5-coder:7b")
            .model(ModelRole::Conversational, "llama3.1:8b")
            .model(ModelRole::Instruction, "llama3.1:8b")
            .build()
            .expect("recommended registry is internally consistent")
    }

    // Shared routing and ensemble profiles of the recommended setups.
    fn recommended_builder() -> ModelRegistryBuilder {
        Self::builder()
            .route(TaskType::DESIGN, ModelRole::Creative)
            .route(TaskType::FUNCTIONALITY, ModelRole::Detailed)
            .route(TaskType::TECHNICAL, ModelRole::Code)
            .route(TaskType::CONTENT, ModelRole::Creative)
            .route(TaskType::UX, ModelRole::Conversational)
            .route(TaskType::ANALYSIS, ModelRole::Reasoning)
            .route(TaskType::CODE_GENERATION, ModelRole::Code)
            .route(TaskType::USER_GUIDANCE, ModelRole::Conversational)
            .route(TaskType::STRUCTURED_OUTPUT, ModelRole::Instruction)
            .route(TaskType::QUICK_TASKS, ModelRole::Efficient)
            .route(TaskType::DEFAULT, ModelRole::Primary)
            .ensemble(TaskType::DESIGN, [ModelRole::Creative, ModelRole::Detailed])
            .ensemble(TaskType::TECHNICAL, [ModelRole::Code, ModelRole::Reasoning])
            .ensemble(TaskType::ANALYSIS, [ModelRole::Reasoning, ModelRole::Detailed])
    }

    /// Role handling `task`, falling back to the `default` route for
    /// unrecognised task types.
    pub fn resolve_role(&self, task: &TaskType) -> ModelRole {
        match self.routes.get(task) {
            Some(role) => *role,
            // Guaranteed present by build().
            None => *self
                .routes
                .get(&TaskType::DEFAULT)
                .expect("validated at construction: default route exists"),
        }
    }

    /// Model registered for `role`.
    ///
    /// # Errors
    ///
    /// [`CoreError::Configuration`] if the role has no model. This cannot
    /// happen for roles reachable through [`Self::resolve_role`].
    pub fn resolve_model(&self, role: ModelRole) -> Result<&ModelId> {
        self.models
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, id)| id)
            .ok_or_else(|| CoreError::Configuration(format!("role `{role}` has no registered model")))
    }

    /// Preferred model for `task`: route then lookup. Infallible because
    /// construction validated every routed role.
    pub fn model_for_task(&self, task: &TaskType) -> &ModelId {
        let role = self.resolve_role(task);
        self.resolve_model(role)
            .expect("validated at construction: routed role has a model")
    }

    /// All registered models, in registration order.
    pub fn models(&self) -> impl Iterator<Item = &ModelId> {
        self.models.iter().map(|(_, id)| id)
    }

    /// Whether `task` has an ensemble profile.
    pub fn has_ensemble(&self, task: &TaskType) -> bool {
        self.ensembles.contains_key(task)
    }

    /// Models of the task's ensemble profile, in profile order, de-duplicated
    /// (two roles may share one deployment).
    pub fn ensemble_models(&self, task: &TaskType) -> Vec<ModelId> {
        let Some(roles) = self.ensembles.get(task) else {
            return Vec::new();
        };
        let mut models = Vec::new();
        for role in roles {
            let id = self
                .resolve_model(*role)
                .expect("validated at construction: ensemble role has a model");
            if !models.contains(id) {
                models.push(id.clone());
            }
        }
        models
    }
}

/// Builder enforcing the registry's construction-time invariants.
#[derive(Debug, Default)]
pub struct ModelRegistryBuilder {
    models: Vec<(ModelRole, ModelId)>,
    routes: HashMap<TaskType, ModelRole>,
    ensembles: HashMap<TaskType, Vec<ModelRole>>,
}

impl ModelRegistryBuilder {
    /// Register (or replace) the model serving `role`.
    pub fn model(mut self, role: ModelRole, id: impl Into<ModelId>) -> Self {
        let id = id.into();
        match self.models.iter_mut().find(|(r, _)| *r == role) {
            Some((_, existing)) => *existing = id,
            None => self.models.push((role, id)),
        }
        self
    }

    /// Route `task` to `role`.
    pub fn route(mut self, task: TaskType, role: ModelRole) -> Self {
        self.routes.insert(task, role);
        self
    }

    /// Mark `task` as ensemble-eligible with the given role profile.
    pub fn ensemble(mut self, task: TaskType, roles: impl IntoIterator<Item = ModelRole>) -> Self {
        self.ensembles.insert(task, roles.into_iter().collect());
        self
    }

    /// Validate and freeze the registry.
    ///
    /// # Errors
    ///
    /// [`CoreError::Configuration`] when the `default` route is missing, a
    /// route points at a role without a model, or an ensemble profile
    /// references an unmapped role or is empty.
    pub fn build(self) -> Result<ModelRegistry> {
        if !self.routes.contains_key(&TaskType::DEFAULT) {
            return Err(CoreError::Configuration(
                "routing table must map the `default` task type".into(),
            ));
        }

        let has_model = |role: ModelRole| self.models.iter().any(|(r, _)| *r == role);

        for (task, role) in &self.routes {
            if !has_model(*role) {
                return Err(CoreError::Configuration(format!(
                    "task `{task}` routes to role `{role}` which has no registered model"
                )));
            }
        }
        for (task, roles) in &self.ensembles {
            if roles.is_empty() {
                return Err(CoreError::Configuration(format!(
                    "ensemble profile for task `{task}` is empty"
                )));
            }
            for role in roles {
                if !has_model(*role) {
                    return Err(CoreError::Configuration(format!(
                        "ensemble for task `{task}` references role `{role}` which has no registered model"
                    )));
                }
            }
        }

        Ok(ModelRegistry {
            models: self.models,
            routes: self.routes,
            ensembles: self.ensembles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_route_is_rejected() {
        let err = ModelRegistry::builder()
            .model(ModelRole::Primary, "m")
            .route(TaskType::DESIGN, ModelRole::Primary)
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn route_to_unmapped_role_is_rejected() {
        let err = ModelRegistry::builder()
            .model(ModelRole::Primary, "m")
            .route(TaskType::DEFAULT, ModelRole::Primary)
            .route(TaskType::TECHNICAL, ModelRole::Code)
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn ensemble_referencing_unmapped_role_is_rejected() {
        let err = ModelRegistry::builder()
            .model(ModelRole::Primary, "m")
            .route(TaskType::DEFAULT, ModelRole::Primary)
            .ensemble(TaskType::DESIGN, [ModelRole::Creative])
            .build()
            .unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn unknown_task_falls_back_to_default_route() {
        let registry = ModelRegistry::recommended();
        let role = registry.resolve_role(&TaskType::new("made_up_by_caller"));
        assert_eq!(role, ModelRole::Primary);
    }

    #[test]
    fn recommended_registries_validate() {
        // Both `recommended` constructors assert their own consistency; the
        // calls simply must not panic.
        let hosted = ModelRegistry::recommended();
        let local = ModelRegistry::recommended_ollama();
        assert!(hosted.has_ensemble(&TaskType::DESIGN));
        assert!(!local.ensemble_models(&TaskType::TECHNICAL).is_empty());
    }

    #[test]
    fn ensemble_models_are_deduplicated() {
        let registry = ModelRegistry::builder()
            .model(ModelRole::Primary, "shared")
            .model(ModelRole::Creative, "shared")
            .route(TaskType::DEFAULT, ModelRole::Primary)
            .ensemble(TaskType::DESIGN, [ModelRole::Creative, ModelRole::Primary])
            .build()
            .unwrap();
        assert_eq!(registry.ensemble_models(&TaskType::DESIGN).len(), 1);
    }
}
