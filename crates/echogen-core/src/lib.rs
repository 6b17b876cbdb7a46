//! Provider-agnostic generation orchestration for the **echogen** workspace.
//!
//! The crate implements one idea end to end: *a generation call that cannot
//! fail*. Callers hand the [`Orchestrator`] a prompt and a [`task::TaskType`]
//! tag; the orchestrator consults its result cache, walks an ordered list of
//! model candidates (preferred model, then past high performers, then the
//! rest of the [`registry::ModelRegistry`]), validates each output with
//! coarse topicality heuristics, and, if every candidate fails, degrades
//! to a static, task-specific template from [`fallback`].
//!
//! Backends plug in through the [`provider::GenerationProvider`] trait; see
//! the `echogen-openai` and `echogen-ollama` crates for the two shipped
//! adapters.

pub mod cache;
pub mod error;
pub mod fallback;
pub mod model;
pub mod orchestrator;
pub mod params;
pub mod provider;
pub mod registry;
pub mod stats;
pub mod task;
pub mod validate;

pub use error::{CoreError, Result};
pub use model::{ModelId, ModelRole};
pub use orchestrator::Orchestrator;
pub use registry::{ModelRegistry, ModelRegistryBuilder};
pub use task::TaskType;
