//! # `echogen` – The umbrella crate
//!
//! A *one-stop import* gluing together the building-block crates in the
//! workspace:
//!
//! | Crate                 | What it provides                                                        |
//! |-----------------------|-------------------------------------------------------------------------|
//! | **`echogen-core`**    | Model registry & routing, parameter selection, validation, performance tracking, prompt cache, the fallback orchestrator |
//! | **`echogen-prompt`**  | Fluent markdown prompt builder and task-tagged prompt type              |
//! | **`echogen-types`**   | Typed site-analysis records, section prompts, document assembly         |
//! | **`echogen-openai`**  | OpenAI chat-completions backend adapter *(feature `openai`, default)*   |
//! | **`echogen-ollama`**  | Local Ollama backend adapter *(feature `ollama`)*                       |
//!
//! ## Design philosophy
//!
//! * **Generation never fails** – the orchestrator absorbs backend errors
//!   and validator rejections into an ordered fallback chain and, at worst,
//!   serves a static template. Callers receive text, always.
//! * **Opt-in providers** – enabling a backend feature pulls in `reqwest`
//!   and TLS; without one your binary stays lean and you can plug in your
//!   own [`GenerationProvider`](echogen_core::provider::GenerationProvider).
//! * **Configuration fails fast** – registries validate routing and
//!   ensemble profiles at construction, so a bad deployment dies at startup
//!   instead of mid-request.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use echogen::{Orchestrator, ModelRegistry, TaskType};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = echogen::openai::OpenAiAdapterBuilder::new_from_env().build()?;
//!     let orchestrator = Orchestrator::new(backend, ModelRegistry::recommended());
//!
//!     let text = orchestrator
//!         .generate("Describe the stack of a typical SaaS landing page.", &TaskType::TECHNICAL)
//!         .await;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub use echogen_core::*;
pub use echogen_prompt as prompt;
pub use echogen_types as types;

#[cfg(feature = "openai")]
pub use echogen_openai as openai;

#[cfg(feature = "ollama")]
pub use echogen_ollama as ollama;
