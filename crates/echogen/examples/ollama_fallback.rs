//! Single-call demo against a local Ollama server, showing the fallback
//! chain in action: stop the server and the call still returns text.
//!
//! ```sh
//! cargo run --example ollama_fallback --features ollama
//! ```

use echogen::ollama::OllamaAdapterBuilder;
use echogen::{ModelRegistry, Orchestrator, TaskType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = OllamaAdapterBuilder::new_from_env().build();
    if !backend.is_available().await {
        eprintln!("note: no Ollama server reachable, expect the fallback template");
    }

    let orchestrator = Orchestrator::new(backend, ModelRegistry::recommended_ollama());

    let text = orchestrator
        .generate(
            "Describe the technical implementation of a small e-commerce storefront.",
            &TaskType::TECHNICAL,
        )
        .await;

    println!("{text}");
    Ok(())
}
