//! End-to-end orchestrator behaviour against a scripted mock backend.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use echogen_core::fallback::fallback_for;
use echogen_core::provider::{GenerationCall, GenerationProvider};
use echogen_core::{CoreError, ModelId, ModelRegistry, ModelRole, Orchestrator, Result, TaskType};

/// Scripted backend recording every invocation.
#[derive(Clone)]
struct MockBackend {
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<ModelId>>>,
    respond: Arc<dyn Fn(&GenerationCall) -> Result<String> + Send + Sync>,
}

impl MockBackend {
    fn new(respond: impl Fn(&GenerationCall) -> Result<String> + Send + Sync + 'static) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
            respond: Arc::new(respond),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn seen(&self) -> Vec<ModelId> {
        self.seen.lock().unwrap().clone()
    }
}

impl GenerationProvider for MockBackend {
    fn invoke<'p>(
        &'p self,
        call: GenerationCall,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(call.model.clone());
        let result = (self.respond)(&call);
        Box::pin(async move { result })
    }
}

fn refused() -> CoreError {
    CoreError::Backend("connection refused".into())
}

/// Small three-model registry used by most tests.
fn small_registry() -> ModelRegistry {
    ModelRegistry::builder()
        .model(ModelRole::Primary, "alpha")
        .model(ModelRole::Creative, "beta")
        .model(ModelRole::Code, "gamma")
        .route(TaskType::DEFAULT, ModelRole::Primary)
        .route(TaskType::TECHNICAL, ModelRole::Code)
        .build()
        .unwrap()
}

fn acceptable_text() -> String {
    "A complete, sufficiently long generated answer covering the requested topic in detail.".into()
}

#[tokio::test]
async fn each_model_is_invoked_at_most_once_per_call() {
    let backend = MockBackend::new(|_| Err(refused()));
    let orchestrator = Orchestrator::new(backend.clone(), small_registry());

    orchestrator.generate("p", &TaskType::new("summaries")).await;

    let seen = backend.seen();
    assert_eq!(seen.len(), 3, "three registered models, three attempts");
    for model in &seen {
        assert_eq!(seen.iter().filter(|m| *m == model).count(), 1);
    }
}

#[tokio::test]
async fn cache_hit_short_circuits_the_backend() {
    let backend = MockBackend::new(|_| Ok(acceptable_text()));
    let orchestrator = Orchestrator::new(backend.clone(), small_registry());
    let task = TaskType::new("quick_tasks");

    let first = orchestrator.generate("same prompt", &task).await;
    assert_eq!(backend.calls(), 1);

    let second = orchestrator.generate("same prompt", &task).await;
    assert_eq!(first, second);
    assert_eq!(backend.calls(), 1, "second call must not reach the backend");
}

#[tokio::test]
async fn exhaustion_degrades_to_the_fallback_template() {
    let backend = MockBackend::new(|_| Err(refused()));
    let orchestrator = Orchestrator::new(backend, small_registry());
    let task = TaskType::DESIGN;

    let text = orchestrator.generate("p", &task).await;
    assert!(!text.is_empty());
    assert_eq!(text, fallback_for(&task));
}

#[tokio::test]
async fn fallback_templates_are_not_cached() {
    let backend = MockBackend::new(|_| Err(refused()));
    let orchestrator = Orchestrator::new(backend.clone(), small_registry());
    let task = TaskType::DESIGN;

    orchestrator.generate("p", &task).await;
    let calls_after_first = backend.calls();
    orchestrator.generate("p", &task).await;

    assert!(
        backend.calls() > calls_after_first,
        "a failed generation must be retried, not served from cache"
    );
}

#[tokio::test]
async fn history_reorders_candidates_behind_the_preferred_model() {
    let backend = MockBackend::new(|_| Err(refused()));
    let orchestrator = Orchestrator::new(backend.clone(), small_registry());
    let task = TaskType::new("summaries"); // routes to default -> "alpha"

    let beta = ModelId::from("beta");
    let gamma = ModelId::from("gamma");
    // gamma validated well in the past, beta did not.
    orchestrator.tracker().record(&task, &beta, false);
    orchestrator.tracker().record(&task, &gamma, true);
    orchestrator.tracker().record(&task, &gamma, true);

    orchestrator.generate("p", &task).await;

    let seen = backend.seen();
    assert_eq!(seen[0], ModelId::from("alpha"), "preferred model stays first");
    let pos_gamma = seen.iter().position(|m| *m == gamma).unwrap();
    let pos_beta = seen.iter().position(|m| *m == beta).unwrap();
    assert!(pos_gamma < pos_beta, "higher success rate must be tried earlier");
}

#[tokio::test]
async fn ensemble_falls_back_to_the_single_model_chain() {
    let registry = ModelRegistry::builder()
        .model(ModelRole::Primary, "alpha")
        .model(ModelRole::Reasoning, "reasoner")
        .model(ModelRole::Detailed, "writer")
        .route(TaskType::DEFAULT, ModelRole::Primary)
        .route(TaskType::ANALYSIS, ModelRole::Reasoning)
        .ensemble(TaskType::ANALYSIS, [ModelRole::Reasoning, ModelRole::Detailed])
        .build()
        .unwrap();

    // Both ensemble members emit degenerate output; only "alpha" answers.
    let backend = MockBackend::new(|call| {
        if call.model.as_str() == "alpha" {
            Ok(acceptable_text())
        } else {
            Ok("nope".into())
        }
    });
    let orchestrator = Orchestrator::new(backend.clone(), registry);

    let text = orchestrator
        .generate_with("p", &TaskType::ANALYSIS, true)
        .await;

    assert_eq!(text, acceptable_text());
    assert!(backend.seen().contains(&ModelId::from("alpha")));
}

#[tokio::test]
async fn ensemble_merge_returns_one_of_the_accepted_outputs() {
    let registry = ModelRegistry::builder()
        .model(ModelRole::Primary, "alpha")
        .model(ModelRole::Reasoning, "reasoner")
        .model(ModelRole::Detailed, "writer")
        .route(TaskType::DEFAULT, ModelRole::Primary)
        .ensemble(TaskType::ANALYSIS, [ModelRole::Reasoning, ModelRole::Detailed])
        .build()
        .unwrap();

    let short = acceptable_text();
    let long = format!("{} And considerably more elaboration on top of that.", short);
    let backend = {
        let (short, long) = (short.clone(), long.clone());
        MockBackend::new(move |call| {
            Ok(match call.model.as_str() {
                "reasoner" => short.clone(),
                "writer" => long.clone(),
                other => panic!("unexpected model {other}"),
            })
        })
    };
    let orchestrator = Orchestrator::new(backend.clone(), registry);

    let text = orchestrator
        .generate_with("p", &TaskType::ANALYSIS, true)
        .await;

    assert_eq!(text, long, "current merge policy keeps the longest output");
    assert_eq!(backend.calls(), 2);
}

// Only the "code" model produces an acceptable technical answer.
#[tokio::test]
async fn technical_task_accepts_the_code_model_and_records_stats() {
    let registry = ModelRegistry::builder()
        .model(ModelRole::Primary, "alpha")
        .model(ModelRole::Code, "code")
        .route(TaskType::DEFAULT, ModelRole::Primary)
        .route(TaskType::TECHNICAL, ModelRole::Code)
        .build()
        .unwrap();

    let backend = MockBackend::new(|call| {
        if call.model.as_str() == "code" {
            Ok("We use microservices for implementation details, \
                deployed behind a load balancer with automated rollouts."
                .into())
        } else {
            Ok(String::new())
        }
    });
    let orchestrator = Orchestrator::new(backend.clone(), registry);
    let task = TaskType::TECHNICAL;

    let text = orchestrator.generate("Describe the stack", &task).await;

    assert!(text.contains("implementation"));
    let stats = orchestrator
        .tracker()
        .stats(&task, &ModelId::from("code"))
        .unwrap();
    assert_eq!(stats.attempts, 1);
    assert_eq!(stats.successes, 1);
    // Preferred model answered first; nothing else was consulted.
    assert_eq!(backend.calls(), 1);
}
