//! Unified error type exposed by **`echogen-core`**.
//!
//! Backend crates should convert their internal errors into one of these
//! variants before handing them to the [`Orchestrator`](crate::Orchestrator).
//! This keeps the public API small while still conveying rich diagnostic
//! information.


use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    /// The registry, routing table or ensemble profiles are inconsistent.
    /// Raised during [`ModelRegistry`](crate::registry::ModelRegistry)
    /// construction and never mid-request.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Generic forwarding of any backend-specific failure (network, timeout,
    /// model missing, malformed response). The orchestrator absorbs these
    /// into the fallback chain.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from an LLM backend.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
