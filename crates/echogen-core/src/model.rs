//! Model roles and identifiers used throughout the **echogen** workspace.
//!
//! A [`ModelRole`] names a *capability bucket* ("creative", "code", …)
//! independent of any concrete deployment, while a [`ModelId`] is the literal
//! name a backend understands (`"gpt-4.1-mini"`, `"llama3.1:8b"`). The
//! [`ModelRegistry`](crate::registry::ModelRegistry) binds the two together,
//! so application code never hard-codes provider model names at call sites.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Logical category of model capability.
///
/// The set is closed on purpose: routing tables and ensemble profiles refer
/// to roles, and a closed enum lets the compiler flag every place that needs
/// updating when a new role is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelRole {
    /// General-purpose default, used when nothing more specific applies.
    Primary,
    /// Multi-step reasoning and analysis.
    Reasoning,
    /// Open-ended, stylistically rich output.
    Creative,
    /// Long, thorough answers.
    Detailed,
    /// Cheap and fast, for short utility tasks.
    Efficient,
    /// Code-adjacent and technical content.
    Code,
    /// Dialogue-flavoured guidance text.
    Conversational,
    /// Strict instruction-following / structured output.
    Instruction,
}

impl ModelRole {
    /// Every role, in declaration order.
    pub const ALL: [ModelRole; 8] = [
        ModelRole::Primary,
        ModelRole::Reasoning,
        ModelRole::Creative,
        ModelRole::Detailed,
        ModelRole::Efficient,
        ModelRole::Code,
        ModelRole::Conversational,
        ModelRole::Instruction,
    ];

    /// Canonical lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelRole::Primary => "primary",
            ModelRole::Reasoning => "reasoning",
            ModelRole::Creative => "creative",
            ModelRole::Detailed => "detailed",
            ModelRole::Efficient => "efficient",
            ModelRole::Code => "code",
            ModelRole::Conversational => "conversational",
            ModelRole::Instruction => "instruction",
        }
    }
}

impl Display for ModelRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete model name as understood by a generation backend.
///
/// Kept as an opaque newtype rather than an enum because backends (local
/// Ollama installs in particular) expose arbitrary, user-pulled model names
/// that cannot be enumerated at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModelId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ModelId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
