//! Task types: tags describing *what kind* of content is being generated.
//!
//! The task type selects the preferred [`ModelRole`](crate::model::ModelRole),
//! the sampling parameters and the validation rules for one generation call.
//! Unlike roles, the set is deliberately **open**: callers may tag requests
//! with ad-hoc strings, and anything the routing table does not recognise
//! falls back to the `default` route.

use std::borrow::Cow;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Open, string-keyed identifier for the kind of content being generated.
///
/// Well-known values are provided as associated constants; arbitrary values
/// can be created with [`TaskType::new`] and route to the default role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskType(Cow<'static, str>);

impl TaskType {
    /// Visual design and layout prompts.
    pub const DESIGN: TaskType = TaskType(Cow::Borrowed("design"));
    /// Feature and interaction prompts.
    pub const FUNCTIONALITY: TaskType = TaskType(Cow::Borrowed("functionality"));
    /// Stack and implementation prompts.
    pub const TECHNICAL: TaskType = TaskType(Cow::Borrowed("technical"));
    /// Content-strategy prompts.
    pub const CONTENT: TaskType = TaskType(Cow::Borrowed("content"));
    /// User-experience prompts.
    pub const UX: TaskType = TaskType(Cow::Borrowed("ux"));
    /// Cross-cutting analysis, e.g. executive summaries.
    pub const ANALYSIS: TaskType = TaskType(Cow::Borrowed("analysis"));
    pub const CODE_GENERATION: TaskType = TaskType(Cow::Borrowed("code_generation"));
    pub const USER_GUIDANCE: TaskType = TaskType(Cow::Borrowed("user_guidance"));
    pub const STRUCTURED_OUTPUT: TaskType = TaskType(Cow::Borrowed("structured_output"));
    pub const QUICK_TASKS: TaskType = TaskType(Cow::Borrowed("quick_tasks"));
    /// Catch-all route; every registry must map it (see
    /// [`ModelRegistryBuilder::build`](crate::registry::ModelRegistryBuilder::build)).
    pub const DEFAULT: TaskType = TaskType(Cow::Borrowed("default"));

    /// Create an ad-hoc task type. Unrecognised names resolve to the
    /// `default` route.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
