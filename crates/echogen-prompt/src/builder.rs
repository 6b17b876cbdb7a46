//! Fluent construction of **markdown prompt text**.
//!
//! Section prompts are mostly boilerplate markdown around a handful of
//! analysis values; assembling them with `format!` and string pushes buries
//! the content under escaping and newline bookkeeping. `PromptBuilder`
//! keeps the call site declarative: each method appends one markdown
//! construct and returns `self` for chaining.
//!
//! ```rust
//! use echogen_prompt::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .heading("Design Analysis")
//!     .blank()
//!     .key_value("Colour scheme", "dark, high contrast")
//!     .bullet("three-column grid")
//!     .finish();
//!
//! assert!(md.starts_with("# Design Analysis"));
//! ```
//!
//! Output is deliberately literal. Nothing is validated, reflowed or
//! deduplicated; every newline in the result was asked for by a call.

use std::fmt::{Display, Write as _};

/// Fluent helper producing markdown fragments into an owned buffer.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a level-1 (`#`) heading.
    pub fn heading(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "# {line}").expect("failed to write buffer");
        self
    }

    /// Add a level-2 (`##`) heading.
    pub fn subheading(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "## {line}").expect("failed to write buffer");
        self
    }

    /// Add a plain line of text with a trailing newline.
    pub fn line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a `**Key**: Value` line.
    pub fn key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: {value}").expect("failed to write buffer");
        self
    }

    /// Add a `- item` bullet line.
    pub fn bullet(mut self, item: impl Display) -> Self {
        writeln!(self.buffer, "- {item}").expect("failed to write buffer");
        self
    }

    /// Add one bullet per item; a handy shortcut for list-valued analysis
    /// fields.
    pub fn bullets<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for item in items {
            writeln!(self.buffer, "- {item}").expect("failed to write buffer");
        }
        self
    }

    /// Add a `1.`-style numbered list over all items.
    pub fn numbered<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for (index, item) in items.into_iter().enumerate() {
            writeln!(self.buffer, "{}. {item}", index + 1).expect("failed to write buffer");
        }
        self
    }

    /// Insert a single blank line.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Insert a `---` delimiter line.
    pub fn delimiter(self) -> Self {
        self.line("---")
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finish(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_emitted_in_call_order() {
        let md = PromptBuilder::new()
            .heading("Title")
            .blank()
            .key_value("Purpose", "portfolio")
            .bullets(["one", "two"])
            .finish();

        assert_eq!(md, "# Title\n\n**Purpose**: portfolio\n- one\n- two\n");
    }

    #[test]
    fn numbered_list_counts_from_one() {
        let md = PromptBuilder::new().numbered(["a", "b", "c"]).finish();
        assert_eq!(md, "1. a\n2. b\n3. c\n");
    }
}
