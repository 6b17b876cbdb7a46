//! Typed website-analysis records and document assembly for **echogen**.
//!
//! Replaces the schema-less nested maps of ad-hoc scraping pipelines with
//! explicit structs per analysis category, plus the machinery to turn an
//! analysis into generation prompts and to assemble the generated sections
//! into text and JSON recreation documents.

pub mod analysis;
pub mod document;
pub mod sections;

pub use analysis::SiteAnalysis;
pub use document::{generate_document, RecreationDocument};
pub use sections::{section_prompt, SectionKind};
