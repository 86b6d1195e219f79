//! Core recipe library shared by the backend service and maintenance tools.
//!
//! Provides:
//! - Markdown collection parser for one fixed document convention
//!   (`### n. Title` headers, `**Mood:**` field, `**Ingredients:**` and
//!   `**Instructions:**` blocks, `---` separators)
//! - The draft type handed to the persistence layer

pub mod parser;
pub mod types;

pub use parser::{parse, strip_step_marker};
pub use types::{RecipeDraft, IMPORT_SOURCE};
