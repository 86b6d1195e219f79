//! Parser output types.

use serde::{Deserialize, Serialize};

/// Provenance tag stamped on every draft produced by the parser.
pub const IMPORT_SOURCE: &str = "Imported from Markdown";

/// An unpersisted recipe extracted from a collection document.
///
/// Spice level, rating, and tags are never derivable from import text, so
/// they are left for the user to fill in after the draft is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    pub cuisine: Option<String>,
    pub mood: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub source: String,
}
