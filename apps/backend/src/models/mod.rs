//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Re-export shared types from recipe-core
pub use recipe_core::types::{RecipeDraft, IMPORT_SOURCE};

// === Database Entity Types ===

/// Recipe row as stored in SQLite
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub cuisine: Option<String>,
    pub mood: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub spice_level: Option<i64>,
    pub rating: Option<i64>,
    pub tags: Option<String>,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
    pub vegetarian: Option<bool>,
    pub tried: Option<bool>,
}

// === Request Types ===

/// Create/update payload for a recipe
#[derive(Debug, Clone, Deserialize)]
pub struct RecipePayload {
    pub title: String,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub spice_level: Option<i64>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub tried: bool,
}

impl RecipePayload {
    /// Trim text fields and store blanks as NULL
    pub fn normalized(mut self) -> Self {
        fn clean(value: Option<String>) -> Option<String> {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        }

        self.title = self.title.trim().to_string();
        self.cuisine = clean(self.cuisine);
        self.mood = clean(self.mood);
        self.ingredients = clean(self.ingredients);
        self.instructions = clean(self.instructions);
        self.tags = clean(self.tags);
        self
    }
}

/// Listing filters, all optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeQuery {
    pub q: Option<String>,
    pub cuisine: Option<String>,
    pub veg: Option<bool>,
    pub tried: Option<bool>,
    #[serde(default)]
    pub sort: SortOrder,
}

/// Listing sort whitelist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    CreatedAtDesc,
    Title,
    Cuisine,
}

impl SortOrder {
    /// ORDER BY clause for this sort
    pub fn order_by(self) -> &'static str {
        match self {
            Self::CreatedAtDesc => "created_at DESC",
            Self::Title => "title COLLATE NOCASE ASC",
            Self::Cuisine => "cuisine COLLATE NOCASE ASC",
        }
    }
}

/// POST /api/import request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    pub text: String,
}

// === Response Types ===

/// GET /api/recipes response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
}

/// GET /api/cuisines response
#[derive(Debug, Serialize, Deserialize)]
pub struct CuisineListResponse {
    pub cuisines: Vec<String>,
}

/// POST /api/import response
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
}
