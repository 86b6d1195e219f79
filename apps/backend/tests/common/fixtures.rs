//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

/// Minimal create payload with only a title.
pub fn recipe_payload(title: &str) -> Value {
    json!({ "title": title })
}

/// Fully-populated create payload.
pub fn full_recipe_payload(title: &str, cuisine: &str) -> Value {
    json!({
        "title": title,
        "cuisine": cuisine,
        "mood": "fiery",
        "ingredients": "tofu\nchili",
        "instructions": "cook\nserve",
        "spice_level": 8,
        "rating": 5,
        "tags": "tofu, weeknight",
        "vegetarian": true,
        "tried": true,
    })
}

/// Import request body wrapping a pasted document.
pub fn import_request(text: &str) -> Value {
    json!({ "text": text })
}

/// A two-section collection document in the import format.
pub fn sample_collection() -> String {
    concat!(
        "### 1. Kimchi Stew (Korean)\n",
        "**Mood:** cozy\n",
        "\n",
        "**Ingredients:**\n",
        "- kimchi\n",
        "- pork\n",
        "\n",
        "**Instructions:**\n",
        "1. Simmer\n",
        "2. Serve\n",
        "\n",
        "---\n",
        "\n",
        "### 2. Mapo Tofu (Chinese-Sichuan Style)\n",
        "**Mood:** fiery\n",
        "\n",
        "**Ingredients:**\n",
        "- tofu\n",
        "• chili oil\n",
        "\n",
        "**Instructions:**\n",
        "1. Heat oil\n",
        "2) Add tofu\n",
        "- Serve hot\n",
        "\n",
        "---\n",
    )
    .to_string()
}
