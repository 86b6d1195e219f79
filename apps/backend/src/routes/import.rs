//! Markdown import endpoint

use axum::{extract::State, Json};

use recipe_core::parse;

use crate::error::Result;
use crate::models::{ImportRequest, ImportResponse};
use crate::AppState;

/// POST /api/import
///
/// Parses a pasted collection document and stores the recipes that are not
/// already present. Text with no recognizable sections is a zero-count
/// result, not an error.
pub async fn import(
    State(state): State<AppState>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<ImportResponse>> {
    let drafts = parse(&payload.text);
    let imported = state.db.import_drafts(&drafts).await?;

    tracing::info!("Imported {} recipe(s)", imported);

    Ok(Json(ImportResponse { imported }))
}
