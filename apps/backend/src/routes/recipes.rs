//! Recipe CRUD endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/recipes
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<RecipeQuery>,
) -> Result<Json<RecipeListResponse>> {
    let recipes = state.db.list_recipes(&filter).await?;
    Ok(Json(RecipeListResponse { recipes }))
}

/// GET /api/recipes/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(recipe_id): Path<i64>,
) -> Result<Json<Recipe>> {
    let recipe = state
        .db
        .get_recipe(recipe_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("recipe {}", recipe_id)))?;

    Ok(Json(recipe))
}

/// POST /api/recipes
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<RecipePayload>,
) -> Result<Json<Recipe>> {
    let payload = payload.normalized();
    if payload.title.is_empty() {
        return Err(ApiError::BadRequest("Title is required".to_string()));
    }

    let recipe = state.db.insert_recipe(&payload, "Manual").await?;

    tracing::info!("Added recipe {}: {}", recipe.id, recipe.title);

    Ok(Json(recipe))
}

/// PUT /api/recipes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(recipe_id): Path<i64>,
    Json(payload): Json<RecipePayload>,
) -> Result<Json<Recipe>> {
    let payload = payload.normalized();
    if payload.title.is_empty() {
        return Err(ApiError::BadRequest("Title is required".to_string()));
    }

    let recipe = state
        .db
        .update_recipe(recipe_id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("recipe {}", recipe_id)))?;

    Ok(Json(recipe))
}

/// DELETE /api/recipes/{id}
pub async fn remove(
    State(state): State<AppState>,
    Path(recipe_id): Path<i64>,
) -> Result<StatusCode> {
    if !state.db.delete_recipe(recipe_id).await? {
        return Err(ApiError::NotFound(format!("recipe {}", recipe_id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/cuisines
pub async fn cuisines(State(state): State<AppState>) -> Result<Json<CuisineListResponse>> {
    let cuisines = state.db.distinct_cuisines().await?;
    Ok(Json(CuisineListResponse { cuisines }))
}
