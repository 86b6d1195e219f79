//! SQLite database operations

use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite};

use recipe_core::{strip_step_marker, RecipeDraft};

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the SQLite database, creating the file when missing
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // === Recipe Repository ===

    /// List recipes matching the given filters, in the requested order
    pub async fn list_recipes(&self, filter: &RecipeQuery) -> Result<Vec<Recipe>> {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT id, title, cuisine, mood, ingredients, instructions, spice_level, rating, \
             tags, source, created_at, vegetarian, tried \
             FROM recipes WHERE 1=1",
        );

        if let Some(q) = trimmed(&filter.q) {
            let like = format!("%{}%", q);
            query.push(" AND (title LIKE ");
            query.push_bind(like.clone());
            query.push(" OR cuisine LIKE ");
            query.push_bind(like.clone());
            query.push(" OR tags LIKE ");
            query.push_bind(like.clone());
            query.push(" OR mood LIKE ");
            query.push_bind(like);
            query.push(")");
        }
        if let Some(cuisine) = trimmed(&filter.cuisine) {
            query.push(" AND cuisine = ");
            query.push_bind(cuisine.to_string());
        }
        if let Some(veg) = filter.veg {
            query.push(" AND IFNULL(vegetarian, 0) = ");
            query.push_bind(veg);
        }
        if let Some(tried) = filter.tried {
            query.push(" AND IFNULL(tried, 0) = ");
            query.push_bind(tried);
        }

        query.push(" ORDER BY ");
        query.push(filter.sort.order_by());

        let recipes = query
            .build_query_as::<Recipe>()
            .fetch_all(&self.pool)
            .await?;

        Ok(recipes)
    }

    /// Distinct non-blank cuisines, case-insensitive order
    pub async fn distinct_cuisines(&self) -> Result<Vec<String>> {
        let cuisines = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT cuisine FROM recipes
            WHERE cuisine IS NOT NULL AND TRIM(cuisine) <> ''
            ORDER BY cuisine COLLATE NOCASE
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(cuisines)
    }

    /// Get recipe by id
    pub async fn get_recipe(&self, recipe_id: i64) -> Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            SELECT id, title, cuisine, mood, ingredients, instructions,
                   spice_level, rating, tags, source, created_at, vegetarian, tried
            FROM recipes
            WHERE id = ?1
            "#,
        )
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(recipe)
    }

    /// Insert a new recipe and return the stored row
    pub async fn insert_recipe(&self, payload: &RecipePayload, source: &str) -> Result<Recipe> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            INSERT INTO recipes (title, cuisine, mood, ingredients, instructions,
                                 spice_level, rating, tags, source, created_at, vegetarian, tried)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            RETURNING id, title, cuisine, mood, ingredients, instructions,
                      spice_level, rating, tags, source, created_at, vegetarian, tried
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.cuisine)
        .bind(&payload.mood)
        .bind(&payload.ingredients)
        .bind(&payload.instructions)
        .bind(payload.spice_level)
        .bind(payload.rating)
        .bind(&payload.tags)
        .bind(source)
        .bind(Utc::now())
        .bind(payload.vegetarian)
        .bind(payload.tried)
        .fetch_one(&self.pool)
        .await?;

        Ok(recipe)
    }

    /// Update a recipe in place; `source` and `created_at` are immutable.
    /// Returns the updated row, or None when the id does not exist.
    pub async fn update_recipe(
        &self,
        recipe_id: i64,
        payload: &RecipePayload,
    ) -> Result<Option<Recipe>> {
        let recipe = sqlx::query_as::<_, Recipe>(
            r#"
            UPDATE recipes
               SET title = ?1,
                   cuisine = ?2,
                   mood = ?3,
                   ingredients = ?4,
                   instructions = ?5,
                   spice_level = ?6,
                   rating = ?7,
                   tags = ?8,
                   vegetarian = ?9,
                   tried = ?10
             WHERE id = ?11
            RETURNING id, title, cuisine, mood, ingredients, instructions,
                      spice_level, rating, tags, source, created_at, vegetarian, tried
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.cuisine)
        .bind(&payload.mood)
        .bind(&payload.ingredients)
        .bind(&payload.instructions)
        .bind(payload.spice_level)
        .bind(payload.rating)
        .bind(&payload.tags)
        .bind(payload.vegetarian)
        .bind(payload.tried)
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(recipe)
    }

    /// Delete a recipe by id
    pub async fn delete_recipe(&self, recipe_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = ?1")
            .bind(recipe_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // === Import ===

    /// Insert parsed drafts, skipping blank titles and existing
    /// (title, cuisine) pairs. Returns the number inserted.
    pub async fn import_drafts(&self, drafts: &[RecipeDraft]) -> Result<usize> {
        let mut imported = 0;

        for draft in drafts {
            let title = draft.title.trim();
            if title.is_empty() {
                continue;
            }
            let cuisine = draft.cuisine.as_deref().unwrap_or("").trim();

            let exists = sqlx::query_scalar::<_, i64>(
                "SELECT id FROM recipes WHERE title = ?1 AND IFNULL(cuisine, '') = ?2 LIMIT 1",
            )
            .bind(title)
            .bind(cuisine)
            .fetch_optional(&self.pool)
            .await?;
            if exists.is_some() {
                continue;
            }

            sqlx::query(
                r#"
                INSERT INTO recipes (title, cuisine, mood, ingredients, instructions,
                                     source, created_at, vegetarian, tried)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, NULL, 0)
                "#,
            )
            .bind(title)
            .bind(&draft.cuisine)
            .bind(&draft.mood)
            .bind(&draft.ingredients)
            .bind(&draft.instructions)
            .bind(&draft.source)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

            imported += 1;
        }

        Ok(imported)
    }

    // === Maintenance ===

    /// Re-strip enumeration markers from stored instruction steps.
    /// Returns the number of rows rewritten.
    pub async fn normalize_instruction_steps(&self) -> Result<usize> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, instructions FROM recipes WHERE instructions IS NOT NULL",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut changed = 0;
        for (recipe_id, instructions) in rows {
            let cleaned = instructions
                .lines()
                .map(strip_step_marker)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            if cleaned != instructions {
                sqlx::query("UPDATE recipes SET instructions = ?1 WHERE id = ?2")
                    .bind(&cleaned)
                    .bind(recipe_id)
                    .execute(&self.pool)
                    .await?;
                changed += 1;
            }
        }

        Ok(changed)
    }
}

/// Trimmed filter value, with blanks treated as unset
fn trimmed(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
