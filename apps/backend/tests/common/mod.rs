//! Common test utilities for integration tests.
//!
//! Each TestContext owns its own throwaway SQLite database file under the
//! OS temp directory, so tests stay isolated and can run in parallel.

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use recipe_logger_backend::db::Database;
use recipe_logger_backend::{build_router, AppState};

/// Test context containing the database handle and the app router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context over a fresh database.
    pub async fn new() -> Self {
        let database_url = format!(
            "sqlite://{}/recipes-test-{}.db",
            std::env::temp_dir().display(),
            Uuid::new_v4()
        );

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to open test database");
        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = build_router(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}
