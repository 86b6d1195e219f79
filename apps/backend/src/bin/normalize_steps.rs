//! One-shot cleanup: re-strips leftover numbering and bullets from
//! instruction steps already stored in the database.

use recipe_logger_backend::db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://recipes.db".into());

    let db = Database::connect(&database_url).await?;
    db.run_migrations().await?;

    let changed = db.normalize_instruction_steps().await?;
    println!("Normalized instruction steps for {} recipe(s).", changed);

    Ok(())
}
