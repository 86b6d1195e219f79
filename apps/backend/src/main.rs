#[tokio::main]
async fn main() -> anyhow::Result<()> {
    recipe_logger_backend::run().await
}
