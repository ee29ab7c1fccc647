use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movie_catalog::app;
use movie_catalog::config::settings::AppConfig;
use movie_catalog::infrastructure::db::{pool, schema};
use movie_catalog::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("Failed to read configuration")?;

    let db = pool::connect_to_db(&config.database)
        .await
        .with_context(|| format!("Failed to connect to {}", config.database.url))?;
    schema::init_schema(&db)
        .await
        .context("Failed to create tables")?;

    let address = config.bind_address();
    let app = app::create_app(AppState::new(config, db));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on http://{address}");

    axum::serve(listener, app).await?;
    Ok(())
}
