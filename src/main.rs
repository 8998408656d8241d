//! Server binary: `homz-api -config <path>`.

use homz_api::{app, db, load_from_path, AppState, Cli, ConfigError};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("homz_api=info,tower_http=info")),
        )
        .init();

    let cli = Cli::from_env();
    let config_path = cli.config.ok_or(ConfigError::NoPath)?;
    let config = load_from_path(&config_path)?;

    let database = db::mysql::connect(&config.database).await?;
    let state = AppState::new(database, &config);
    tracing::info!(base = %state.links.base(), "serving catalog");

    let listener = TcpListener::bind(("0.0.0.0", config.server.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
