mod config;
mod db;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

use config::{ConfigError, SiteConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("database init failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "meridian failed to start");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = SiteConfig::from_env()?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    let state = state::AppState::with_pool(pool);

    let app = routes::app(state, &config.site_dir).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "meridian listening");
    axum::serve(listener, app).await?;
    Ok(())
}
