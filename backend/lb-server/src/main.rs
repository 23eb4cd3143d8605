use lb_server::error::Result as ServerErrorResult;
use lb_server::{AppState, build_router, logger};

use lb_auth::{Argon2Hasher, JwtValidator, TokenIssuer};
use lb_config::Config;
use lb_db::SqliteUserStore;

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional; real environment wins
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(&config.logging, log_file_path)?;

    info!("Starting lb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = lb_db::connect(&database_path, config.database.max_connections).await?;

    let secret = config.auth.secret_bytes();
    let app_state = AppState::new(
        Arc::new(SqliteUserStore::new(pool)),
        Arc::new(Argon2Hasher::new()?),
        TokenIssuer::with_hs256(secret, config.auth.token_ttl_secs),
        JwtValidator::with_hs256(secret),
    );

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
