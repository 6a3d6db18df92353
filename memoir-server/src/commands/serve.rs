//! The request-serving process.

use crate::error::Result as ServerResult;
use crate::routes::build_router;
use crate::state::AppState;

use memoir_config::Config;
use memoir_db::Database;

use log::info;
use tokio::net::TcpListener;

/// Bootstrap storage, build the router and serve until ctrl-c.
pub async fn run(config: Config) -> ServerResult<()> {
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let db = Database::connect(&database_path).await?;

    info!("Running database migrations...");
    db.migrate().await?;
    info!("Migrations complete");

    let state = AppState {
        pool: db.pool(),
        config: config.clone(),
    };

    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
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
        Err(e) => log::error!("Failed to listen for SIGINT: {}", e),
    }
}
