use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use models::db::{self as store, DatabaseConfig};
use sea_orm::DatabaseConnection;
use service::booking::SeaOrmBookingRepository;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bring the schema up. With `reset` every table is dropped and recreated
/// empty; otherwise missing tables are created and data is kept.
pub async fn prepare_schema(db: &DatabaseConnection, reset: bool) -> Result<(), StartupError> {
    let res = if reset { store::reset_schema(db).await } else { store::migrate(db).await };
    res.map_err(|e| StartupError::Database(e.to_string()))
}

/// Router wired to a SeaORM repository over `db`.
pub fn build_app(db: DatabaseConnection) -> Router {
    let state = ServerState::new(Arc::new(SeaOrmBookingRepository { db }));
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(event = "signal_error", error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Load `.env` and the validated config, as the binary does before `run`.
pub fn load_config() -> Result<AppConfig, StartupError> {
    dotenv().ok();
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Connect, prepare the schema, then serve until Ctrl+C.
/// Any failure before listening aborts startup.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let db = store::connect_with_config(&DatabaseConfig::from(&cfg.database))
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;

    prepare_schema(&db, cfg.database.reset_on_boot).await?;

    let app = build_app(db.clone());

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    info!(addr = %listener.local_addr()?, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = db.close().await {
        error!(event = "db_close_failed", error = %e, "closing database connection failed");
    }
    info!(event = "stopped", "server stopped");
    Ok(())
}
