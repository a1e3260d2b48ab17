use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, LogFormat, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn init_logging(cfg: &AppConfig) {
    common::utils::logging::init_logging(cfg.logging.format == LogFormat::Json);
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Connect the configured backend, migrating Postgres when enabled.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    match cfg.storage.backend {
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            models::db::test_connection(&db).await?;
            if cfg.database.run_migrations {
                migration::Migrator::up(&db, None).await?;
                info!("database migrations applied");
            }
            info!(backend = "postgres", "storage ready");
            Ok(AppState::postgres(db))
        }
        StorageBackend::Memory => {
            info!(backend = "memory", "storage ready; data is lost on exit");
            Ok(AppState::memory())
        }
    }
}

/// Public entry: load config, then build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env()?;
    serve(cfg).await
}

/// Run the HTTP server with an already loaded config.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    init_logging(&cfg);

    let state = build_state(&cfg).await?;
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting newsfeed server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
