//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use invite_common::{AppConfig, AppError};
use invite_db::{create_pool, run_migrations, PgInviteStatsRepository, PgMemberHistoryRepository};
use invite_service::{LeaderboardSettings, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let is_development = state.config().app.env.is_development();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router, is_development);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = invite_db::DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    let invite_stats_repo = Arc::new(PgInviteStatsRepository::new(pool.clone()));
    let member_history_repo = Arc::new(PgMemberHistoryRepository::new(pool));

    let service_context = ServiceContextBuilder::new()
        .invite_stats_repo(invite_stats_repo)
        .member_history_repo(member_history_repo)
        .leaderboard_settings(LeaderboardSettings::from(&config.leaderboard))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
