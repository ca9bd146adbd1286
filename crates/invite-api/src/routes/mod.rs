//! Route definitions
//!
//! Read-only leaderboard routes mounted under /api/v1.

use axum::{routing::get, Router};

use crate::handlers::{health, leaderboard, members};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/guilds/:guild_id/leaderboard",
            get(leaderboard::get_leaderboard),
        )
        .route(
            "/guilds/:guild_id/members/:member_id",
            get(members::get_member_info),
        )
}
