//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use invite_core::entities::EmbedField;
use serde::Serialize;

// ============================================================================
// Leaderboard Responses
// ============================================================================

/// One ranked member
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntryResponse {
    pub position: usize,
    pub member_id: String,
    pub name: String,
    pub present: bool,
    pub total: i64,
    pub bonus: i64,
    pub delta: i64,
}

/// One rendered leaderboard page
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardPageResponse {
    pub title: String,
    pub description: String,
    /// 1-based page number
    pub page: usize,
    pub total_pages: usize,
    pub entries: Vec<LeaderboardEntryResponse>,
}

// ============================================================================
// Member Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MemberInfoResponse {
    pub member_id: String,
    pub title: String,
    pub fields: Vec<EmbedField>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
