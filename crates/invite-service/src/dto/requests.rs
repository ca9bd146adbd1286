//! Request DTOs for API endpoints

use serde::Deserialize;

/// Query string of the leaderboard endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardQuery {
    /// 1-based page, clamped into range
    pub page: Option<u32>,
    /// Restrict code invites to one channel
    pub channel_id: Option<String>,
}
