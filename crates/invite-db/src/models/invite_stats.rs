//! Aggregate row models for the leaderboard queries
//!
//! Names come from a LEFT JOIN on `members` and may be missing.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of `SUM(invite_codes.uses)` grouped by inviter
#[derive(Debug, Clone, FromRow)]
pub struct CodeInviteTotalModel {
    pub inviter_id: i64,
    pub inviter_name: Option<String>,
    pub total_uses: i64,
}

/// Row of custom invite sums grouped by member
#[derive(Debug, Clone, FromRow)]
pub struct BonusInviteTotalModel {
    pub member_id: i64,
    pub member_name: Option<String>,
    pub total_bonus: i64,
    pub total_auto: i64,
}

/// Row of joins inside the window grouped by inviter
#[derive(Debug, Clone, FromRow)]
pub struct WindowedCodeInviteModel {
    pub inviter_id: i64,
    pub inviter_name: Option<String>,
    pub total_joins: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct JoinLeaveTimestampsModel {
    pub member_id: i64,
    pub member_name: Option<String>,
    pub last_joined_at: Option<DateTime<Utc>>,
    pub last_left_at: Option<DateTime<Utc>>,
}
