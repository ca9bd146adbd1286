//! Row models for a single member's history

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct InviteCountsModel {
    pub code: i64,
    pub custom: i64,
}

/// Join row with the inviter resolved through `exact_match_code`
#[derive(Debug, Clone, FromRow)]
pub struct JoinWithInviterModel {
    pub created_at: DateTime<Utc>,
    pub inviter_id: Option<i64>,
}

/// Database model for custom_invites table
#[derive(Debug, Clone, FromRow)]
pub struct CustomInviteModel {
    pub amount: i64,
    pub creator_id: Option<i64>,
    pub reason: Option<String>,
    pub generated: bool,
    pub created_at: DateTime<Utc>,
}
