//! Repository traits (ports) - define the interface for data access
//!
//! The storage collaborator owns raw join, leave, invite-code and custom
//! invite records. The domain only ever sees the aggregate shapes below.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{
    CodeInviteTotal, CustomInvite, CustomInviteTotal, InviteCounts, JoinLeaveTimestamps,
    JoinRecord, WindowedCodeInviteCount,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Invite Stats Repository
// ============================================================================

#[async_trait]
pub trait InviteStatsRepository: Send + Sync {
    /// Sum of invite code uses per inviter, optionally limited to codes of one channel
    async fn code_invite_totals(
        &self,
        guild_id: Snowflake,
        channel_filter: Option<Snowflake>,
    ) -> RepoResult<Vec<CodeInviteTotal>>;

    /// Sum of manual and generated custom invites per member
    async fn bonus_invite_totals(&self, guild_id: Snowflake) -> RepoResult<Vec<CustomInviteTotal>>;

    /// Count of joins after `since` attributed to each inviter via invite code
    async fn windowed_code_invite_counts(
        &self,
        guild_id: Snowflake,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<WindowedCodeInviteCount>>;

    /// Custom invites created after `since`, summed per member
    async fn windowed_bonus_invite_totals(
        &self,
        guild_id: Snowflake,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<CustomInviteTotal>>;

    /// Most recent join and leave of each listed member within the guild
    async fn last_join_leave_timestamps(
        &self,
        guild_id: Snowflake,
        member_ids: &[Snowflake],
    ) -> RepoResult<Vec<JoinLeaveTimestamps>>;

    /// Check that the backing store is reachable
    async fn health_check(&self) -> RepoResult<()>;
}

// ============================================================================
// Member History Repository
// ============================================================================

#[async_trait]
pub trait MemberHistoryRepository: Send + Sync {
    /// Code and custom invite counts credited to a member
    async fn invite_counts(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<InviteCounts>;

    /// Number of recorded joins of a member
    async fn join_count(&self, guild_id: Snowflake, member_id: Snowflake) -> RepoResult<i64>;

    /// Joins of a member with the matched inviter, newest first
    async fn joins_with_inviters(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<JoinRecord>>;

    /// Custom invites credited to a member, newest first
    async fn custom_invites(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<CustomInvite>>;
}
