//! PostgreSQL implementation of InviteStatsRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use invite_core::entities::{
    CodeInviteTotal, CustomInviteTotal, JoinLeaveTimestamps, WindowedCodeInviteCount,
};
use invite_core::traits::{InviteStatsRepository, RepoResult};
use invite_core::value_objects::Snowflake;

use crate::models::{
    BonusInviteTotalModel, CodeInviteTotalModel, JoinLeaveTimestampsModel, WindowedCodeInviteModel,
};

use super::error::map_db_error;

/// PostgreSQL implementation of InviteStatsRepository
#[derive(Clone)]
pub struct PgInviteStatsRepository {
    pool: PgPool,
}

impl PgInviteStatsRepository {
    /// Create a new PgInviteStatsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn bonus_totals_since(
        &self,
        guild_id: Snowflake,
        since: Option<DateTime<Utc>>,
    ) -> RepoResult<Vec<CustomInviteTotal>> {
        let models = sqlx::query_as::<_, BonusInviteTotalModel>(
            r#"
            SELECT ci.member_id,
                   m.name AS member_name,
                   COALESCE(SUM(ci.amount) FILTER (WHERE NOT ci.generated), 0)::BIGINT
                       AS total_bonus,
                   COALESCE(SUM(ci.amount) FILTER (WHERE ci.generated), 0)::BIGINT
                       AS total_auto
            FROM custom_invites ci
            LEFT JOIN members m ON m.id = ci.member_id
            WHERE ci.guild_id = $1
              AND ($2::TIMESTAMPTZ IS NULL OR ci.created_at > $2)
            GROUP BY ci.member_id, m.name
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(CustomInviteTotal::from).collect())
    }
}

#[async_trait]
impl InviteStatsRepository for PgInviteStatsRepository {
    #[instrument(skip(self))]
    async fn code_invite_totals(
        &self,
        guild_id: Snowflake,
        channel_filter: Option<Snowflake>,
    ) -> RepoResult<Vec<CodeInviteTotal>> {
        let models = sqlx::query_as::<_, CodeInviteTotalModel>(
            r#"
            SELECT ic.inviter_id,
                   m.name AS inviter_name,
                   COALESCE(SUM(ic.uses), 0)::BIGINT AS total_uses
            FROM invite_codes ic
            LEFT JOIN members m ON m.id = ic.inviter_id
            WHERE ic.guild_id = $1
              AND ($2::BIGINT IS NULL OR ic.channel_id = $2)
            GROUP BY ic.inviter_id, m.name
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(channel_filter.map(Snowflake::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(CodeInviteTotal::from).collect())
    }

    #[instrument(skip(self))]
    async fn bonus_invite_totals(&self, guild_id: Snowflake) -> RepoResult<Vec<CustomInviteTotal>> {
        self.bonus_totals_since(guild_id, None).await
    }

    #[instrument(skip(self))]
    async fn windowed_code_invite_counts(
        &self,
        guild_id: Snowflake,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<WindowedCodeInviteCount>> {
        let models = sqlx::query_as::<_, WindowedCodeInviteModel>(
            r#"
            SELECT ic.inviter_id,
                   m.name AS inviter_name,
                   COUNT(j.id)::BIGINT AS total_joins
            FROM joins j
            INNER JOIN invite_codes ic ON ic.code = j.exact_match_code
            LEFT JOIN members m ON m.id = ic.inviter_id
            WHERE j.guild_id = $1 AND j.created_at > $2
            GROUP BY ic.inviter_id, m.name
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(WindowedCodeInviteCount::from).collect())
    }

    #[instrument(skip(self))]
    async fn windowed_bonus_invite_totals(
        &self,
        guild_id: Snowflake,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<CustomInviteTotal>> {
        self.bonus_totals_since(guild_id, Some(since)).await
    }

    #[instrument(skip(self, member_ids), fields(count = member_ids.len()))]
    async fn last_join_leave_timestamps(
        &self,
        guild_id: Snowflake,
        member_ids: &[Snowflake],
    ) -> RepoResult<Vec<JoinLeaveTimestamps>> {
        if member_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = member_ids.iter().map(|id| id.into_inner()).collect();

        let models = sqlx::query_as::<_, JoinLeaveTimestampsModel>(
            r#"
            SELECT m.id AS member_id,
                   m.name AS member_name,
                   (SELECT MAX(j.created_at) FROM joins j
                    WHERE j.guild_id = $1 AND j.member_id = m.id) AS last_joined_at,
                   (SELECT MAX(l.created_at) FROM leaves l
                    WHERE l.guild_id = $1 AND l.member_id = m.id) AS last_left_at
            FROM members m
            WHERE m.id = ANY($2)
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(JoinLeaveTimestamps::from).collect())
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
