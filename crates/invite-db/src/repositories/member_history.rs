//! PostgreSQL implementation of MemberHistoryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use invite_core::entities::{CustomInvite, InviteCounts, JoinRecord};
use invite_core::traits::{MemberHistoryRepository, RepoResult};
use invite_core::value_objects::Snowflake;

use crate::models::{CustomInviteModel, InviteCountsModel, JoinWithInviterModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MemberHistoryRepository
#[derive(Clone)]
pub struct PgMemberHistoryRepository {
    pool: PgPool,
}

impl PgMemberHistoryRepository {
    /// Create a new PgMemberHistoryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberHistoryRepository for PgMemberHistoryRepository {
    #[instrument(skip(self))]
    async fn invite_counts(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<InviteCounts> {
        let model = sqlx::query_as::<_, InviteCountsModel>(
            r#"
            SELECT
                COALESCE((SELECT SUM(uses) FROM invite_codes
                          WHERE guild_id = $1 AND inviter_id = $2), 0)::BIGINT AS code,
                COALESCE((SELECT SUM(amount) FROM custom_invites
                          WHERE guild_id = $1 AND member_id = $2), 0)::BIGINT AS custom
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn join_count(&self, guild_id: Snowflake, member_id: Snowflake) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)::BIGINT FROM joins WHERE guild_id = $1 AND member_id = $2
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn joins_with_inviters(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<JoinRecord>> {
        let models = sqlx::query_as::<_, JoinWithInviterModel>(
            r#"
            SELECT j.created_at, ic.inviter_id
            FROM joins j
            LEFT JOIN invite_codes ic ON ic.code = j.exact_match_code
            WHERE j.guild_id = $1 AND j.member_id = $2
            ORDER BY j.created_at DESC, j.id DESC
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(JoinRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn custom_invites(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
    ) -> RepoResult<Vec<CustomInvite>> {
        let models = sqlx::query_as::<_, CustomInviteModel>(
            r#"
            SELECT amount, creator_id, reason, generated, created_at
            FROM custom_invites
            WHERE guild_id = $1 AND member_id = $2
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(guild_id.into_inner())
        .bind(member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(CustomInvite::from).collect())
    }
}
