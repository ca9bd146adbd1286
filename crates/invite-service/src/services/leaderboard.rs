//! Leaderboard service
//!
//! Fetches the four aggregate sources, merges and ranks them, resolves
//! presence for the ranked members and either answers with one page or runs
//! an interactive navigation session over a message transport.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use invite_core::entities::{DisplayedMessage, Embed};
use invite_core::traits::MessageTransport;
use invite_core::Snowflake;

use crate::dto::{LeaderboardEntryResponse, LeaderboardPageResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::merger::InviteSources;
use super::pagination::{show_embed, PaginationController, SessionSummary};
use super::presence::{presence_map, PresenceMap};
use super::render::{leaderboard_title, LeaderboardSnapshot, NO_INVITES};

/// Leaderboard service
pub struct LeaderboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LeaderboardService<'a> {
    /// Create a new LeaderboardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Compute the leaderboard as of now
    pub async fn snapshot(
        &self,
        guild_id: Snowflake,
        channel_filter: Option<Snowflake>,
    ) -> ServiceResult<LeaderboardSnapshot> {
        self.snapshot_at(guild_id, channel_filter, Utc::now()).await
    }

    /// Compute the leaderboard with the window ending at `now`
    #[instrument(skip(self))]
    pub async fn snapshot_at(
        &self,
        guild_id: Snowflake,
        channel_filter: Option<Snowflake>,
        now: DateTime<Utc>,
    ) -> ServiceResult<LeaderboardSnapshot> {
        let settings = self.ctx.leaderboard_settings();
        let sources = self.fetch_sources(guild_id, channel_filter, now - settings.window).await?;
        sources.validate().map_err(ServiceError::DataUnavailable)?;

        let snapshot = LeaderboardSnapshot::new(
            sources.merge(),
            PresenceMap::new(),
            channel_filter,
            settings.page_size,
        );
        if snapshot.is_empty() {
            return Ok(snapshot);
        }

        let timestamps = self
            .ctx
            .invite_stats_repo()
            .last_join_leave_timestamps(guild_id, snapshot.standings().current())
            .await
            .map_err(ServiceError::DataUnavailable)?;

        Ok(snapshot.with_presence(presence_map(&timestamps)))
    }

    async fn fetch_sources(
        &self,
        guild_id: Snowflake,
        channel_filter: Option<Snowflake>,
        since: DateTime<Utc>,
    ) -> ServiceResult<InviteSources> {
        let repo = self.ctx.invite_stats_repo();

        let (code_totals, bonus_totals, windowed_code_counts, windowed_bonus_totals) =
            tokio::try_join!(
                repo.code_invite_totals(guild_id, channel_filter),
                repo.bonus_invite_totals(guild_id),
                repo.windowed_code_invite_counts(guild_id, since),
                repo.windowed_bonus_invite_totals(guild_id, since)
            )
            .map_err(ServiceError::DataUnavailable)?;

        Ok(InviteSources {
            code_totals,
            bonus_totals,
            windowed_code_counts,
            windowed_bonus_totals,
        })
    }

    /// One rendered page for read-only consumers
    #[instrument(skip(self))]
    pub async fn page(
        &self,
        guild_id: Snowflake,
        channel_filter: Option<Snowflake>,
        requested_page: Option<u32>,
    ) -> ServiceResult<LeaderboardPageResponse> {
        let snapshot = self.snapshot(guild_id, channel_filter).await?;
        Ok(page_response(&snapshot, requested_page))
    }

    /// Run an interactive session answering the `invocation` message
    ///
    /// An empty leaderboard shows a single notice and never waits for input.
    pub async fn run_session(
        &self,
        transport: &dyn MessageTransport,
        invocation: &DisplayedMessage,
        guild_id: Snowflake,
        channel_filter: Option<Snowflake>,
        requested_page: Option<u32>,
    ) -> ServiceResult<SessionSummary> {
        info!(
            guild_id = %guild_id,
            author_id = %invocation.author_id,
            page = ?requested_page,
            channel_filter = ?channel_filter,
            "Leaderboard requested"
        );

        let snapshot = self.snapshot(guild_id, channel_filter).await?;

        if snapshot.is_empty() {
            let embed = Embed::new(leaderboard_title(channel_filter), NO_INVITES);
            let message = show_embed(transport, invocation, &embed).await?;
            return Ok(SessionSummary {
                final_page: 0,
                pages_rendered: 1,
                message,
            });
        }

        let start_page = snapshot.page_index(requested_page);
        PaginationController::new(transport, &snapshot, self.ctx.leaderboard_settings())
            .run(invocation, start_page)
            .await
    }
}

fn page_response(
    snapshot: &LeaderboardSnapshot,
    requested_page: Option<u32>,
) -> LeaderboardPageResponse {
    if snapshot.is_empty() {
        return LeaderboardPageResponse {
            title: snapshot.title(),
            description: NO_INVITES.to_string(),
            page: 1,
            total_pages: 0,
            entries: Vec::new(),
        };
    }

    let index = snapshot.page_index(requested_page);
    LeaderboardPageResponse {
        title: snapshot.title(),
        description: snapshot.description(index),
        page: index + 1,
        total_pages: snapshot.total_pages(),
        entries: snapshot
            .entries(index)
            .iter()
            .map(LeaderboardEntryResponse::from)
            .collect(),
    }
}
