//! Leaderboard handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use invite_core::Snowflake;
use invite_service::{LeaderboardPageResponse, LeaderboardQuery, LeaderboardService};

use crate::extractors::GuildIdPath;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Get one page of the guild's invite leaderboard
///
/// GET /api/v1/guilds/{guild_id}/leaderboard?page=&channel_id=
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(path): Path<GuildIdPath>,
    query: Result<Query<LeaderboardQuery>, QueryRejection>,
) -> ApiResult<Json<LeaderboardPageResponse>> {
    let guild_id = path.guild_id()?;
    let Query(query) = query.map_err(|e| ApiError::invalid_query(e.body_text()))?;

    let channel_filter = query
        .channel_id
        .as_deref()
        .map(Snowflake::parse)
        .transpose()
        .map_err(|_| ApiError::invalid_query("Invalid channel_id format"))?;

    let service = LeaderboardService::new(state.service_context());
    let page = service.page(guild_id, channel_filter, query.page).await?;

    Ok(Json(page))
}
