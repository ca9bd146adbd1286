//! Member info handlers

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use invite_service::{MemberInfoResponse, MemberInfoService};

use crate::extractors::GuildMemberPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the invite report of a member currently in the guild
///
/// GET /api/v1/guilds/{guild_id}/members/{member_id}
pub async fn get_member_info(
    State(state): State<AppState>,
    Path(path): Path<GuildMemberPath>,
) -> ApiResult<Json<MemberInfoResponse>> {
    let guild_id = path.guild_id()?;
    let member_id = path.member_id()?;

    let service = MemberInfoService::new(state.service_context());
    let embed = service.member_info(guild_id, member_id, Utc::now()).await?;

    Ok(Json(MemberInfoResponse::from_embed(member_id, embed)))
}
