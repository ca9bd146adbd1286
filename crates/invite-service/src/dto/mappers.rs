//! Service value to DTO mappers

use invite_core::entities::Embed;
use invite_core::Snowflake;

use crate::services::render::LeaderboardEntry;

use super::responses::{LeaderboardEntryResponse, MemberInfoResponse};

impl From<&LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            position: entry.position,
            member_id: entry.member_id.to_string(),
            name: entry.name.clone(),
            present: entry.present,
            total: entry.total,
            bonus: entry.bonus,
            delta: entry.delta,
        }
    }
}

impl MemberInfoResponse {
    pub fn from_embed(member_id: Snowflake, embed: Embed) -> Self {
        Self {
            member_id: member_id.to_string(),
            title: embed.title,
            fields: embed.fields,
        }
    }
}
