//! Member info service
//!
//! Builds the per-member report: invite counts, join history grouped by
//! relative time and inviter, and bonus invites received.

use chrono::{DateTime, Utc};
use tracing::instrument;

use invite_core::entities::{CustomInvite, Embed, JoinRecord};
use invite_core::Snowflake;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::presence::is_present;
use super::render::UNKNOWN_MEMBER;
use super::time_format::time_ago;

pub const NO_JOIN_HISTORY: &str = "unknown (this only works for new members)";
pub const NO_BONUSES: &str = "This member has received no bonuses so far";

/// Member info service
pub struct MemberInfoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberInfoService<'a> {
    /// Create a new MemberInfoService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Report on a member currently in the guild
    #[instrument(skip(self))]
    pub async fn member_info(
        &self,
        guild_id: Snowflake,
        member_id: Snowflake,
        now: DateTime<Utc>,
    ) -> ServiceResult<Embed> {
        let timestamps = self
            .ctx
            .invite_stats_repo()
            .last_join_leave_timestamps(guild_id, &[member_id])
            .await
            .map_err(ServiceError::DataUnavailable)?
            .into_iter()
            .find(|row| row.member_id == member_id)
            .filter(|row| is_present(row.last_joined_at, row.last_left_at))
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        let history = self.ctx.member_history_repo();
        let (counts, join_count, joins, customs) = tokio::try_join!(
            history.invite_counts(guild_id, member_id),
            history.join_count(guild_id, member_id),
            history.joins_with_inviters(guild_id, member_id),
            history.custom_invites(guild_id, member_id)
        )
        .map_err(ServiceError::DataUnavailable)?;

        let last_joined = timestamps
            .last_joined_at
            .map_or_else(|| "unknown".to_string(), |at| time_ago(at, now));

        let title = timestamps
            .member_name
            .unwrap_or_else(|| UNKNOWN_MEMBER.to_string());

        Ok(Embed::new(title, "")
            .with_field("Last joined", last_joined, true)
            .with_field(
                "Invites",
                format!("{} ({} bonus)", counts.total(), counts.custom),
                true,
            )
            .with_field("Joined", format!("{} times", join_count.max(1)), true)
            .with_field("Joins", join_history_text(&joins, now), false)
            .with_field("Bonus invites", bonus_history_text(&customs, now), false))
    }
}

/// Joins grouped by relative time, then by inviter, newest first
pub fn join_history_text(joins: &[JoinRecord], now: DateTime<Utc>) -> String {
    if joins.is_empty() {
        return NO_JOIN_HISTORY.to_string();
    }

    // (bucket, [(inviter, count)]) in first-seen order
    let mut buckets: Vec<(String, Vec<(Option<Snowflake>, usize)>)> = Vec::new();
    for join in joins {
        let bucket = time_ago(join.created_at, now);
        let index = match buckets.iter().position(|(text, _)| *text == bucket) {
            Some(index) => index,
            None => {
                buckets.push((bucket, Vec::new()));
                buckets.len() - 1
            }
        };

        let inviters = &mut buckets[index].1;
        match inviters.iter_mut().find(|(id, _)| *id == join.inviter_id) {
            Some((_, count)) => *count += 1,
            None => inviters.push((join.inviter_id, 1)),
        }
    }

    buckets
        .iter()
        .map(|(bucket, inviters)| {
            let total: usize = inviters.iter().map(|(_, count)| count).sum();
            let total_text = if total > 1 {
                format!("{total} times ")
            } else {
                String::new()
            };

            let invited_by = inviters
                .iter()
                .map(|(inviter, count)| {
                    let who = inviter.map_or_else(|| "unknown".to_string(), |id| id.mention());
                    if *count > 1 {
                        format!("{who} ({count} times)")
                    } else {
                        who
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");

            format!("{total_text}{bucket}, invited by: {invited_by}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per custom invite, newest first
pub fn bonus_history_text(customs: &[CustomInvite], now: DateTime<Utc>) -> String {
    if customs.is_empty() {
        return NO_BONUSES.to_string();
    }

    customs
        .iter()
        .map(|invite| {
            let creator = invite
                .creator_id
                .map_or_else(|| "unknown".to_string(), |id| id.mention());
            let reason = invite
                .reason
                .as_deref()
                .filter(|r| !r.is_empty())
                .map(|r| format!(", reason: {r}"))
                .unwrap_or_default();

            format!(
                "{} from {} {}{}",
                invite.amount,
                creator,
                time_ago(invite.created_at, now),
                reason
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
