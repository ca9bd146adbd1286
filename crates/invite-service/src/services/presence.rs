//! Presence resolver - is a ranked member still in the guild

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use invite_core::entities::JoinLeaveTimestamps;
use invite_core::Snowflake;

/// Presence of each member returned by the timestamp query
pub type PresenceMap = HashMap<Snowflake, bool>;

/// A member is present unless their most recent leave is not before their most recent join
pub fn is_present(
    last_joined_at: Option<DateTime<Utc>>,
    last_left_at: Option<DateTime<Utc>>,
) -> bool {
    match (last_joined_at, last_left_at) {
        (_, None) => true,
        (None, Some(_)) => false,
        (Some(joined), Some(left)) => left < joined,
    }
}

pub fn presence_map(rows: &[JoinLeaveTimestamps]) -> PresenceMap {
    rows.iter()
        .map(|row| (row.member_id, is_present(row.last_joined_at, row.last_left_at)))
        .collect()
}
