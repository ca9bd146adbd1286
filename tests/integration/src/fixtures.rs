//! Test fixtures and data generators
//!
//! Provides reusable guild data for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use invite_core::entities::{
    CodeInviteTotal, CustomInviteTotal, DisplayedMessage, JoinLeaveTimestamps,
    WindowedCodeInviteCount,
};
use invite_core::Snowflake;

use crate::fakes::FakeInviteStats;

pub const GUILD: Snowflake = Snowflake::new(100);
pub const CHANNEL: Snowflake = Snowflake::new(200);
pub const BOT: Snowflake = Snowflake::new(900);
pub const USER: Snowflake = Snowflake::new(901);

pub const ALICE: Snowflake = Snowflake::new(1);
pub const BOB: Snowflake = Snowflake::new(2);
pub const CAROL: Snowflake = Snowflake::new(3);

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn code_total(id: Snowflake, name: &str, uses: i64) -> CodeInviteTotal {
    CodeInviteTotal {
        inviter_id: id,
        inviter_name: Some(name.to_string()),
        total_uses: uses,
    }
}

pub fn bonus_total(id: Snowflake, name: &str, bonus: i64, auto: i64) -> CustomInviteTotal {
    CustomInviteTotal {
        member_id: id,
        member_name: Some(name.to_string()),
        total_bonus: bonus,
        total_auto: auto,
    }
}

pub fn windowed_count(id: Snowflake, name: &str, joins: i64) -> WindowedCodeInviteCount {
    WindowedCodeInviteCount {
        inviter_id: id,
        inviter_name: Some(name.to_string()),
        total_joins: joins,
    }
}

/// Member who joined on `joined` and never left
pub fn present(id: Snowflake, name: &str, joined: DateTime<Utc>) -> JoinLeaveTimestamps {
    JoinLeaveTimestamps {
        member_id: id,
        member_name: Some(name.to_string()),
        last_joined_at: Some(joined),
        last_left_at: None,
    }
}

/// Member whose last leave follows their last join
pub fn departed(
    id: Snowflake,
    name: &str,
    joined: DateTime<Utc>,
    left: DateTime<Utc>,
) -> JoinLeaveTimestamps {
    JoinLeaveTimestamps {
        member_id: id,
        member_name: Some(name.to_string()),
        last_joined_at: Some(joined),
        last_left_at: Some(left),
    }
}

/// Three ranked members:
/// Alice 15 (2 bonus, 3 in window), Bob 12 (10 in window), Carol 12 (1 bonus, 1 in window).
/// Carol has left the guild.
pub fn three_member_stats() -> FakeInviteStats {
    FakeInviteStats {
        code_totals: vec![
            code_total(ALICE, "Alice", 13),
            code_total(BOB, "Bob", 12),
            code_total(CAROL, "Carol", 11),
        ],
        bonus_totals: vec![
            bonus_total(ALICE, "Alice", 2, 0),
            bonus_total(CAROL, "Carol", 1, 0),
        ],
        windowed_code_counts: vec![
            windowed_count(ALICE, "Alice", 3),
            windowed_count(BOB, "Bob", 10),
            windowed_count(CAROL, "Carol", 1),
        ],
        timestamps: vec![
            present(ALICE, "Alice", at(2024, 1, 1)),
            present(BOB, "Bob", at(2024, 1, 1)),
            departed(CAROL, "Carol", at(2023, 6, 1), at(2024, 1, 1)),
        ],
        ..FakeInviteStats::default()
    }
}

/// `count` present inviters with strictly decreasing totals, ids `1..=count`
pub fn crowded_stats(count: i64) -> FakeInviteStats {
    let ids = 1..=count;
    FakeInviteStats {
        code_totals: ids
            .clone()
            .map(|id| code_total(Snowflake::new(id), &format!("member{id:02}"), 100 - id))
            .collect(),
        timestamps: ids
            .map(|id| present(Snowflake::new(id), &format!("member{id:02}"), at(2024, 1, 1)))
            .collect(),
        ..FakeInviteStats::default()
    }
}

/// Command message typed by a user
pub fn user_invocation() -> DisplayedMessage {
    DisplayedMessage {
        id: Snowflake::new(4_000),
        channel_id: CHANNEL,
        author_id: USER,
        editable: false,
    }
}

/// Message previously posted by the bot itself
pub fn bot_message() -> DisplayedMessage {
    DisplayedMessage {
        id: Snowflake::new(4_001),
        channel_id: CHANNEL,
        author_id: BOT,
        editable: true,
    }
}
