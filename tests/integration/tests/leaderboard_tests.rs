//! Leaderboard computation tests
//!
//! Run with: cargo test -p integration-tests --test leaderboard_tests

use std::sync::Arc;

use chrono::Duration;
use integration_tests::*;
use invite_core::Snowflake;
use invite_service::{LeaderboardService, LeaderboardSettings, ServiceContextBuilder};

#[tokio::test]
async fn test_three_member_standings() {
    let ctx = service_context(three_member_stats(), FakeMemberHistory::default());

    let page = LeaderboardService::new(&ctx).page(GUILD, None, None).await.unwrap();

    let ids: Vec<&str> = page.entries.iter().map(|e| e.member_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    let deltas: Vec<i64> = page.entries.iter().map(|e| e.delta).collect();
    assert_eq!(deltas, vec![0, 1, -1]);
    let presence: Vec<bool> = page.entries.iter().map(|e| e.present).collect();
    assert_eq!(presence, vec![true, true, false]);

    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(!page.description.contains("Page "));
}

#[tokio::test]
async fn test_window_start_follows_settings() {
    let settings = LeaderboardSettings {
        window: Duration::hours(48),
        ..LeaderboardSettings::default()
    };
    let stats = Arc::new(three_member_stats());
    let ctx = ServiceContextBuilder::new()
        .invite_stats_repo(stats.clone())
        .member_history_repo(Arc::new(FakeMemberHistory::default()))
        .leaderboard_settings(settings)
        .build()
        .unwrap();
    let now = at(2024, 3, 10);

    LeaderboardService::new(&ctx)
        .snapshot_at(GUILD, None, now)
        .await
        .unwrap();

    let starts = stats.window_starts.lock();
    assert_eq!(starts.len(), 2);
    assert!(starts.iter().all(|since| *since == at(2024, 3, 8)));
}

#[tokio::test]
async fn test_presence_is_resolved_for_ranked_members_only() {
    let mut stats = three_member_stats();
    stats
        .windowed_code_counts
        .push(windowed_count(Snowflake::new(4), "Dave", 6));
    let stats = Arc::new(stats);
    let ctx = ServiceContextBuilder::new()
        .invite_stats_repo(stats.clone())
        .member_history_repo(Arc::new(FakeMemberHistory::default()))
        .build()
        .unwrap();

    let page = LeaderboardService::new(&ctx).page(GUILD, None, None).await.unwrap();
    assert_eq!(page.entries.len(), 3);

    let requests = stats.presence_requests.lock();
    assert_eq!(requests.len(), 1);
    let mut requested = requests[0].clone();
    requested.sort();
    assert_eq!(requested, vec![ALICE, BOB, CAROL]);
}

#[tokio::test]
async fn test_channel_filter_restricts_code_totals_only() {
    let mut stats = three_member_stats();
    stats
        .channel_code_totals
        .insert(CHANNEL, vec![code_total(BOB, "Bob", 4)]);
    let ctx = service_context(stats, FakeMemberHistory::default());

    let page = LeaderboardService::new(&ctx)
        .page(GUILD, Some(CHANNEL), None)
        .await
        .unwrap();

    assert_eq!(page.title, "Leaderboard for channel <#200>");
    // Bonus totals still count for Alice and Carol
    let totals: Vec<(&str, i64)> = page
        .entries
        .iter()
        .map(|e| (e.member_id.as_str(), e.total))
        .collect();
    assert_eq!(totals, vec![("2", 4), ("1", 2), ("3", 1)]);
    let deltas: Vec<i64> = page.entries.iter().map(|e| e.delta).collect();
    assert_eq!(deltas, vec![2, 0, -2]);
}

#[tokio::test]
async fn test_page_rendering_is_repeatable() {
    let ctx = service_context(crowded_stats(25), FakeMemberHistory::default());
    let service = LeaderboardService::new(&ctx);

    let first = service.page(GUILD, None, Some(2)).await.unwrap();
    let second = service.page(GUILD, None, Some(2)).await.unwrap();

    assert_eq!(first.description, second.description);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.entries.first().map(|e| e.position), Some(11));
    assert_eq!(first.entries.last().map(|e| e.position), Some(20));
}

#[tokio::test]
async fn test_removed_bonus_invites_lower_standing() {
    let stats = FakeInviteStats {
        code_totals: vec![
            code_total(ALICE, "Alice", 5),
            code_total(BOB, "Bob", 4),
            code_total(CAROL, "Carol", 3),
        ],
        bonus_totals: vec![bonus_total(BOB, "Bob", -2, 0)],
        timestamps: vec![
            present(ALICE, "Alice", at(2024, 1, 1)),
            present(BOB, "Bob", at(2024, 1, 1)),
            present(CAROL, "Carol", at(2024, 1, 1)),
        ],
        ..FakeInviteStats::default()
    };
    let ctx = service_context(stats, FakeMemberHistory::default());

    let page = LeaderboardService::new(&ctx).page(GUILD, None, None).await.unwrap();

    let totals: Vec<(&str, i64)> = page
        .entries
        .iter()
        .map(|e| (e.member_id.as_str(), e.total))
        .collect();
    assert_eq!(totals, vec![("1", 5), ("3", 3), ("2", 2)]);
    assert_eq!(page.entries[2].bonus, -2);
    assert!(page.description.contains("<@2> 2 invites (-2 bonus)"));
}
