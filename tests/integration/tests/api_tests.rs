//! API Integration Tests
//!
//! Start the real router on an ephemeral port over in-memory storage.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::*;
use invite_core::entities::InviteCounts;
use reqwest::StatusCode;
use serde_json::Value;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start(FakeInviteStats::default(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start(FakeInviteStats::default(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_health_not_ready_when_storage_is_down() {
    let server = TestServer::start(FakeInviteStats::unavailable(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::SERVICE_UNAVAILABLE).await.unwrap();
    assert_eq!(body["checks"]["database"], "unhealthy");
}

// ============================================================================
// Leaderboard Tests
// ============================================================================

#[tokio::test]
async fn test_get_leaderboard() {
    let server = TestServer::start(three_member_stats(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/api/v1/guilds/100/leaderboard").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["title"], "Leaderboard");
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["entries"][0]["member_id"], "1");
    assert_eq!(body["entries"][0]["total"], 15);
    assert_eq!(body["entries"][1]["delta"], 1);
    assert_eq!(body["entries"][2]["name"], "Carol");
    assert_eq!(body["entries"][2]["present"], false);
    assert!(body["description"]
        .as_str()
        .unwrap()
        .contains("2. (+1) 🔺 <@2> 12 invites (0 bonus)"));
}

#[tokio::test]
async fn test_get_leaderboard_page_is_clamped() {
    let server = TestServer::start(crowded_stats(25), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server
        .get("/api/v1/guilds/100/leaderboard?page=7")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["page"], 3);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["entries"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["entries"][0]["position"], 21);
}

#[tokio::test]
async fn test_get_leaderboard_with_channel_filter() {
    let mut stats = FakeInviteStats::default();
    stats
        .channel_code_totals
        .insert(CHANNEL, vec![code_total(BOB, "Bob", 4)]);
    let server = TestServer::start(stats, FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server
        .get("/api/v1/guilds/100/leaderboard?channel_id=200")
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["title"], "Leaderboard for channel <#200>");
    assert_eq!(body["entries"][0]["member_id"], "2");
}

#[tokio::test]
async fn test_get_empty_leaderboard() {
    let server = TestServer::start(FakeInviteStats::default(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/api/v1/guilds/100/leaderboard").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["description"], "No invites!");
    assert_eq!(body["total_pages"], 0);
    assert_eq!(body["entries"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn test_get_leaderboard_invalid_guild_id() {
    let server = TestServer::start(FakeInviteStats::default(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/api/v1/guilds/abc/leaderboard").await.unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_get_leaderboard_invalid_query() {
    let server = TestServer::start(FakeInviteStats::default(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server
        .get("/api/v1/guilds/100/leaderboard?channel_id=general")
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");

    let response = server
        .get("/api/v1/guilds/100/leaderboard?page=-1")
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_get_leaderboard_storage_down() {
    let server = TestServer::start(FakeInviteStats::unavailable(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/api/v1/guilds/100/leaderboard").await.unwrap();
    let code = assert_error_code(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(code, "DATA_UNAVAILABLE");
}

// ============================================================================
// Member Tests
// ============================================================================

#[tokio::test]
async fn test_get_member_info() {
    let mut history = FakeMemberHistory::default();
    history.counts.insert(ALICE, InviteCounts { code: 13, custom: 2 });
    let server = TestServer::start(three_member_stats(), history)
        .await
        .expect("Failed to start server");

    let response = server.get("/api/v1/guilds/100/members/1").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["member_id"], "1");
    assert_eq!(body["title"], "Alice");
    let invites = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|field| field["name"] == "Invites")
        .unwrap();
    assert_eq!(invites["value"], "15 (2 bonus)");
}

#[tokio::test]
async fn test_get_departed_member_info() {
    let server = TestServer::start(three_member_stats(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/api/v1/guilds/100/members/3").await.unwrap();
    let code = assert_error_code(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_get_member_info_invalid_member_id() {
    let server = TestServer::start(FakeInviteStats::default(), FakeMemberHistory::default())
        .await
        .expect("Failed to start server");

    let response = server.get("/api/v1/guilds/100/members/me").await.unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}
