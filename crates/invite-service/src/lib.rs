//! # invite-service
//!
//! Application layer containing the invite leaderboard engine, the
//! interactive pagination session, the member info report and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    HealthChecks, HealthResponse, LeaderboardEntryResponse, LeaderboardPageResponse,
    LeaderboardQuery, MemberInfoResponse, ReadinessResponse,
};
pub use services::{
    collect_navigation, LeaderboardService, LeaderboardSettings, LeaderboardSnapshot,
    MemberInfoService, NavigationFilter, NavigationTally, PaginationController, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SessionSummary,
};
