//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs for query parameters
//! - Response DTOs for serializing API outputs
//! - Mappers for converting service values to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::LeaderboardQuery;

pub use responses::{
    HealthChecks, HealthResponse, LeaderboardEntryResponse, LeaderboardPageResponse,
    MemberInfoResponse, ReadinessResponse,
};
