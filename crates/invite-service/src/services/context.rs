//! Service context - dependency container for services
//!
//! Holds the storage ports and leaderboard settings needed by services.

use std::sync::Arc;
use std::time::Duration;

use invite_common::LeaderboardConfig;
use invite_core::traits::{InviteStatsRepository, MemberHistoryRepository};

use super::error::{ServiceError, ServiceResult};

/// Tunables for leaderboard rendering and navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardSettings {
    /// Ranked members per page
    pub page_size: usize,
    /// Wall-clock bound of one wait for navigation input
    pub navigation_timeout: Duration,
    /// Trailing window used for rank deltas
    pub window: chrono::Duration,
    /// Qualifying navigation events collected per wait
    pub max_navigation_events: usize,
}

impl Default for LeaderboardSettings {
    fn default() -> Self {
        Self::from(&LeaderboardConfig::default())
    }
}

impl From<&LeaderboardConfig> for LeaderboardSettings {
    fn from(config: &LeaderboardConfig) -> Self {
        let window = chrono::Duration::try_hours(config.window_hours.max(1))
            .unwrap_or_else(|| chrono::Duration::days(1));

        Self {
            page_size: config.page_size.max(1),
            navigation_timeout: Duration::from_secs(config.navigation_timeout_secs),
            window,
            max_navigation_events: config.max_navigation_events.max(1),
        }
    }
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    invite_stats_repo: Arc<dyn InviteStatsRepository>,
    member_history_repo: Arc<dyn MemberHistoryRepository>,

    // Settings
    leaderboard: LeaderboardSettings,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        invite_stats_repo: Arc<dyn InviteStatsRepository>,
        member_history_repo: Arc<dyn MemberHistoryRepository>,
        leaderboard: LeaderboardSettings,
    ) -> Self {
        Self {
            invite_stats_repo,
            member_history_repo,
            leaderboard,
        }
    }

    // === Repositories ===

    /// Get the aggregate invite statistics repository
    pub fn invite_stats_repo(&self) -> &dyn InviteStatsRepository {
        self.invite_stats_repo.as_ref()
    }

    /// Get the member history repository
    pub fn member_history_repo(&self) -> &dyn MemberHistoryRepository {
        self.member_history_repo.as_ref()
    }

    // === Settings ===

    pub fn leaderboard_settings(&self) -> &LeaderboardSettings {
        &self.leaderboard
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("leaderboard", &self.leaderboard)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    invite_stats_repo: Option<Arc<dyn InviteStatsRepository>>,
    member_history_repo: Option<Arc<dyn MemberHistoryRepository>>,
    leaderboard: Option<LeaderboardSettings>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invite_stats_repo(mut self, repo: Arc<dyn InviteStatsRepository>) -> Self {
        self.invite_stats_repo = Some(repo);
        self
    }

    pub fn member_history_repo(mut self, repo: Arc<dyn MemberHistoryRepository>) -> Self {
        self.member_history_repo = Some(repo);
        self
    }

    pub fn leaderboard_settings(mut self, settings: LeaderboardSettings) -> Self {
        self.leaderboard = Some(settings);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.invite_stats_repo
                .ok_or_else(|| ServiceError::validation("invite_stats_repo is required"))?,
            self.member_history_repo
                .ok_or_else(|| ServiceError::validation("member_history_repo is required"))?,
            self.leaderboard.unwrap_or_default(),
        ))
    }
}
