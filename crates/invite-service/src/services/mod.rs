//! Business logic services
//!
//! The leaderboard engine (merger, ranking, presence, renderer), the
//! interactive pagination session and the member info report.

pub mod collector;
pub mod context;
pub mod error;
pub mod leaderboard;
pub mod member_info;
pub mod merger;
pub mod pagination;
pub mod presence;
pub mod ranking;
pub mod render;
pub mod time_format;

// Re-export all services for convenience
pub use collector::{collect_navigation, NavigationFilter, NavigationTally};
pub use context::{LeaderboardSettings, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use leaderboard::LeaderboardService;
pub use member_info::MemberInfoService;
pub use merger::{InviteLedger, InviteSources};
pub use pagination::{PaginationController, SessionState, SessionSummary};
pub use presence::{is_present, PresenceMap};
pub use ranking::{compare_names, rank_at_window_start, rank_current, rank_delta, Standings};
pub use render::{LeaderboardEntry, LeaderboardSnapshot};
pub use time_format::time_ago;
