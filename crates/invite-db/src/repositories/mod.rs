//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in invite-core.

mod error;
mod invite_stats;
mod member_history;

pub use invite_stats::PgInviteStatsRepository;
pub use member_history::PgMemberHistoryRepository;
