//! # invite-core
//!
//! Domain layer containing invite records, aggregate query rows, navigation
//! types, and the ports (storage and transport traits) the leaderboard engine
//! depends on. This crate has zero dependencies on infrastructure.

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    CodeInviteTotal, CustomInvite, CustomInviteTotal, DisplayedMessage, Embed, EmbedField,
    InviteCounts, JoinLeaveTimestamps, JoinRecord, MemberInviteRecord, NavigationSymbol,
    ReactionEvent, WindowedCodeInviteCount,
};
pub use error::DomainError;
pub use traits::{
    InviteStatsRepository, MemberHistoryRepository, MessageTransport, ReactionStream, RepoResult,
};
pub use value_objects::{Snowflake, SnowflakeParseError};
