//! Ports - traits the domain needs from infrastructure

mod repositories;
mod transport;

pub use repositories::{InviteStatsRepository, MemberHistoryRepository, RepoResult};
pub use transport::{MessageTransport, ReactionStream};
