//! Database models - structs that map directly to query result rows

mod invite_stats;
mod member_history;

pub use invite_stats::{
    BonusInviteTotalModel, CodeInviteTotalModel, JoinLeaveTimestampsModel, WindowedCodeInviteModel,
};
pub use member_history::{CustomInviteModel, InviteCountsModel, JoinWithInviterModel};
