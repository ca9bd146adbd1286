//! Domain entities - core business objects

mod aggregates;
mod embed;
mod invite_record;
mod member_history;
mod navigation;

pub use aggregates::{
    CodeInviteTotal, CustomInviteTotal, JoinLeaveTimestamps, WindowedCodeInviteCount,
};
pub use embed::{Embed, EmbedField};
pub use invite_record::MemberInviteRecord;
pub use member_history::{CustomInvite, InviteCounts, JoinRecord};
pub use navigation::{DisplayedMessage, NavigationSymbol, ReactionEvent};
