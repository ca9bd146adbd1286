//! Member history model <-> entity mappers

use invite_core::entities::{CustomInvite, InviteCounts, JoinRecord};
use invite_core::value_objects::Snowflake;

use crate::models::{CustomInviteModel, InviteCountsModel, JoinWithInviterModel};

impl From<InviteCountsModel> for InviteCounts {
    fn from(model: InviteCountsModel) -> Self {
        Self {
            code: model.code,
            custom: model.custom,
        }
    }
}

impl From<JoinWithInviterModel> for JoinRecord {
    fn from(model: JoinWithInviterModel) -> Self {
        Self {
            created_at: model.created_at,
            inviter_id: model.inviter_id.map(Snowflake::new),
        }
    }
}

impl From<CustomInviteModel> for CustomInvite {
    fn from(model: CustomInviteModel) -> Self {
        Self {
            amount: model.amount,
            creator_id: model.creator_id.map(Snowflake::new),
            reason: model.reason,
            generated: model.generated,
            created_at: model.created_at,
        }
    }
}
