//! Aggregate model <-> entity mappers

use invite_core::entities::{
    CodeInviteTotal, CustomInviteTotal, JoinLeaveTimestamps, WindowedCodeInviteCount,
};
use invite_core::value_objects::Snowflake;

use crate::models::{
    BonusInviteTotalModel, CodeInviteTotalModel, JoinLeaveTimestampsModel, WindowedCodeInviteModel,
};

impl From<CodeInviteTotalModel> for CodeInviteTotal {
    fn from(model: CodeInviteTotalModel) -> Self {
        Self {
            inviter_id: Snowflake::new(model.inviter_id),
            inviter_name: model.inviter_name,
            total_uses: model.total_uses,
        }
    }
}

impl From<BonusInviteTotalModel> for CustomInviteTotal {
    fn from(model: BonusInviteTotalModel) -> Self {
        Self {
            member_id: Snowflake::new(model.member_id),
            member_name: model.member_name,
            total_bonus: model.total_bonus,
            total_auto: model.total_auto,
        }
    }
}

impl From<WindowedCodeInviteModel> for WindowedCodeInviteCount {
    fn from(model: WindowedCodeInviteModel) -> Self {
        Self {
            inviter_id: Snowflake::new(model.inviter_id),
            inviter_name: model.inviter_name,
            total_joins: model.total_joins,
        }
    }
}

impl From<JoinLeaveTimestampsModel> for JoinLeaveTimestamps {
    fn from(model: JoinLeaveTimestampsModel) -> Self {
        Self {
            member_id: Snowflake::new(model.member_id),
            member_name: model.member_name,
            last_joined_at: model.last_joined_at,
            last_left_at: model.last_left_at,
        }
    }
}
