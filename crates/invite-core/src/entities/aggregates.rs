//! Aggregate query rows returned by the storage collaborator
//!
//! Count rows carry a `validate` check; a row failing it makes the whole
//! result set unusable. Custom invite sums are signed, since removed
//! invites are stored as negative amounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Current code-invite uses summed per inviter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInviteTotal {
    pub inviter_id: Snowflake,
    pub inviter_name: Option<String>,
    pub total_uses: i64,
}

impl CodeInviteTotal {
    pub const SOURCE: &'static str = "code_invite_totals";

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.total_uses < 0 {
            return Err(DomainError::malformed(
                Self::SOURCE,
                format!("negative uses for inviter {}", self.inviter_id),
            ));
        }
        Ok(())
    }
}

/// Custom (bonus) invites summed per member, split into manual and generated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomInviteTotal {
    pub member_id: Snowflake,
    pub member_name: Option<String>,
    pub total_bonus: i64,
    pub total_auto: i64,
}

impl CustomInviteTotal {
    /// Bonus plus auto-generated invites
    #[inline]
    pub fn combined(&self) -> i64 {
        self.total_bonus + self.total_auto
    }
}

/// Joins inside the window attributed to an inviter via invite code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowedCodeInviteCount {
    pub inviter_id: Snowflake,
    pub inviter_name: Option<String>,
    pub total_joins: i64,
}

impl WindowedCodeInviteCount {
    pub const SOURCE: &'static str = "windowed_code_invite_counts";

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.total_joins < 0 {
            return Err(DomainError::malformed(
                Self::SOURCE,
                format!("negative join count for inviter {}", self.inviter_id),
            ));
        }
        Ok(())
    }
}

/// Most recent join and leave of a member within a guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinLeaveTimestamps {
    pub member_id: Snowflake,
    pub member_name: Option<String>,
    pub last_joined_at: Option<DateTime<Utc>>,
    pub last_left_at: Option<DateTime<Utc>>,
}
