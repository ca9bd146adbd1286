//! Member history rows used by the member info report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Code and custom invite counts for a single member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteCounts {
    pub code: i64,
    pub custom: i64,
}

impl InviteCounts {
    #[inline]
    pub fn total(&self) -> i64 {
        self.code + self.custom
    }
}

/// One join of a member, with the inviter matched through the invite code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRecord {
    pub created_at: DateTime<Utc>,
    pub inviter_id: Option<Snowflake>,
}

/// One manually granted or generated invite adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomInvite {
    pub amount: i64,
    pub creator_id: Option<Snowflake>,
    pub reason: Option<String>,
    pub generated: bool,
    pub created_at: DateTime<Utc>,
}
