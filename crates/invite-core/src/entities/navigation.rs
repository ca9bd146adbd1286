//! Navigation types - displayed messages and reaction events driving page changes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Symbols used both as rank-change indicators and as navigation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationSymbol {
    /// Rank rose / page up
    Up,
    /// Rank fell / page down
    Down,
    /// Rank unchanged
    Neutral,
}

impl NavigationSymbol {
    pub const UP_EMOJI: &'static str = "🔺";
    pub const DOWN_EMOJI: &'static str = "🔻";
    pub const NEUTRAL_EMOJI: &'static str = "🔹";

    /// Emoji rendered for this symbol
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Up => Self::UP_EMOJI,
            Self::Down => Self::DOWN_EMOJI,
            Self::Neutral => Self::NEUTRAL_EMOJI,
        }
    }

    /// Parse a navigation control; the neutral symbol is not a control
    pub fn from_control(emoji: &str) -> Option<Self> {
        match emoji {
            Self::UP_EMOJI => Some(Self::Up),
            Self::DOWN_EMOJI => Some(Self::Down),
            _ => None,
        }
    }

    /// Indicator for a signed rank change
    pub fn for_delta(delta: i64) -> Self {
        match delta.signum() {
            1 => Self::Up,
            -1 => Self::Down,
            _ => Self::Neutral,
        }
    }
}

impl fmt::Display for NavigationSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.emoji())
    }
}

/// A reaction added to a message by some actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub message_id: Snowflake,
    pub actor_id: Snowflake,
    pub emoji: String,
}

impl ReactionEvent {
    pub fn new(message_id: Snowflake, actor_id: Snowflake, emoji: impl Into<String>) -> Self {
        Self {
            message_id,
            actor_id,
            emoji: emoji.into(),
        }
    }
}

/// A message currently shown in a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedMessage {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub author_id: Snowflake,
    pub editable: bool,
}

impl DisplayedMessage {
    /// Whether `self_id` may rewrite this message in place
    #[inline]
    pub fn is_editable_by(&self, self_id: Snowflake) -> bool {
        self.editable && self.author_id == self_id
    }
}
