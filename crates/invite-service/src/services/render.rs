//! Page renderer
//!
//! A `LeaderboardSnapshot` owns everything one invocation computed and turns
//! any page index into transport-independent embed content.

use invite_core::entities::{Embed, NavigationSymbol};
use invite_core::Snowflake;

use super::merger::InviteLedger;
use super::presence::PresenceMap;
use super::ranking::Standings;

pub const LEADERBOARD_TITLE: &str = "Leaderboard";
pub const CHANGES_HEADER: &str = "(changes compared to 1 day ago)";
pub const NO_INVITES: &str = "No invites!";
pub const UNKNOWN_MEMBER: &str = "Unknown member";

/// Title, optionally naming the filtered channel
pub fn leaderboard_title(channel_filter: Option<Snowflake>) -> String {
    match channel_filter {
        Some(channel_id) => {
            format!("{LEADERBOARD_TITLE} for channel {}", channel_id.channel_mention())
        }
        None => LEADERBOARD_TITLE.to_string(),
    }
}

/// One ranked line of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Absolute 1-based rank
    pub position: usize,
    pub member_id: Snowflake,
    pub name: String,
    pub present: bool,
    pub total: i64,
    pub bonus: i64,
    pub delta: i64,
}

impl LeaderboardEntry {
    pub fn symbol(&self) -> NavigationSymbol {
        NavigationSymbol::for_delta(self.delta)
    }

    pub fn delta_text(&self) -> String {
        match self.delta {
            d if d > 0 => format!("+{d}"),
            0 => "--".to_string(),
            d => d.to_string(),
        }
    }

    /// Mention while in the guild, stored name otherwise
    pub fn identity(&self) -> String {
        if self.present {
            self.member_id.mention()
        } else {
            self.name.clone()
        }
    }

    pub fn line(&self) -> String {
        format!(
            "{}. ({}) {} {} {} invites ({} bonus)",
            self.position,
            self.delta_text(),
            self.symbol(),
            self.identity(),
            self.total,
            self.bonus
        )
    }
}

/// Point-in-time leaderboard state of one invocation
#[derive(Debug, Clone)]
pub struct LeaderboardSnapshot {
    ledger: InviteLedger,
    standings: Standings,
    presence: PresenceMap,
    channel_filter: Option<Snowflake>,
    page_size: usize,
}

impl LeaderboardSnapshot {
    pub fn new(
        ledger: InviteLedger,
        presence: PresenceMap,
        channel_filter: Option<Snowflake>,
        page_size: usize,
    ) -> Self {
        let standings = Standings::compute(&ledger);
        Self {
            ledger,
            standings,
            presence,
            channel_filter,
            page_size: page_size.max(1),
        }
    }

    /// Replace the presence map, keeping ledger and rankings
    pub fn with_presence(self, presence: PresenceMap) -> Self {
        Self { presence, ..self }
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    pub fn channel_filter(&self) -> Option<Snowflake> {
        self.channel_filter
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// No member has a positive total
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        self.standings.total_pages(self.page_size)
    }

    /// 0-based index for a 1-based requested page, clamped into range
    pub fn page_index(&self, requested: Option<u32>) -> usize {
        let last = self.total_pages().saturating_sub(1);
        let wanted = requested.unwrap_or(1).saturating_sub(1) as usize;
        wanted.min(last)
    }

    pub fn title(&self) -> String {
        leaderboard_title(self.channel_filter)
    }

    /// Entries of one page; out-of-range pages are empty
    pub fn entries(&self, page_index: usize) -> Vec<LeaderboardEntry> {
        let start = page_index.saturating_mul(self.page_size);

        self.standings
            .current()
            .iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
            .filter_map(|(position, member_id)| {
                let record = self.ledger.get(member_id)?;
                Some(LeaderboardEntry {
                    position: position + 1,
                    member_id: *member_id,
                    name: record
                        .display_name
                        .clone()
                        .unwrap_or_else(|| UNKNOWN_MEMBER.to_string()),
                    present: self.presence.get(member_id).copied().unwrap_or(false),
                    total: record.total,
                    bonus: record.bonus,
                    delta: self.standings.delta_at(position),
                })
            })
            .collect()
    }

    /// Description text of one page
    pub fn description(&self, page_index: usize) -> String {
        if self.is_empty() {
            return NO_INVITES.to_string();
        }

        let mut text = format!("{CHANGES_HEADER}\n\n");
        for entry in self.entries(page_index) {
            text.push_str(&entry.line());
            text.push('\n');
        }

        let total_pages = self.total_pages();
        if total_pages > 1 {
            text.push_str(&format!("\n\nPage {}/{}", page_index + 1, total_pages));
        }
        text
    }

    pub fn render(&self, page_index: usize) -> Embed {
        Embed::new(self.title(), self.description(page_index))
    }
}
