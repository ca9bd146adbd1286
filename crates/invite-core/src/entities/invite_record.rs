//! Member invite record - composite invite totals for one member

/// Merged invite totals for one member
///
/// `total` and `bonus` describe the member's current standing; `old_total`
/// and `old_bonus` hold only what was attributed inside the trailing window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberInviteRecord {
    /// Best-known name, shown when the member has left the guild
    pub display_name: Option<String>,
    pub total: i64,
    pub bonus: i64,
    pub old_total: i64,
    pub old_bonus: i64,
}

impl MemberInviteRecord {
    /// Approximate total at the start of the window
    #[inline]
    pub fn window_start_total(&self) -> i64 {
        self.total - self.old_total
    }

    /// Whether the member takes part in the ranking
    #[inline]
    pub fn is_ranked(&self) -> bool {
        self.total > 0
    }
}
