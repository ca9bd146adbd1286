//! Ranking engine
//!
//! Two orderings over the same members: current standing by `total`, and the
//! approximate standing at window start by `total - old_total`.

use std::cmp::Ordering;
use std::collections::HashMap;

use invite_core::entities::MemberInviteRecord;
use invite_core::Snowflake;

use super::merger::InviteLedger;

/// Order names case-insensitively, then lowercase before uppercase
///
/// A missing name on either side compares as equal.
pub fn compare_names(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| lowercase_first(a, b)),
        _ => Ordering::Equal,
    }
}

fn lowercase_first(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            return match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => x.cmp(&y),
            };
        }
    }
    a.len().cmp(&b.len())
}

fn sort_by_score<F>(entries: &mut [(Snowflake, &MemberInviteRecord)], score: F)
where
    F: Fn(&MemberInviteRecord) -> i64,
{
    // sort_by is stable; equal scores and names keep ascending id order
    entries.sort_by(|(_, a), (_, b)| {
        score(*b).cmp(&score(*a)).then_with(|| {
            compare_names(a.display_name.as_deref(), b.display_name.as_deref())
        })
    });
}

/// Members with `total > 0`, best first
pub fn rank_current(ledger: &InviteLedger) -> Vec<Snowflake> {
    let mut entries: Vec<_> = ledger
        .iter()
        .filter(|(_, record)| record.is_ranked())
        .map(|(id, record)| (*id, record))
        .collect();

    sort_by_score(&mut entries, |r| r.total);
    entries.into_iter().map(|(id, _)| id).collect()
}

/// The currently ranked members reordered by their window-start total
pub fn rank_at_window_start(ledger: &InviteLedger, current: &[Snowflake]) -> Vec<Snowflake> {
    let mut entries: Vec<_> = current
        .iter()
        .filter_map(|id| ledger.get(id).map(|record| (*id, record)))
        .collect();

    sort_by_score(&mut entries, MemberInviteRecord::window_start_total);
    entries.into_iter().map(|(id, _)| id).collect()
}

/// Signed rank change between two 0-based positions; positive means risen
#[inline]
pub fn rank_delta(current_index: usize, window_index: usize) -> i64 {
    (window_index as i64 + 1) - (current_index as i64 + 1)
}

/// Both rankings of one invocation
#[derive(Debug, Clone, Default)]
pub struct Standings {
    current: Vec<Snowflake>,
    window_index: HashMap<Snowflake, usize>,
}

impl Standings {
    pub fn compute(ledger: &InviteLedger) -> Self {
        let current = rank_current(ledger);
        let window_index = rank_at_window_start(ledger, &current)
            .into_iter()
            .enumerate()
            .map(|(index, id)| (id, index))
            .collect();

        Self {
            current,
            window_index,
        }
    }

    /// Current ranking, best first
    pub fn current(&self) -> &[Snowflake] {
        &self.current
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Window-start position of a ranked member
    pub fn window_position(&self, member_id: Snowflake) -> Option<usize> {
        self.window_index.get(&member_id).copied()
    }

    /// Rank delta of the member at an absolute current position
    pub fn delta_at(&self, position: usize) -> i64 {
        self.current
            .get(position)
            .and_then(|id| self.window_position(*id))
            .map_or(0, |window| rank_delta(position, window))
    }

    /// Number of pages of `page_size` members
    pub fn total_pages(&self, page_size: usize) -> usize {
        self.current.len().div_ceil(page_size.max(1))
    }
}
