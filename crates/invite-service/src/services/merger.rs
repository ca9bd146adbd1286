//! Invite merger
//!
//! Folds the four aggregate result sets into one record per member. Each
//! source is applied by its own reducer, always in this order:
//!
//! 1. current code-invite totals seed `total`
//! 2. current bonus totals add to `total` and overwrite `bonus`
//! 3. windowed code-invite counts add to `old_total`
//! 4. windowed bonus totals add to `old_total` and overwrite `old_bonus`
//!
//! A member seen in any source gets a record; missing sources contribute zero.

use std::collections::BTreeMap;

use invite_core::entities::{
    CodeInviteTotal, CustomInviteTotal, MemberInviteRecord, WindowedCodeInviteCount,
};
use invite_core::{DomainError, Snowflake};

/// Merged records keyed by member, iterated in ascending id order
pub type InviteLedger = BTreeMap<Snowflake, MemberInviteRecord>;

/// The four aggregate result sets of one leaderboard invocation
#[derive(Debug, Clone, Default)]
pub struct InviteSources {
    pub code_totals: Vec<CodeInviteTotal>,
    pub bonus_totals: Vec<CustomInviteTotal>,
    pub windowed_code_counts: Vec<WindowedCodeInviteCount>,
    pub windowed_bonus_totals: Vec<CustomInviteTotal>,
}

impl InviteSources {
    /// Reject the whole set if any count row is malformed
    ///
    /// Bonus sums are signed and always accepted.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.code_totals.iter().try_for_each(CodeInviteTotal::validate)?;
        self.windowed_code_counts
            .iter()
            .try_for_each(WindowedCodeInviteCount::validate)
    }

    /// Merge all four sources into a fresh ledger
    pub fn merge(&self) -> InviteLedger {
        let mut ledger = InviteLedger::new();
        apply_code_totals(&mut ledger, &self.code_totals);
        apply_bonus_totals(&mut ledger, &self.bonus_totals);
        apply_windowed_code_counts(&mut ledger, &self.windowed_code_counts);
        apply_windowed_bonus_totals(&mut ledger, &self.windowed_bonus_totals);
        ledger
    }
}

fn record_for<'a>(
    ledger: &'a mut InviteLedger,
    member_id: Snowflake,
    name: Option<&String>,
) -> &'a mut MemberInviteRecord {
    let record = ledger.entry(member_id).or_default();
    if record.display_name.is_none() {
        record.display_name = name.cloned();
    }
    record
}

pub fn apply_code_totals(ledger: &mut InviteLedger, rows: &[CodeInviteTotal]) {
    for row in rows {
        let record = record_for(ledger, row.inviter_id, row.inviter_name.as_ref());
        record.total += row.total_uses;
    }
}

pub fn apply_bonus_totals(ledger: &mut InviteLedger, rows: &[CustomInviteTotal]) {
    for row in rows {
        let record = record_for(ledger, row.member_id, row.member_name.as_ref());
        record.total += row.combined();
        record.bonus = row.total_bonus;
    }
}

pub fn apply_windowed_code_counts(ledger: &mut InviteLedger, rows: &[WindowedCodeInviteCount]) {
    for row in rows {
        let record = record_for(ledger, row.inviter_id, row.inviter_name.as_ref());
        record.old_total += row.total_joins;
    }
}

pub fn apply_windowed_bonus_totals(ledger: &mut InviteLedger, rows: &[CustomInviteTotal]) {
    for row in rows {
        let record = record_for(ledger, row.member_id, row.member_name.as_ref());
        record.old_total += row.combined();
        record.old_bonus = row.total_bonus;
    }
}
