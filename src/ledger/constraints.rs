//! The configurable limits on which entries a ledger accepts.

use time::Date;

/// Limits applied by [crate::ledger::Ledger::add] on top of the amount and
/// category checks.
///
/// The default value imposes no limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintSet {
    /// The maximum number of entries the ledger may hold, if any.
    pub max_entries: Option<usize>,
    /// Only accept dates in the same calendar month and year as today.
    pub current_period_only: bool,
}

impl ConstraintSet {
    /// The entry cap of the free tier.
    pub const FREE_TIER_MAX_ENTRIES: usize = 20;

    /// No entry cap and any date.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// At most [Self::FREE_TIER_MAX_ENTRIES] entries, current month only.
    pub fn free_tier() -> Self {
        Self {
            max_entries: Some(Self::FREE_TIER_MAX_ENTRIES),
            current_period_only: true,
        }
    }

    /// Whether one more entry may be added to a ledger holding `entry_count` entries.
    pub(crate) fn allows_another_entry(&self, entry_count: usize) -> bool {
        self.max_entries
            .is_none_or(|max_entries| entry_count < max_entries)
    }

    /// Whether `date` is inside the accepted window given that it is `today`.
    pub(crate) fn allows_date(&self, date: Date, today: Date) -> bool {
        !self.current_period_only || (date.year() == today.year() && date.month() == today.month())
    }
}
