//! The deployment modes the app can be started in.

use crate::ledger::ConstraintSet;

/// Which feature set the server offers.
///
/// Both tiers share one ledger implementation and differ only in the
/// [ConstraintSet] they pass to it and in what the budget page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Tier {
    /// At most 20 entries, current month only, with upgrade teasers.
    #[default]
    Free,
    /// No limits, with CSV export and a reset action.
    Unrestricted,
}

impl Tier {
    /// The limits the ledger enforces for this tier.
    pub fn constraints(self) -> ConstraintSet {
        match self {
            Tier::Free => ConstraintSet::free_tier(),
            Tier::Unrestricted => ConstraintSet::unrestricted(),
        }
    }

    /// The heading of the budget page.
    pub fn page_title(self) -> &'static str {
        match self {
            Tier::Free => "Simple Budget Tracker (Free Version)",
            Tier::Unrestricted => "Budget Tracker",
        }
    }

    /// The label of the period the summary covers.
    pub fn period_label(self) -> &'static str {
        if self.constraints().current_period_only {
            "This Month"
        } else {
            "All Time"
        }
    }

    /// Whether the budget page advertises the paid tier.
    pub fn shows_upgrade_teaser(self) -> bool {
        self == Tier::Free
    }

    /// Whether transactions can be downloaded as CSV.
    pub fn allows_export(self) -> bool {
        self == Tier::Unrestricted
    }

    /// Whether the user can clear all of their transactions.
    pub fn allows_reset(self) -> bool {
        self == Tier::Unrestricted
    }
}
