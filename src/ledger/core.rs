//! Defines the ledger and the reasons it may reject an entry.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use time::Date;

use crate::ledger::{ConstraintSet, Summary, Transaction, TransactionType, is_valid_category};

/// Number of decimal places stored for amounts.
const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Why [Ledger::add] refused an entry.
///
/// The ledger is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    /// The amount was zero, negative, or not a number.
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// The ledger already holds the maximum number of entries.
    #[error("the maximum number of entries has been reached")]
    EntryLimitExceeded,

    /// The date falls outside the current calendar month.
    #[error("only dates in the current month are accepted")]
    DateOutOfWindow,

    /// The category is not in the allowed set for the transaction type.
    #[error("the category does not belong to the transaction type")]
    InvalidCategory,
}

/// The transactions entered during one session.
///
/// Transactions are kept in the order they were added. Display order is
/// produced on demand by [Ledger::list_sorted].
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    last_categories: HashMap<TransactionType, String>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `candidate` against `constraints` and store it.
    ///
    /// `today` is the user's current local date and is only consulted when
    /// `constraints` restricts entries to the current period. The amount is
    /// rounded to whole cents before it is checked.
    ///
    /// # Errors
    /// Checks run in this order and the first failure is returned:
    /// - [RejectionReason::InvalidAmount] if the amount is not positive or
    ///   would push a total in [Summary] past what a [Decimal] can hold,
    /// - [RejectionReason::EntryLimitExceeded] if the entry cap has been reached,
    /// - [RejectionReason::DateOutOfWindow] if the date is outside the current month,
    /// - [RejectionReason::InvalidCategory] if the category does not match the type.
    pub fn add(
        &mut self,
        mut candidate: Transaction,
        constraints: &ConstraintSet,
        today: Date,
    ) -> Result<(), RejectionReason> {
        let mut amount = candidate
            .amount
            .round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(CURRENCY_DECIMAL_PLACES);

        if amount <= Decimal::ZERO {
            return Err(RejectionReason::InvalidAmount);
        }

        candidate.amount = amount;
        if self.summarize().checked_include(&candidate).is_none() {
            return Err(RejectionReason::InvalidAmount);
        }

        if !constraints.allows_another_entry(self.transactions.len()) {
            return Err(RejectionReason::EntryLimitExceeded);
        }

        if !constraints.allows_date(candidate.date, today) {
            return Err(RejectionReason::DateOutOfWindow);
        }

        if !is_valid_category(candidate.transaction_type, &candidate.category) {
            return Err(RejectionReason::InvalidCategory);
        }

        self.last_categories
            .insert(candidate.transaction_type, candidate.category.clone());
        self.transactions.push(candidate);

        Ok(())
    }

    /// Compute the totals over every stored transaction.
    pub fn summarize(&self) -> Summary {
        Summary::from_transactions(&self.transactions)
    }

    /// All transactions, most recent date first.
    ///
    /// Transactions on the same date keep the order they were added in.
    pub fn list_sorted(&self) -> Vec<&Transaction> {
        let mut sorted: Vec<&Transaction> = self.transactions.iter().collect();
        // `sort_by` is stable, which keeps insertion order for equal dates.
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Remove every transaction and forget the last used categories.
    pub fn reset(&mut self) {
        self.transactions.clear();
        self.last_categories.clear();
    }

    /// The category most recently used for `transaction_type`, if any.
    pub fn last_category(&self, transaction_type: TransactionType) -> Option<&str> {
        self.last_categories
            .get(&transaction_type)
            .map(String::as_str)
    }

    /// The transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of stored transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the ledger holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
