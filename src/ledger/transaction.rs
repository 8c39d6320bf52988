//! Defines the transaction model and its type.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use time::Date;

use crate::ledger::RejectionReason;

/// The kind of money movement a transaction records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransactionType {
    /// Money earned, e.g. salary.
    Income,
    /// Money spent, e.g. rent or groceries.
    Expense,
    /// Money set aside and not meant to be spent now.
    Saving,
}

impl TransactionType {
    /// All transaction types in the order they are offered to the user.
    pub const ALL: [TransactionType; 3] = [
        TransactionType::Income,
        TransactionType::Expense,
        TransactionType::Saving,
    ];

    /// The name of the type as shown to users and written to CSV exports.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
            TransactionType::Saving => "Saving",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A string could not be parsed as a [TransactionType].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a transaction type")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        TransactionType::ALL
            .into_iter()
            .find(|transaction_type| transaction_type.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| UnknownTransactionType(value.to_owned()))
    }
}

/// A dated, typed and categorised amount of money.
///
/// A `Transaction` is only a candidate until [crate::ledger::Ledger::add]
/// accepts it. Once stored it is never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// When the transaction happened.
    pub date: Date,
    /// Whether the money was earned, spent or saved.
    pub transaction_type: TransactionType,
    /// A label from the allowed set for `transaction_type`, e.g. "Food".
    pub category: String,
    /// The amount of money in dollars. Always positive once stored.
    pub amount: Decimal,
    /// Free text, empty when the user did not enter a note.
    pub note: String,
}

impl Transaction {
    /// Create a candidate transaction with an empty note.
    pub fn new(
        date: Date,
        transaction_type: TransactionType,
        category: &str,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            transaction_type,
            category: category.to_owned(),
            amount,
            note: String::new(),
        }
    }

    /// Set the note for the transaction.
    pub fn note(mut self, note: &str) -> Self {
        self.note = note.to_owned();
        self
    }
}

/// Parse user input as an exact decimal amount.
///
/// # Errors
/// Returns [RejectionReason::InvalidAmount] if `text` is not a decimal number.
/// The sign is not checked here, that is left to the ledger.
pub fn parse_amount(text: &str) -> Result<Decimal, RejectionReason> {
    Decimal::from_str(text.trim()).map_err(|_| RejectionReason::InvalidAmount)
}
