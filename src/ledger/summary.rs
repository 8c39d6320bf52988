//! Aggregate totals over a ledger.

use rust_decimal::Decimal;

use crate::ledger::{Transaction, TransactionType};

/// The five totals shown on the budget page.
///
/// All values are exact decimals, so repeated additions never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Sum of all income.
    pub total_income: Decimal,
    /// Sum of all expenses.
    pub total_expense: Decimal,
    /// Sum of all savings.
    pub total_saving: Decimal,
    /// Income minus expenses.
    pub net_balance: Decimal,
    /// Income minus expenses minus savings, i.e. money that is free to spend.
    pub available_balance: Decimal,
}

impl Summary {
    pub(crate) fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Self::default();

        for transaction in transactions {
            let Some(next) = summary.checked_include(transaction) else {
                tracing::error!("summary overflowed, skipping the remaining transactions");
                break;
            };
            summary = next;
        }

        summary
    }

    /// The totals after also counting `transaction`.
    ///
    /// Returns `None` if any total would overflow.
    pub(crate) fn checked_include(&self, transaction: &Transaction) -> Option<Self> {
        let mut next = *self;

        match transaction.transaction_type {
            TransactionType::Income => {
                next.total_income = self.total_income.checked_add(transaction.amount)?
            }
            TransactionType::Expense => {
                next.total_expense = self.total_expense.checked_add(transaction.amount)?
            }
            TransactionType::Saving => {
                next.total_saving = self.total_saving.checked_add(transaction.amount)?
            }
        }

        next.net_balance = next.total_income.checked_sub(next.total_expense)?;
        next.available_balance = next.net_balance.checked_sub(next.total_saving)?;

        Some(next)
    }
}
