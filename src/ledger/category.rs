//! The fixed category lookup table.

use crate::ledger::TransactionType;

const INCOME_CATEGORIES: &[&str] = &["Salary", "Bonus", "Other"];
const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Rent/Mortgage",
    "Bills",
    "Transport",
    "Entertainment",
    "Travel",
    "Other",
];
const SAVING_CATEGORIES: &[&str] = &["Emergency Fund", "Retirement", "TFSA", "Other"];

/// The categories a transaction of `transaction_type` may use.
///
/// Every set ends with the catch-all "Other".
pub fn categories_for(transaction_type: TransactionType) -> &'static [&'static str] {
    match transaction_type {
        TransactionType::Income => INCOME_CATEGORIES,
        TransactionType::Expense => EXPENSE_CATEGORIES,
        TransactionType::Saving => SAVING_CATEGORIES,
    }
}

/// The category to pre-select when nothing else is known.
pub fn default_category(transaction_type: TransactionType) -> &'static str {
    categories_for(transaction_type)[0]
}

/// Whether `category` is in the allowed set for `transaction_type`.
///
/// Matching is exact, "food" is not the same category as "Food".
pub fn is_valid_category(transaction_type: TransactionType, category: &str) -> bool {
    categories_for(transaction_type).contains(&category)
}
