//! The transaction ledger for a single session.
//!
//! This module contains everything related to storing and summarising budget
//! entries:
//! - The `Transaction` model and the closed set of transaction types
//! - The category lookup table for each transaction type
//! - The `ConstraintSet` that decides which entries a ledger accepts
//! - The `Ledger` itself with its validation, aggregation and CSV export

mod category;
mod constraints;
mod core;
mod export;
mod summary;
mod transaction;

pub use category::{categories_for, default_category, is_valid_category};
pub use constraints::ConstraintSet;
pub use core::{Ledger, RejectionReason};
pub use summary::Summary;
pub use transaction::{Transaction, TransactionType, UnknownTransactionType, parse_amount};
