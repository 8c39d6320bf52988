//! The budget page and the endpoints behind its controls.
//!
//! This module contains everything the user interacts with:
//! - The page with the entry form, summary metrics and transaction history
//! - The endpoint for adding transactions to the session's ledger
//! - The category selector that follows the chosen transaction type
//! - The CSV export and reset endpoints of the unrestricted tier

mod categories_endpoint;
mod create_endpoint;
mod export_endpoint;
mod form;
mod history;
mod page;
mod reset_endpoint;
mod summary;
mod teaser;

use axum::extract::FromRef;

pub use categories_endpoint::get_category_field;
pub use create_endpoint::create_transaction_endpoint;
pub use export_endpoint::export_transactions_endpoint;
pub use page::get_budget_page;
pub use reset_endpoint::reset_transactions_endpoint;

use crate::{AppState, session::SessionStore, tier::Tier};

/// The state needed by the budget page and its endpoints.
#[derive(Debug, Clone)]
pub struct BudgetState {
    /// The ledgers of every active browser session.
    pub sessions: SessionStore,
    /// The feature set offered by this server.
    pub tier: Tier,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for BudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            sessions: state.sessions.clone(),
            tier: state.tier,
            local_timezone: state.local_timezone.clone(),
        }
    }
}
