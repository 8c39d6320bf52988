//! Defines the endpoint that swaps the category selector when the transaction type changes.
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use serde::Deserialize;

use crate::{
    Error,
    budget::{BudgetState, form::category_field_view},
    ledger::TransactionType,
};

/// The query string sent by the transaction type selector.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    /// The name of the chosen transaction type.
    pub transaction_type: String,
}

/// Renders the category selector for the chosen transaction type, with the
/// session's last used category for that type pre-selected.
pub async fn get_category_field(
    State(state): State<BudgetState>,
    jar: PrivateCookieJar,
    Query(query): Query<CategoryQuery>,
) -> Response {
    let transaction_type: TransactionType = match query.transaction_type.parse() {
        Ok(transaction_type) => transaction_type,
        Err(error) => {
            tracing::warn!("Could not get categories: {error}");
            return Error::from(error).into_alert_response();
        }
    };

    let result = state.sessions.with_session(jar, |session| {
        session.selected_type = transaction_type;
        category_field_view(
            transaction_type,
            session.ledger.last_category(transaction_type),
        )
    });

    match result {
        Ok((jar, field)) => (jar, field).into_response(),
        Err(error) => error.into_alert_response(),
    }
}
