//! Defines the endpoint for adding a transaction to the session's ledger.
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::{Form, PrivateCookieJar};
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::{Date, macros::format_description};

use crate::{
    Error,
    alert::Alert,
    budget::BudgetState,
    endpoints,
    ledger::{RejectionReason, Transaction, TransactionType, parse_amount},
    timezone::local_today,
};

/// The form data for adding a transaction.
///
/// Fields are kept as text so that malformed input can be reported to the
/// user instead of being rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The name of the transaction type, e.g. "Expense".
    pub transaction_type: String,
    /// The date of the transaction as `YYYY-MM-DD`.
    pub date: String,
    /// One of the categories of the transaction type.
    pub category: String,
    /// The value of the transaction in dollars.
    pub amount: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub note: Option<String>,
}

impl TransactionForm {
    fn parse(&self) -> Result<Transaction, Error> {
        let transaction_type: TransactionType = self.transaction_type.parse()?;
        let date = Date::parse(self.date.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|_| Error::InvalidDate(self.date.clone()))?;
        let amount = parse_amount(&self.amount)?;

        Ok(
            Transaction::new(date, transaction_type, &self.category, amount)
                .note(self.note.as_deref().unwrap_or_default()),
        )
    }
}

/// A route handler for adding a transaction, redirects to the budget page on success.
pub async fn create_transaction_endpoint(
    State(state): State<BudgetState>,
    jar: PrivateCookieJar,
    Form(form): Form<TransactionForm>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let transaction = match form.parse() {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::warn!("Could not parse transaction form {form:?}: {error}");
            return error.into_alert_response();
        }
    };

    let constraints = state.tier.constraints();
    let result = state
        .sessions
        .with_session(jar, |session| -> Result<String, RejectionReason> {
            session.selected_type = transaction.transaction_type;
            session.form_date = Some(transaction.date);

            let description = format!(
                "{} {} of {} on {}",
                transaction.transaction_type, transaction.category, transaction.amount, transaction.date
            );
            session.ledger.add(transaction, &constraints, today)?;
            session.flash = Some(Alert::success("Transaction added!", &description));

            Ok(description)
        });

    match result {
        Ok((jar, Ok(description))) => {
            tracing::info!("Added transaction: {description}");

            (
                jar,
                HxRedirect(endpoints::ROOT.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Ok((jar, Err(reason))) => {
            tracing::warn!("Rejected transaction: {reason}");

            (jar, Error::Rejected(reason).into_alert_response()).into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}
