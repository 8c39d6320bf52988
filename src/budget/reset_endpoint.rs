//! Defines the endpoint for clearing the session's ledger.
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use axum_htmx::HxRedirect;

use crate::{alert::Alert, budget::BudgetState, endpoints};

/// Deletes every transaction in the session, redirects to the budget page.
pub async fn reset_transactions_endpoint(
    State(state): State<BudgetState>,
    jar: PrivateCookieJar,
) -> Response {
    let result = state.sessions.with_session(jar, |session| {
        let deleted = session.ledger.len();
        session.ledger.reset();
        session.flash = Some(Alert::success(
            "Ledger cleared",
            &format!("Deleted {deleted} transactions."),
        ));

        deleted
    });

    match result {
        Ok((jar, deleted)) => {
            tracing::info!("Reset ledger, deleted {deleted} transactions");

            (
                jar,
                HxRedirect(endpoints::ROOT.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => error.into_alert_response(),
    }
}
