//! Defines the endpoint for downloading the session's transactions as CSV.
use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;

use crate::{Error, budget::BudgetState};

/// Responds with the session's transactions as a `transactions.csv` attachment,
/// newest first.
pub async fn export_transactions_endpoint(
    State(state): State<BudgetState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let (jar, csv) = state
        .sessions
        .with_session(jar, |session| session.ledger.export_csv())?;
    let csv = csv.inspect_err(|error| tracing::error!("Could not export transactions: {error}"))?;

    tracing::debug!("Exported {} bytes of CSV", csv.len());

    Ok((
        jar,
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8"),
            (CONTENT_DISPOSITION, "attachment; filename=\"transactions.csv\""),
        ],
        csv,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::State;
    use rust_decimal::Decimal;
    use time::macros::date;

    use crate::{
        budget::export_transactions_endpoint,
        ledger::{ConstraintSet, Transaction, TransactionType},
        test_utils::{
            assert_content_type, assert_status_ok, get_header, test_budget_state,
            test_cookie_jar,
        },
        tier::Tier,
    };

    #[tokio::test]
    async fn downloads_sorted_csv() {
        let state = test_budget_state(Tier::Unrestricted);
        let jar = test_cookie_jar(&state);
        let today = date!(2024 - 01 - 31);
        state
            .sessions
            .with_session(jar.clone(), |session| {
                let entries = [
                    Transaction::new(
                        date!(2024 - 01 - 03),
                        TransactionType::Expense,
                        "Food",
                        Decimal::new(2550, 2),
                    )
                    .note("Lunch, with \"friends\""),
                    Transaction::new(
                        date!(2024 - 01 - 05),
                        TransactionType::Income,
                        "Salary",
                        Decimal::new(1000, 0),
                    ),
                ];
                for entry in entries {
                    session
                        .ledger
                        .add(entry, &ConstraintSet::unrestricted(), today)
                        .unwrap();
                }
            })
            .unwrap();

        let response = export_transactions_endpoint(State(state), jar).await.unwrap();

        assert_status_ok(&response);
        assert_content_type(&response, "text/csv; charset=utf-8");
        assert_eq!(
            get_header(&response, "content-disposition"),
            "attachment; filename=\"transactions.csv\""
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(
            String::from_utf8_lossy(&body),
            "Date,Type,Category,Amount,Note\n\
            2024-01-05,Income,Salary,1000.00,\n\
            2024-01-03,Expense,Food,25.50,\"Lunch, with \"\"friends\"\"\"\n"
        );
    }

    #[tokio::test]
    async fn empty_ledger_downloads_header_only() {
        let state = test_budget_state(Tier::Unrestricted);
        let jar = test_cookie_jar(&state);

        let response = export_transactions_endpoint(State(state), jar).await.unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Date,Type,Category,Amount,Note\n");
    }
}
