//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    internal_server_error::InternalServerError,
    ledger::{ConstraintSet, RejectionReason, UnknownTransactionType},
    not_found::get_404_not_found_response,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The ledger refused a new transaction.
    #[error("the transaction was rejected: {0}")]
    Rejected(#[from] RejectionReason),

    /// The submitted date could not be parsed as `YYYY-MM-DD`.
    #[error("\"{0}\" is not a valid date")]
    InvalidDate(String),

    /// The submitted transaction type is not one of the known types.
    #[error(transparent)]
    UnknownTransactionType(#[from] UnknownTransactionType),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the session lock.
    #[error("could not acquire the session lock")]
    SessionLockError,

    /// The transactions could not be written as CSV.
    ///
    /// The string is the underlying error and should only be logged.
    #[error("could not export transactions as CSV: {0}")]
    CsvExportError(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvExportError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert fragment for htmx to swap into the page.
    pub(crate) fn into_alert_response(self) -> Response {
        match self {
            Error::Rejected(reason) => {
                rejection_alert(reason).into_response_with_status(StatusCode::BAD_REQUEST)
            }
            Error::InvalidDate(date) => Alert::error(
                "Invalid date",
                &format!("\"{date}\" is not a valid date. Pick a date from the date selector."),
            )
            .into_response_with_status(StatusCode::BAD_REQUEST),
            Error::UnknownTransactionType(UnknownTransactionType(name)) => Alert::error(
                "Invalid transaction type",
                &format!("\"{name}\" is not a transaction type. Choose Income, Expense or Saving."),
            )
            .into_response_with_status(StatusCode::BAD_REQUEST),
            Error::InvalidTimezoneError(timezone) => Alert::error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_response_with_status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// The user-facing explanation for a rejected transaction.
fn rejection_alert(reason: RejectionReason) -> Alert {
    match reason {
        RejectionReason::InvalidAmount => Alert::error(
            "Invalid amount",
            "Amount must be a number greater than zero.",
        ),
        RejectionReason::EntryLimitExceeded => Alert::error(
            "Entry limit reached",
            &format!(
                "The free version limits you to {} entries. \
                Upgrade to Premium for unlimited entries!",
                ConstraintSet::FREE_TIER_MAX_ENTRIES
            ),
        ),
        RejectionReason::DateOutOfWindow => Alert::error(
            "Date not supported",
            "The free version only supports entries for the current month. \
            Upgrade to Premium for all dates!",
        ),
        RejectionReason::InvalidCategory => Alert::error(
            "Invalid category",
            "Choose one of the categories listed for the transaction type.",
        ),
    }
}
