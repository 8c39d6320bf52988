//! The API endpoints URIs.

/// The budget page with the entry form, summary and transaction history.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for the category selector of a transaction type.
pub const CATEGORIES_API: &str = "/api/categories";
/// The route to add transactions to the session's ledger.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to download the session's transactions as CSV.
pub const EXPORT_TRANSACTIONS: &str = "/api/transactions/export";
/// The route to clear the session's ledger.
pub const RESET_TRANSACTIONS: &str = "/api/transactions/reset";
