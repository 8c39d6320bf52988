//! Application router configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{
        create_transaction_endpoint, export_transactions_endpoint, get_budget_page,
        get_category_field, reset_transactions_endpoint,
    },
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
///
/// The export and reset routes only exist on the unrestricted tier.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route(endpoints::ROOT, get(get_budget_page))
        .route(endpoints::CATEGORIES_API, get(get_category_field))
        .route(endpoints::TRANSACTIONS_API, post(create_transaction_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    if state.tier.allows_export() {
        router = router.route(
            endpoints::EXPORT_TRANSACTIONS,
            get(export_transactions_endpoint),
        );
    }

    if state.tier.allows_reset() {
        router = router.route(
            endpoints::RESET_TRANSACTIONS,
            post(reset_transactions_endpoint),
        );
    }

    router
        .nest_service(endpoints::STATIC, ServeDir::new(&state.static_dir))
        .fallback(get_404_not_found)
        .with_state(state)
}
