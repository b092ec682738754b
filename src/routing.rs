//! Application router configuration.

use std::path::Path;

use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
};

use crate::{
    AppState, endpoints,
    stores::TransactionStore,
    summary::get_summary_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The root serves the front-end entry document and requests that match no
/// API route fall through to the other static files in `static_dir`. All
/// routes accept cross-origin requests from any origin.
pub fn build_router<T>(state: AppState<T>, static_dir: &Path) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::TRANSACTIONS_API,
            get(list_transactions_endpoint::<T>).post(create_transaction_endpoint::<T>),
        )
        .route(
            endpoints::TRANSACTION,
            delete(delete_transaction_endpoint::<T>),
        )
        .route(endpoints::SUMMARY_API, get(get_summary_endpoint::<T>))
        .route_service(
            endpoints::ROOT,
            ServeFile::new(static_dir.join("index.html")),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
