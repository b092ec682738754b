//! Defines the endpoint for listing all transactions.

use axum::{Json, extract::State};

use crate::{AppState, Error, stores::TransactionStore, transaction::Transaction};

/// A route handler for listing every stored transaction in insertion order.
///
/// There is no filtering, sorting, or pagination.
pub async fn list_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    T: TransactionStore + Send + Sync,
{
    state.transaction_store.load().map(Json)
}
