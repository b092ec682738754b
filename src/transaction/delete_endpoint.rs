//! Defines the endpoint for deleting a transaction by its ID.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{AppState, Error, stores::TransactionStore};

/// A route handler for deleting every transaction whose `id` equals the path
/// parameter.
///
/// IDs are compared with exact floating-point equality, the same values the
/// client got back from the list endpoint. Deleting an id with no matching
/// record is a no-op; the response is 204 either way.
pub async fn delete_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    Path(transaction_id): Path<f64>,
) -> Result<StatusCode, Error>
where
    T: TransactionStore + Send + Sync,
{
    let mut transactions = state.transaction_store.load()?;
    transactions.retain(|transaction| transaction.id != transaction_id);
    state.transaction_store.save(&transactions)?;

    Ok(StatusCode::NO_CONTENT)
}
