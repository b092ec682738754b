//! Aggregate totals over the stored transactions.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, stores::TransactionStore, transaction::Transaction};

/// The derived totals over all stored transactions.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The sum of income amounts minus the amounts of everything else.
    pub balance: f64,
    /// The sum of amounts over records whose type is exactly `"income"`.
    pub income: f64,
    /// The sum of amounts over records whose type is exactly `"expense"`.
    pub expenses: f64,
}

/// A route handler for the balance/income/expense summary of all stored
/// transactions.
pub async fn get_summary_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Summary>, Error>
where
    T: TransactionStore + Send + Sync,
{
    compute_summary(&state.transaction_store.load()?).map(Json)
}

/// Compute the balance, income and expense totals in a single pass.
///
/// A record counts towards `income` or `expenses` only when its `type` is
/// exactly that string. `balance`, however, subtracts the amount of every
/// record that is not income, so a record with, say, `type: "transfer"`
/// lowers the balance without showing up in `expenses`. As a result,
/// `balance == income - expenses` only holds when every record is strictly
/// `"income"` or `"expense"`.
///
/// # Errors
/// This function will return a [Error::MissingField] or
/// [Error::NonNumericAmount] if any record lacks a `type` or a numeric
/// `amount`. There is no per-record skipping.
pub fn compute_summary(transactions: &[Transaction]) -> Result<Summary, Error> {
    let mut summary = Summary::default();

    for transaction in transactions {
        let amount = transaction.amount()?;
        let kind = transaction.kind()?;

        if kind == "income" {
            summary.income += amount;
            summary.balance += amount;
        } else {
            summary.balance -= amount;
        }

        if kind == "expense" {
            summary.expenses += amount;
        }
    }

    Ok(summary)
}
