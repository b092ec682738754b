//! Defines the endpoint for recording a new transaction.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Map, Value};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{AppState, Error, stores::TransactionStore, transaction::Transaction};

/// A route handler for recording a new transaction.
///
/// The request body may be any JSON object. Caller-supplied `id` and `date`
/// values are discarded and replaced with server-assigned ones; every other
/// field is stored verbatim. The stored record is echoed back with status
/// 201.
pub async fn create_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    Json(data): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Transaction>), Error>
where
    T: TransactionStore + Send + Sync,
{
    let now = OffsetDateTime::now_utc();

    let mut fields = data;
    fields.remove("id");
    fields.remove("date");

    let transaction = Transaction {
        id: now.unix_timestamp_nanos() as f64 / 1e9,
        date: now
            .format(&Rfc3339)
            .map_err(|error| Error::DateFormat(error.to_string()))?,
        fields,
    };

    let mut transactions = state.transaction_store.load()?;
    transactions.push(transaction.clone());
    state.transaction_store.save(&transactions)?;

    Ok((StatusCode::CREATED, Json(transaction)))
}

#[cfg(test)]
mod tests {
    use axum::{Json, extract::State, http::StatusCode};
    use serde_json::{Value, json};

    use crate::{
        AppState,
        stores::{MemoryTransactionStore, TransactionStore},
    };

    use super::create_transaction_endpoint;

    fn json_object(value: Value) -> serde_json::Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_date_and_keeps_fields() {
        let state = AppState::new(MemoryTransactionStore::new());
        let data = json_object(json!({
            "type": "expense",
            "amount": 20.0,
            "category": "Groceries",
            "description": "weekly shop",
        }));

        let (status, Json(transaction)) =
            create_transaction_endpoint(State(state.clone()), Json(data))
                .await
                .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        // Any id assigned after 2001 is comfortably above this bound.
        assert!(transaction.id > 1_000_000_000.0);
        assert!(!transaction.date.is_empty());
        assert_eq!(transaction.fields["type"], json!("expense"));
        assert_eq!(transaction.fields["amount"], json!(20.0));
        assert_eq!(transaction.fields["category"], json!("Groceries"));
        assert_eq!(transaction.fields["description"], json!("weekly shop"));

        let stored = state.transaction_store.load().unwrap();
        assert_eq!(stored, vec![transaction]);
    }

    #[tokio::test]
    async fn create_overwrites_caller_supplied_id_and_date() {
        let state = AppState::new(MemoryTransactionStore::new());
        let data = json_object(json!({
            "id": 42.0,
            "date": "1970-01-01T00:00:00Z",
            "type": "income",
            "amount": 100.0,
        }));

        let (_, Json(transaction)) = create_transaction_endpoint(State(state), Json(data))
            .await
            .unwrap();

        assert_ne!(transaction.id, 42.0);
        assert_ne!(transaction.date, "1970-01-01T00:00:00Z");
        assert!(!transaction.fields.contains_key("id"));
        assert!(!transaction.fields.contains_key("date"));
    }

    #[tokio::test]
    async fn create_appends_to_existing_collection() {
        let state = AppState::new(MemoryTransactionStore::new());

        for description in ["first", "second"] {
            let data = json_object(json!({"amount": 1.0, "description": description}));
            create_transaction_endpoint(State(state.clone()), Json(data))
                .await
                .unwrap();
        }

        let stored = state.transaction_store.load().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].fields["description"], json!("first"));
        assert_eq!(stored[1].fields["description"], json!("second"));
    }
}
