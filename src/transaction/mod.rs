//! The transaction record and the endpoints for listing, creating and
//! deleting transactions.

mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;

pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use list_endpoint::list_transactions_endpoint;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::Error;

/// An income or expense record, i.e. an event where money changed hands.
///
/// Only `id` and `date` have fixed types, both assigned by the server when
/// the record is created. Everything else the client sent (`type`, `amount`,
/// `category`, `description`, ...) is kept verbatim in [fields](Self::fields)
/// and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Seconds since the Unix epoch at the time the record was created.
    ///
    /// Fractional, so two records created within the same wall-clock second
    /// still usually differ. Collisions are possible and not guarded against.
    pub id: f64,
    /// The creation instant as RFC 3339 text.
    pub date: String,
    /// The caller-supplied fields, passed through verbatim.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Transaction {
    /// The value of the transaction in dollars.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingField] if the record has no `amount` field,
    /// - or [Error::NonNumericAmount] if the `amount` field is not a number.
    pub fn amount(&self) -> Result<f64, Error> {
        let amount = self
            .fields
            .get("amount")
            .ok_or(Error::MissingField("amount"))?;

        amount
            .as_f64()
            .ok_or_else(|| Error::NonNumericAmount(amount.to_string()))
    }

    /// The caller-supplied `type` field, usually `"income"` or `"expense"`.
    ///
    /// Other values are legal; the summary computation treats everything
    /// that is not exactly `"income"` as an expense when totalling the
    /// balance.
    ///
    /// # Errors
    /// This function will return an [Error::MissingField] if the record has
    /// no `type` field.
    pub fn kind(&self) -> Result<&Value, Error> {
        self.fields.get("type").ok_or(Error::MissingField("type"))
    }
}

#[cfg(test)]
mod transaction_tests {
    use serde_json::{Map, Value, json};

    use crate::Error;

    use super::Transaction;

    fn transaction_with_fields(fields: Value) -> Transaction {
        let fields = match fields {
            Value::Object(map) => map,
            _ => panic!("test fields must be a JSON object"),
        };

        Transaction {
            id: 1714089600.25,
            date: "2024-04-26T00:00:00Z".to_string(),
            fields,
        }
    }

    #[test]
    fn amount_returns_numeric_field() {
        let transaction = transaction_with_fields(json!({"amount": 12.5}));

        assert_eq!(transaction.amount(), Ok(12.5));
    }

    #[test]
    fn amount_fails_when_field_is_missing() {
        let transaction = transaction_with_fields(json!({"type": "income"}));

        assert_eq!(transaction.amount(), Err(Error::MissingField("amount")));
    }

    #[test]
    fn amount_fails_when_field_is_not_a_number() {
        let transaction = transaction_with_fields(json!({"amount": "12.50"}));

        assert_eq!(
            transaction.amount(),
            Err(Error::NonNumericAmount("\"12.50\"".to_string()))
        );
    }

    #[test]
    fn kind_fails_when_field_is_missing() {
        let transaction = transaction_with_fields(json!({"amount": 1.0}));

        assert_eq!(transaction.kind(), Err(Error::MissingField("type")));
    }

    #[test]
    fn serialization_flattens_extra_fields() {
        let transaction = transaction_with_fields(json!({
            "type": "expense",
            "amount": 20.0,
            "category": "Groceries",
        }));

        let serialized = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            serialized,
            json!({
                "id": 1714089600.25,
                "date": "2024-04-26T00:00:00Z",
                "type": "expense",
                "amount": 20.0,
                "category": "Groceries",
            })
        );
    }

    #[test]
    fn deserialization_collects_unknown_fields() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 1.5,
            "date": "2024-04-26T00:00:00Z",
            "note": "split with flatmates",
        }))
        .unwrap();

        let mut expected_fields = Map::new();
        expected_fields.insert("note".to_string(), json!("split with flatmates"));

        assert_eq!(transaction.id, 1.5);
        assert_eq!(transaction.fields, expected_fields);
    }
}
