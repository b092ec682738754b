//! An in-memory transaction store.

use std::sync::{Arc, Mutex};

use crate::{Error, stores::TransactionStore, transaction::Transaction};

/// Holds the transaction collection in memory.
///
/// Clones share the same underlying collection, which makes this store a
/// drop-in stand-in for [JsonFileStore](super::JsonFileStore) in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransactionStore {
    transactions: Arc<Mutex<Vec<Transaction>>>,
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.transactions.lock().unwrap().clone())
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        *self.transactions.lock().unwrap() = transactions.to_vec();
        Ok(())
    }
}
