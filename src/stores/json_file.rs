//! A transaction store backed by a single JSON file.

use std::{fs, path::PathBuf};

use crate::{Error, stores::TransactionStore, transaction::Transaction};

/// Persists the transaction collection as one JSON array on disk.
///
/// Writes overwrite the file in place with no temp-file staging, so a crash
/// mid-write can leave a truncated file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is not created until the first [save](TransactionStore::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TransactionStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;

        serde_json::from_str(&contents).map_err(|error| error.into())
    }

    fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let contents = serde_json::to_string(transactions)?;

        fs::write(&self.path, contents).map_err(|error| error.into())
    }
}
