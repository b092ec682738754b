//! Contains the trait and implementations for objects that persist the
//! transaction collection.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryTransactionStore;

use crate::{Error, transaction::Transaction};

/// Handles durable storage of the full transaction collection.
///
/// Every operation works on the whole collection at once: callers load the
/// full sequence, modify it in memory, and save it back. Nothing guards the
/// window between a load and the following save, so concurrent writers can
/// overwrite each other's changes.
pub trait TransactionStore {
    /// Read the entire transaction collection.
    ///
    /// A store that has never been written to returns an empty collection.
    fn load(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the stored collection with `transactions`.
    fn save(&self, transactions: &[Transaction]) -> Result<(), Error>;
}
