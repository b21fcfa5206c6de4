//! Implements an in-memory snapshot store.

use crate::{Error, store::SnapshotStore, transaction::Transaction};

/// Holds the snapshot in memory.
///
/// Useful for tests and for embedders that do not want a durable copy. The
/// snapshot is lost when the store is dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    snapshot: Vec<Transaction>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `snapshot`, as if it had been saved
    /// by an earlier session.
    pub fn with_snapshot(snapshot: Vec<Transaction>) -> Self {
        Self { snapshot }
    }

    /// The transactions most recently saved to this store.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.snapshot
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        self.snapshot = transactions.to_vec();

        Ok(())
    }
}
