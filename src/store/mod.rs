//! Storage backends for the transaction history.
//!
//! The ledger never persists deltas: every mutation hands the full
//! post-mutation sequence to [SnapshotStore::save], and the newest snapshot
//! wins.

mod cookie;
mod memory;

pub use cookie::{CookieJarStore, TRANSACTIONS_KEY};
pub use memory::MemoryStore;

use crate::{Error, transaction::Transaction};

/// Loads and saves full snapshots of the transaction history.
pub trait SnapshotStore {
    /// Load the last saved snapshot.
    ///
    /// Returns an empty sequence when nothing has been saved yet. A snapshot
    /// that exists but cannot be read or decoded is an [Error::Storage].
    fn load(&self) -> Result<Vec<Transaction>, Error>;

    /// Replace the saved snapshot with `transactions`.
    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error>;
}
