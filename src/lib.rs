//! Cashbook is a library for tracking personal income and expenses.
//!
//! The [Ledger] owns the transaction history and the catalog of reusable
//! descriptions, and keeps a [SnapshotStore] in sync after every mutation.
//! [CookieJarStore] persists the history the way a browser cookie would: a
//! single JSON value under the key `transactions` that expires after seven
//! days. CSV import and export use the column layout
//! `ID,Type,Amount,Description,Date`.
//!
//! This crate provides no user interface. A view layer is expected to route
//! user intents (add, edit, delete, page changes, import, export) into the
//! ledger and render the results.

#![warn(missing_docs)]

mod catalog;
mod csv;
mod ledger;
mod pagination;
mod store;
mod transaction;

pub use catalog::DescriptionCatalog;
pub use csv::EXPORT_FILE_NAME;
pub use ledger::{EntryDraft, Ledger, Page};
pub use pagination::{PaginationConfig, PaginationIndicator};
pub use store::{CookieJarStore, MemoryStore, SnapshotStore, TRANSACTIONS_KEY};
pub use transaction::{Transaction, TransactionId, TransactionKind};

/// The errors that may occur while working with the ledger.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used for the amount of a transaction.
    #[error("Amount cannot be empty")]
    EmptyAmount,

    /// The amount string could not be read as a non-negative number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// An empty string was used for a transaction or catalog description.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// The given ID did not match any transaction in the ledger.
    #[error("no transaction with ID {0}")]
    TransactionNotFound(TransactionId),

    /// A string other than `income` or `expense` was used as a transaction
    /// type.
    #[error("\"{0}\" is not a transaction type, expected \"income\" or \"expense\"")]
    UnknownKind(String),

    /// The CSV had issues that prevented it from being parsed.
    #[error("Could not parse the CSV file: {0}")]
    InvalidCsv(String),

    /// One or more CSV rows failed validation during an import.
    ///
    /// Each entry names the line and the reason the row was rejected. The
    /// import is abandoned as a whole so that the existing ledger is left
    /// untouched.
    #[error("could not import {} row(s):\n{}", .0.len(), .0.join("\n"))]
    RejectedRows(Vec<String>),

    /// Reading or writing the saved copy of the ledger failed.
    #[error("could not access the saved ledger: {0}")]
    Storage(String),
}
