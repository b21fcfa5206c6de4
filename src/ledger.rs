//! Defines the ledger: the owner of the transaction history and description
//! catalog, and the single entry point for user mutations.

use std::io::Read;

use crate::{
    Error,
    catalog::DescriptionCatalog,
    csv,
    pagination::{
        PaginationConfig, PaginationIndicator, create_pagination_indicators, page_bounds,
        page_count,
    },
    store::SnapshotStore,
    transaction::{self, Transaction, TransactionId, TransactionKind},
};

/// Whether the entry form is creating a new transaction or rewriting an
/// existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditState {
    Idle,
    Editing(TransactionId),
}

/// The input values staged when an edit begins, for the view to show in the
/// entry form.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    /// The transaction's amount, formatted with two decimals.
    pub amount: String,
    /// The transaction's description.
    pub description: String,
}

/// One page of the transaction history, newest first.
#[derive(Debug, PartialEq)]
pub struct Page {
    /// The 1-indexed page number that was requested.
    pub number: u64,
    /// How many pages the history currently spans.
    pub page_count: u64,
    /// The transactions on this page. Empty when `number` is past the end.
    pub transactions: Vec<Transaction>,
    /// The page controls to render under the list.
    pub indicators: Vec<PaginationIndicator>,
}

/// The transaction history and description catalog, kept in sync with a
/// snapshot store.
///
/// Every mutation that changes the history saves the full post-mutation
/// sequence. Save failures are logged and swallowed so that the in-memory
/// state stays usable for the rest of the session.
#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
    transactions: Vec<Transaction>,
    catalog: DescriptionCatalog,
    edit_state: EditState,
    pagination: PaginationConfig,
}

impl<S: SnapshotStore> Ledger<S> {
    /// Open the ledger, loading any previously saved history from `store`.
    ///
    /// The load is best-effort: when the saved copy is missing or cannot be
    /// read, a warning is logged and the ledger starts empty.
    pub fn open(store: S) -> Self {
        Self::with_config(store, PaginationConfig::default())
    }

    /// Open the ledger with a custom pagination config.
    pub fn with_config(store: S, pagination: PaginationConfig) -> Self {
        let transactions = match store.load() {
            Ok(transactions) => transactions,
            Err(error) => {
                tracing::warn!("could not load the saved ledger, starting empty: {error}");
                Vec::new()
            }
        };

        Self {
            store,
            transactions,
            catalog: DescriptionCatalog::default(),
            edit_state: EditState::Idle,
            pagination,
        }
    }

    /// Record an income or expense from the entry form.
    ///
    /// When an edit is in progress the targeted transaction is rewritten in
    /// place, keeping its ID and date, and the ledger returns to normal
    /// entry. Otherwise a new transaction is appended with an ID from the
    /// millisecond clock and the current local date. Either way the updated
    /// history is saved and the ID of the affected transaction returned.
    ///
    /// # Errors
    /// Returns an [Error::EmptyAmount], [Error::InvalidAmount] or
    /// [Error::EmptyDescription] if the form fields do not hold a
    /// non-negative number and a description, leaving the ledger unchanged.
    /// Returns an [Error::TransactionNotFound] if the edit target was deleted
    /// after the edit began; the edit is abandoned.
    pub fn add_entry(
        &mut self,
        kind: TransactionKind,
        amount_input: &str,
        description: &str,
    ) -> Result<TransactionId, Error> {
        let amount = parse_amount(amount_input)?;

        if description.trim().is_empty() {
            return Err(Error::EmptyDescription);
        }

        let id = match self.edit_state {
            EditState::Editing(id) => {
                self.edit_state = EditState::Idle;

                let entry = self
                    .transactions
                    .iter_mut()
                    .find(|transaction| transaction.id == id)
                    .ok_or(Error::TransactionNotFound(id))?;
                entry.kind = kind;
                entry.amount = amount;
                entry.description = description.to_owned();

                id
            }
            EditState::Idle => {
                let newest_id = self.transactions.iter().map(|transaction| transaction.id).max();
                let id = transaction::next_id(transaction::now_ms(), newest_id);

                self.transactions.push(Transaction {
                    id,
                    kind,
                    amount,
                    description: description.to_owned(),
                    date: transaction::display_date_now(),
                });

                id
            }
        };

        self.persist();

        Ok(id)
    }

    /// Start editing the transaction with the given `id`.
    ///
    /// Returns the transaction's current amount and description for the view
    /// to stage in the entry form. The next successful [Ledger::add_entry]
    /// applies the edit. Nothing is saved until then.
    ///
    /// # Errors
    /// Returns an [Error::TransactionNotFound] if `id` is not in the ledger.
    pub fn begin_edit(&mut self, id: TransactionId) -> Result<EntryDraft, Error> {
        let transaction = self
            .transactions
            .iter()
            .find(|transaction| transaction.id == id)
            .ok_or(Error::TransactionNotFound(id))?;

        self.edit_state = EditState::Editing(id);

        Ok(EntryDraft {
            amount: format!("{:.2}", transaction.amount),
            description: transaction.description.clone(),
        })
    }

    /// Abandon an in-progress edit, leaving the history unchanged.
    pub fn cancel_edit(&mut self) {
        self.edit_state = EditState::Idle;
    }

    /// The ID of the transaction currently being edited, if any.
    ///
    /// Views use this to switch the entry buttons between "add" and "save".
    pub fn editing(&self) -> Option<TransactionId> {
        match self.edit_state {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }

    /// Delete the transaction with the given `id` and save the result.
    ///
    /// Deleting an ID that is not in the ledger is a no-op, not an error, so
    /// repeated deletes are safe.
    pub fn remove_entry(&mut self, id: TransactionId) {
        self.transactions.retain(|transaction| transaction.id != id);
        self.persist();
    }

    /// Append `text` to the description catalog.
    ///
    /// # Errors
    /// Returns an [Error::EmptyDescription] if `text` is empty or whitespace.
    pub fn add_description(&mut self, text: &str) -> Result<(), Error> {
        self.catalog.add(text)
    }

    /// The catalog labels offered when entering a transaction.
    pub fn catalog(&self) -> &[String] {
        self.catalog.entries()
    }

    /// The current balance: income minus expenses over the whole history.
    ///
    /// Derived on every call, never stored.
    pub fn balance(&self) -> f64 {
        self.transactions
            .iter()
            .map(|transaction| match transaction.kind {
                TransactionKind::Income => transaction.amount,
                TransactionKind::Expense => -transaction.amount,
            })
            .sum()
    }

    /// The transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The 1-indexed page `number` of the history, most recently created
    /// transactions first.
    ///
    /// Pages past the end come back empty rather than failing, with
    /// indicators the view can use to keep navigation within bounds.
    pub fn page(&self, number: u64) -> Page {
        let mut sorted: Vec<Transaction> = self.transactions.clone();
        sorted.sort_by_key(|transaction| std::cmp::Reverse(transaction.id));

        let page_count = page_count(sorted.len(), self.pagination.page_size);
        let bounds = page_bounds(number, self.pagination.page_size, sorted.len());

        Page {
            number,
            page_count,
            transactions: sorted[bounds].to_vec(),
            indicators: create_pagination_indicators(number, page_count),
        }
    }

    /// How many pages the history currently spans.
    pub fn page_count(&self) -> u64 {
        page_count(self.transactions.len(), self.pagination.page_size)
    }

    /// Replace the whole history with `transactions` and save it.
    ///
    /// Any in-progress edit is abandoned, since its target may no longer
    /// exist.
    pub fn replace_all(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
        self.edit_state = EditState::Idle;
        self.persist();
    }

    /// Serialize the history to CSV bytes for download, in insertion order.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if serialization fails.
    pub fn export_csv(&self) -> Result<Vec<u8>, Error> {
        csv::write_entries(&self.transactions)
    }

    /// Parse `reader` as a CSV file and replace the whole history with its
    /// rows, saving the result. Returns how many transactions were imported.
    ///
    /// The stream is parsed and validated in full before anything changes,
    /// so a failed import leaves the existing ledger untouched.
    ///
    /// # Errors
    /// Returns an [Error::InvalidCsv] if the stream is not well-formed CSV,
    /// or an [Error::RejectedRows] naming every row that failed validation.
    pub fn import_csv(&mut self, reader: impl Read) -> Result<usize, Error> {
        let entries = csv::read_entries(reader)?;
        let count = entries.len();

        self.replace_all(entries);

        Ok(count)
    }

    /// The snapshot store backing this ledger.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save the full history, keeping the in-memory state authoritative when
    /// the store fails.
    fn persist(&mut self) {
        if let Err(error) = self.store.save(&self.transactions) {
            tracing::warn!("could not save the ledger, continuing in memory: {error}");
        }
    }
}

fn parse_amount(input: &str) -> Result<f64, Error> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::EmptyAmount);
    }

    input
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| Error::InvalidAmount(input.to_owned()))
}
