//! Implements a snapshot store with browser-cookie semantics.

use std::{collections::BTreeMap, fs, io::ErrorKind, path::PathBuf};

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::{Error, store::SnapshotStore, transaction::Transaction};

/// The jar key the transaction history is saved under.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// How long a saved snapshot stays valid.
const RETENTION: Duration = Duration::days(7);

/// One named value in the jar, with an absolute expiry set at write time.
#[derive(Debug, Serialize, Deserialize)]
struct Cookie {
    value: String,
    #[serde(with = "time::serde::rfc3339")]
    expires: OffsetDateTime,
}

/// Stores the transaction history as a JSON array in a cookie-jar file.
///
/// The jar is a JSON object mapping names to values with expiry dates. The
/// history lives under [TRANSACTIONS_KEY] and is rewritten in full on every
/// save, with the expiry pushed out another seven days. Entries that have
/// expired load as if they were never saved.
#[derive(Debug, Clone)]
pub struct CookieJarStore {
    path: PathBuf,
}

impl CookieJarStore {
    /// Create a store backed by the jar file at `path`.
    ///
    /// The file is created on the first save; it does not need to exist for
    /// loads, which return an empty history instead.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_jar(&self) -> Result<BTreeMap<String, Cookie>, Error> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(error) => return Err(Error::Storage(error.to_string())),
        };

        serde_json::from_str(&text).map_err(|error| Error::Storage(error.to_string()))
    }

    fn write_jar(&self, jar: &BTreeMap<String, Cookie>) -> Result<(), Error> {
        let text = serde_json::to_string(jar).map_err(|error| Error::Storage(error.to_string()))?;

        fs::write(&self.path, text).map_err(|error| Error::Storage(error.to_string()))
    }
}

impl SnapshotStore for CookieJarStore {
    /// Load the saved history from the jar.
    ///
    /// Missing jars and missing or expired entries yield an empty history.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the jar cannot be read, or if the entry
    /// is present but not valid JSON.
    fn load(&self) -> Result<Vec<Transaction>, Error> {
        let jar = self.read_jar()?;

        let Some(cookie) = jar.get(TRANSACTIONS_KEY) else {
            return Ok(Vec::new());
        };

        if cookie.expires <= OffsetDateTime::now_utc() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&cookie.value).map_err(|error| Error::Storage(error.to_string()))
    }

    /// Overwrite the saved history with `transactions`.
    ///
    /// A jar that has become unreadable is replaced rather than preserved, so
    /// saving still succeeds after on-disk corruption.
    ///
    /// # Errors
    /// Returns an [Error::Storage] if the jar file cannot be written.
    fn save(&mut self, transactions: &[Transaction]) -> Result<(), Error> {
        let mut jar = self.read_jar().unwrap_or_else(|error| {
            tracing::warn!("replacing unreadable cookie jar: {error}");
            BTreeMap::new()
        });

        let value = serde_json::to_string(transactions)
            .map_err(|error| Error::Storage(error.to_string()))?;

        jar.insert(
            TRANSACTIONS_KEY.to_owned(),
            Cookie {
                value,
                expires: OffsetDateTime::now_utc() + RETENTION,
            },
        );

        self.write_jar(&jar)
    }
}
