//! Defines the transaction model and the rules for assigning IDs and dates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::Error;

/// The ID of a transaction.
///
/// IDs are taken from the Unix millisecond clock at creation time, so sorting
/// by descending ID lists transactions in reverse creation order.
pub type TransactionId = i64;

/// Whether a transaction brings money in or takes money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned, added to the balance.
    Income,
    /// Money spent, subtracted from the balance.
    Expense,
}

impl TransactionKind {
    /// The name used for this kind in CSV files and the persisted blob.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(Error::UnknownKind(other.to_owned())),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether the transaction is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// A text description of what the transaction was for.
    pub description: String,
    /// When the transaction was recorded, in display format.
    ///
    /// Captured once at creation and never re-parsed; imported transactions
    /// keep whatever their source row contained.
    pub date: String,
}

const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");

/// The current Unix time in milliseconds.
pub(crate) fn now_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Pick the ID for a new transaction.
///
/// IDs come from the millisecond clock, but two transactions created within
/// the same millisecond must not share an ID, so the clock value is bumped
/// past the newest existing ID when they collide.
pub(crate) fn next_id(now_ms: i64, newest_id: Option<TransactionId>) -> TransactionId {
    match newest_id {
        Some(newest) if now_ms <= newest => newest + 1,
        _ => now_ms,
    }
}

/// The current local date and time in the format shown to the user,
/// e.g. `01/01/2024 10:00:00`.
///
/// Falls back to UTC when the local offset cannot be determined, which
/// happens on some platforms when the process is multi-threaded.
pub(crate) fn display_date_now() -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let now = OffsetDateTime::now_utc().to_offset(offset);

    now.format(DISPLAY_DATE_FORMAT).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::{Error, transaction::next_id};

    use super::{Transaction, TransactionKind};

    #[test]
    fn kind_parses_from_csv_names() {
        assert_eq!("income".parse(), Ok(TransactionKind::Income));
        assert_eq!("expense".parse(), Ok(TransactionKind::Expense));
    }

    #[test]
    fn kind_rejects_unknown_names() {
        let result = "entrada".parse::<TransactionKind>();

        assert_eq!(result, Err(Error::UnknownKind("entrada".to_owned())));
    }

    #[test]
    fn serializes_with_cookie_field_names() {
        let transaction = Transaction {
            id: 1716312345678,
            kind: TransactionKind::Income,
            amount: 1500.0,
            description: "Salary".to_owned(),
            date: "01/01/2024 10:00:00".to_owned(),
        };
        let want = "{\"id\":1716312345678,\"type\":\"income\",\"amount\":1500.0,\
                    \"description\":\"Salary\",\"date\":\"01/01/2024 10:00:00\"}";

        let got = serde_json::to_string(&transaction).unwrap();

        assert_eq!(want, got);
    }

    #[test]
    fn next_id_uses_clock_when_free() {
        assert_eq!(next_id(1000, None), 1000);
        assert_eq!(next_id(1000, Some(900)), 1000);
    }

    #[test]
    fn next_id_bumps_past_clock_collision() {
        assert_eq!(next_id(1000, Some(1000)), 1001);
        assert_eq!(next_id(1000, Some(1005)), 1006);
    }
}
