//! CSV import and export for the transaction history.
//!
//! Both directions use the column layout `ID,Type,Amount,Description,Date`.
//! Fields containing commas, quotes or newlines are quoted on export and
//! unquoted on import (RFC 4180), so descriptions survive a round trip.

use std::io::Read;

use serde::Deserialize;

use crate::{
    Error,
    transaction::{Transaction, TransactionKind},
};

/// The file name suggested when the exported CSV is offered as a download.
pub const EXPORT_FILE_NAME: &str = "transacoes.csv";

const HEADER: [&str; 5] = ["ID", "Type", "Amount", "Description", "Date"];

/// One data row of an incoming CSV file, fields still unparsed.
///
/// `ID` and `Amount` are kept as strings so that a bad value rejects that row
/// with a message instead of abandoning the whole parse.
#[derive(Debug, Deserialize)]
struct ImportRecord {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Date")]
    date: String,
}

/// Serialize `transactions` to CSV bytes, in the given order.
///
/// The header row is always written, so an empty ledger still exports a valid
/// file. Amounts are printed with two decimals.
///
/// # Errors
/// Returns an [Error::Storage] if writing to the in-memory buffer fails.
pub fn write_entries(transactions: &[Transaction]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|error| Error::Storage(error.to_string()))?;

    for transaction in transactions {
        writer
            .write_record([
                transaction.id.to_string(),
                transaction.kind.as_str().to_owned(),
                format!("{:.2}", transaction.amount),
                transaction.description.clone(),
                transaction.date.clone(),
            ])
            .map_err(|error| Error::Storage(error.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|error| Error::Storage(error.to_string()))
}

/// Parse `reader` as a CSV file with the export header and return the
/// transactions it contains.
///
/// Blank lines are skipped. Rows are validated: `ID` must be an integer,
/// `Amount` a finite non-negative number, and `Type` one of `income` or
/// `expense`. Nothing is returned unless every row passes, so callers can
/// replace their ledger without risking a partial import.
///
/// # Errors
/// Returns an [Error::InvalidCsv] with the parser's message if the stream is
/// not well-formed CSV with the expected columns, or an [Error::RejectedRows]
/// naming each row that failed validation.
pub fn read_entries(reader: impl Read) -> Result<Vec<Transaction>, Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    let mut rejected = Vec::new();

    for (index, result) in csv_reader.deserialize::<ImportRecord>().enumerate() {
        // Line 1 is the header row.
        let line = index + 2;
        let record = result.map_err(|error| Error::InvalidCsv(error.to_string()))?;

        match parse_record(record) {
            Ok(transaction) => entries.push(transaction),
            Err(message) => rejected.push(format!("line {line}: {message}")),
        }
    }

    if !rejected.is_empty() {
        return Err(Error::RejectedRows(rejected));
    }

    Ok(entries)
}

fn parse_record(record: ImportRecord) -> Result<Transaction, String> {
    let id = record
        .id
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("\"{}\" is not a valid ID", record.id))?;

    let kind = record
        .kind
        .parse::<TransactionKind>()
        .map_err(|error| error.to_string())?;

    let amount = record
        .amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
        .ok_or_else(|| format!("\"{}\" is not a valid amount", record.amount))?;

    Ok(Transaction {
        id,
        kind,
        amount,
        description: record.description,
        date: record.date,
    })
}
