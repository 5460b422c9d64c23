use std::path::Path;
use tokio_stream::StreamExt;

use crate::csv_utils::open_csv;
use crate::dto::{ExportRow, Transaction};
use crate::error::Result;

/// Reads and validates every row of a payment export.
///
/// Rows keep their input order. The first invalid row aborts the whole parse:
/// a partially accepted export would produce a misleading report.
///
/// # Errors
/// Returns an error if:
/// * The file cannot be read or is not valid CSV
/// * A row is not `completed`, has a non-integer or unparsable amount, or an
///   unrecognised date
pub async fn parse_transactions<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let mut reader = open_csv(path).await?;
    let mut records = reader.deserialize::<ExportRow>();

    let mut transactions = Vec::new();
    let mut row = 0;
    while let Some(record) = records.next().await {
        row += 1;
        transactions.push(Transaction::from_export_row(row, record?)?);
    }

    log::debug!("parsed {} transactions", transactions.len());
    Ok(transactions)
}
