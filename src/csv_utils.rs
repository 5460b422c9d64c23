//! CSV reading and writing utilities.
//!
//! Exports are read asynchronously; the report is written synchronously as a
//! tab-delimited table.

use csv_async::{AsyncDeserializer, AsyncReaderBuilder, Trim};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tokio::fs::File;

use crate::error::Result;

/// Opens a headed CSV file for streaming deserialization. Header names are
/// trimmed, field values are left untouched.
pub async fn open_csv<P: AsRef<Path>>(path: P) -> Result<AsyncDeserializer<File>> {
    let file = File::open(path).await?;
    Ok(AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .create_deserializer(file))
}

/// Writes `headers` followed by one tab-delimited line per record.
/// The header line is written even when there are no records.
pub fn write_tsv<T, W>(writer: W, headers: &[&str], records: impl Iterator<Item = T>) -> Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(headers)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
