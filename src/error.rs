//! Errors for the rate conversion report.
//!
//! Contains error variants for:
//! - Export validation failures (status, amount, date)
//! - Rate provider failures (HTTP, sanity checks on the response)
//! - Arithmetic overflow while converting
//! - Technical failures (CSV, I/O, cache encoding)
//!
//! Every error aborts the run; nothing here is recoverable per row.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("transaction on row {row} is not completed (status: {status:?})")]
    InvalidState { row: usize, status: String },

    #[error("transaction on row {row} has a non-integer amount: {amount}")]
    InvalidAmount { row: usize, amount: Decimal },

    #[error("transaction on row {row} has an unparsable amount: {amount:?}")]
    MalformedAmount { row: usize, amount: String },

    #[error("transaction on row {row} has an unrecognised date: {date:?}")]
    InvalidDate { row: usize, date: String },

    #[error("rate provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate provider returned no rates for {0}")]
    MissingRate(NaiveDate),

    #[error("unexpected currency code {code:?} for {date}")]
    UnexpectedCurrency { date: NaiveDate, code: String },

    #[error("unexpected rate {rate} for {date}, expected a value within [2, 3]")]
    UnexpectedRate { date: NaiveDate, rate: f64 },

    #[error("converted amount for {date} does not fit in a decimal")]
    AmountOverflow { date: NaiveDate },

    #[error("CSV error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("CSV error: {0}")]
    CsvWrite(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache entry {key:?} is corrupt: {source}")]
    CorruptCache {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode cache entry {key:?}: {source}")]
    CacheEncode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
