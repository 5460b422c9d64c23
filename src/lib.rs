mod config;
mod csv_utils;
mod dates;
mod dto;
mod error;
mod parser;
mod rates;
mod report;
mod runner;
mod stores;

pub use config::Config;
pub use dates::parse_date;
pub use dto::{ExportRow, ReportRow, Transaction};
pub use error::{Error, Result};
pub use parser::parse_transactions;
pub use rates::{CurrencyRate, NbgClient, RateProvider, RateResolver, RatesDay, NBG_RATES_URL};
pub use report::{mark_new, ReportBuilder, YearlyTotals};
pub use runner::{parse_args, run, run_with, USAGE};
pub use stores::{Cache, FileStore, MemoryStore, Store};
