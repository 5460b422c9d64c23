use std::io::Write;
use std::path::Path;

use crate::{
    config::Config,
    error::{Error, Result},
    parser::parse_transactions,
    rates::{NbgClient, RateProvider},
    report::ReportBuilder,
    stores::{Cache, FileStore, Store},
};

pub const USAGE: &str = "Usage: rusty-lari <transactions.csv>";

/// Returns the export path from the process arguments (program name first).
/// Anything but exactly one argument is a usage error.
pub fn parse_args(args: &[String]) -> Result<&str> {
    match args {
        [_, input_path] => Ok(input_path.as_str()),
        _ => Err(Error::Usage(USAGE.to_string())),
    }
}

/// Generates the report for the given export and writes it to the provided writer,
/// using the National Bank of Georgia for rates and an on-disk cache.
///
/// # Arguments
/// * `input_path` - Path to the payment export CSV
/// * `config` - Cache directory and rate provider URL
/// * `writer` - Where to write the report (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The export cannot be read or contains an invalid row
/// * A rate cannot be fetched or fails its sanity checks
/// * The cache or the writer fails
pub async fn run<P, W>(input_path: P, config: &Config, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let provider = NbgClient::with_base_url(config.rates_url.as_str())?;
    let cache = Cache::new(FileStore::new(&config.cache_dir));
    run_with(input_path, provider, &cache, writer).await
}

/// Same pipeline as [`run`] against any rate provider and store.
pub async fn run_with<P, R, S, W>(
    input_path: P,
    provider: R,
    cache: &Cache<S>,
    writer: W,
) -> Result<()>
where
    P: AsRef<Path>,
    R: RateProvider,
    S: Store,
    W: Write,
{
    let transactions = parse_transactions(input_path).await?;
    ReportBuilder::new(provider, cache)
        .build(transactions, writer)
        .await?;
    Ok(())
}
