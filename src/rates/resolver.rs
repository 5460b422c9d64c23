use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::provider::RateProvider;
use crate::error::{Error, Result};
use crate::stores::{call_key, Cache, Store};

pub const USD: &str = "USD";

/// Plausible bounds for GEL per USD. Anything outside is treated as bad data.
pub const MIN_RATE: f64 = 2.0;
pub const MAX_RATE: f64 = 3.0;

const CACHE_FUNCTION: &str = "rate_for";

/// Resolves the USD rate for a date, consulting the cache before the provider.
/// Rates for past dates never change, so cached entries never expire.
pub struct RateResolver<'a, P, S> {
    provider: P,
    cache: &'a Cache<S>,
}

impl<'a, P: RateProvider, S: Store> RateResolver<'a, P, S> {
    pub fn new(provider: P, cache: &'a Cache<S>) -> Self {
        Self { provider, cache }
    }

    pub async fn rate_for(&self, date: NaiveDate) -> Result<Decimal> {
        let key = call_key(CACHE_FUNCTION, date.format("%Y-%m-%d"));
        if let Some(rate) = self.cache.get::<Decimal>(&key).await? {
            log::debug!("rate for {date} served from cache: {rate}");
            return Ok(rate);
        }

        log::info!("fetching rate for {date}");
        let currency = self.provider.fetch(date).await?;
        if currency.code != USD {
            return Err(Error::UnexpectedCurrency {
                date,
                code: currency.code,
            });
        }
        if !(MIN_RATE..=MAX_RATE).contains(&currency.rate) {
            return Err(Error::UnexpectedRate {
                date,
                rate: currency.rate,
            });
        }

        let rate = currency.rate_formatted;
        self.cache.set(&key, &rate).await?;
        Ok(rate)
    }
}
