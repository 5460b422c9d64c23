//! Daily USD exchange rates.
//!
//! [`NbgClient`] fetches official rates from the National Bank of Georgia;
//! [`RateResolver`] sanity-checks them and memoizes them in a [`Cache`](crate::stores::Cache).

mod provider;
mod resolver;

pub use provider::{CurrencyRate, NbgClient, RateProvider, RatesDay, NBG_RATES_URL};
pub use resolver::RateResolver;
