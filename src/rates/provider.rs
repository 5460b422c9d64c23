use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::resolver::USD;
use crate::error::{Error, Result};

pub const NBG_RATES_URL: &str = "https://nbg.gov.ge/gw/api/ct/monetarypolicy/currencies/en/json/";

const USER_AGENT: &str = concat!("rusty-lari/", env!("CARGO_PKG_VERSION"));

/// One day of rates as published by the provider.
#[derive(Debug, Deserialize)]
pub struct RatesDay {
    pub currencies: Vec<CurrencyRate>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CurrencyRate {
    pub code: String,
    pub rate: f64,
    /// The rate as the provider formats it; carries the exact precision.
    #[serde(rename = "rateFormated")]
    pub rate_formatted: Decimal,
}

/// Source of the raw USD rate for a date. Validation is left to the caller.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch(&self, date: NaiveDate) -> Result<CurrencyRate>;
}

#[async_trait]
impl<P: RateProvider + ?Sized> RateProvider for &P {
    async fn fetch(&self, date: NaiveDate) -> Result<CurrencyRate> {
        (**self).fetch(date).await
    }
}

pub struct NbgClient {
    http: Client,
    base_url: String,
}

impl NbgClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(NBG_RATES_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RateProvider for NbgClient {
    /// Issues one GET request; a failing status is returned as an error, never retried.
    async fn fetch(&self, date: NaiveDate) -> Result<CurrencyRate> {
        let day = date.format("%Y-%m-%d").to_string();
        let days: Vec<RatesDay> = self
            .http
            .get(&self.base_url)
            .query(&[("currencies", USD), ("date", day.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        days.into_iter()
            .next()
            .and_then(|day| day.currencies.into_iter().next())
            .ok_or(Error::MissingRate(date))
    }
}
