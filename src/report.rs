//! Builds the conversion report: rates per transaction, running totals per
//! year, and New markers relative to the previous run.

use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;
use std::io::Write;

use crate::csv_utils::write_tsv;
use crate::dto::{ReportRow, Transaction};
use crate::error::{Error, Result};
use crate::rates::{RateProvider, RateResolver};
use crate::stores::{slot_key, Cache, Store};

/// Slot holding the rows of the last generated report.
pub const RESULTS_SLOT: &str = "results";

const ROUNDING_DP: u32 = 2;

/// Running totals of rounded converted amounts, per calendar year.
#[derive(Debug, Default)]
pub struct YearlyTotals {
    totals: HashMap<i32, Decimal>,
}

impl YearlyTotals {
    pub fn new() -> Self {
        Self {
            totals: HashMap::new(),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.totals.contains_key(&year)
    }

    /// Adds `amount` to the year's total and returns the new total, or `None`
    /// if the total would overflow. An overflowing add leaves the total as is.
    pub fn add(&mut self, year: i32, amount: Decimal) -> Option<Decimal> {
        let total = self.totals.entry(year).or_insert(Decimal::ZERO);
        *total = total.checked_add(amount)?;
        Some(*total)
    }
}

pub struct ReportBuilder<'a, P, S> {
    resolver: RateResolver<'a, P, S>,
    cache: &'a Cache<S>,
}

impl<'a, P: RateProvider, S: Store> ReportBuilder<'a, P, S> {
    pub fn new(provider: P, cache: &'a Cache<S>) -> Self {
        Self {
            resolver: RateResolver::new(provider, cache),
            cache,
        }
    }

    /// Converts `transactions` and writes the report to `out`.
    ///
    /// A blank line is written as soon as each new year is reached, ahead of
    /// the table itself. The table is written only once every rate resolved;
    /// the first rate failure aborts the report.
    pub async fn build<W: Write>(
        &self,
        mut transactions: Vec<Transaction>,
        mut out: W,
    ) -> Result<Vec<ReportRow>> {
        transactions.sort_by_key(|t| t.date);

        let mut totals = YearlyTotals::new();
        let mut rows = Vec::with_capacity(transactions.len());
        for transaction in &transactions {
            let year = transaction.date.year();
            if !totals.contains(year) {
                writeln!(out)?;
            }

            let rate = self.resolver.rate_for(transaction.date).await?;
            let overflow = || Error::AmountOverflow {
                date: transaction.date,
            };
            let amount_gel = transaction.amount.checked_mul(rate).ok_or_else(overflow)?;
            let amount_gel_rounded = round_amount(amount_gel);
            let total_by_year = totals
                .add(year, amount_gel_rounded)
                .ok_or_else(overflow)?;

            rows.push(ReportRow {
                date: transaction.date,
                amount_usd: transaction.amount,
                rate,
                amount_gel,
                amount_gel_rounded,
                total_by_year,
                new: None,
            });
        }

        let previous = self
            .cache
            .swap(&slot_key(RESULTS_SLOT), &rows)
            .await?
            .unwrap_or_default();
        let marked = mark_new(&mut rows, &previous);
        log::info!("{} report rows, {} new since last run", rows.len(), marked);

        write_tsv(&mut out, &ReportRow::HEADERS, rows.iter())?;
        writeln!(out)?;
        Ok(rows)
    }
}

/// Rounds half to even and always shows two decimal places.
fn round_amount(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(ROUNDING_DP, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(ROUNDING_DP);
    rounded
}

/// Sets New on every row without an equal row in `previous` and returns how
/// many were marked. Nothing is marked when there is no previous report.
pub fn mark_new(rows: &mut [ReportRow], previous: &[ReportRow]) -> usize {
    if previous.is_empty() {
        return 0;
    }

    let mut marked = 0;
    for row in rows.iter_mut() {
        if !previous.iter().any(|prev| row.same_entry(prev)) {
            row.new = Some(true);
            marked += 1;
        }
    }
    marked
}
