use async_trait::async_trait;
use chrono::{Duration as Days, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal_macros::dec;
use rusty_lari::{
    Cache, CurrencyRate, MemoryStore, RateProvider, ReportBuilder, Result, Transaction,
};
use std::io;
use std::time::Duration;
use tokio::runtime::Runtime;

const TRANSACTIONS: usize = 10_000;

struct NoopWriter;

impl io::Write for NoopWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Just return the length of input without actually writing
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FixedRate;

#[async_trait]
impl RateProvider for FixedRate {
    async fn fetch(&self, _date: NaiveDate) -> Result<CurrencyRate> {
        Ok(CurrencyRate {
            code: "USD".to_string(),
            rate: 2.7272,
            rate_formatted: dec!(2.7272),
        })
    }
}

/// One transaction per day, most recent first, spanning roughly 27 years.
fn transactions() -> Vec<Transaction> {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    (0..TRANSACTIONS)
        .rev()
        .map(|i| Transaction {
            date: start + Days::days(i as i64),
            amount: dec!(125),
        })
        .collect()
}

fn build_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    group.throughput(Throughput::Elements(TRANSACTIONS as u64));
    group.measurement_time(Duration::from_secs(20));
    group.sample_size(20);

    let rt = Runtime::new().unwrap();

    group.bench_function("cold_cache_10K_transactions", |b| {
        b.to_async(&rt).iter(|| async {
            let cache = Cache::new(MemoryStore::new());
            ReportBuilder::new(FixedRate, &cache)
                .build(transactions(), NoopWriter)
                .await
                .unwrap();
        });
    });

    group.bench_function("warm_cache_rerun_10K_transactions", |b| {
        let cache = Cache::new(MemoryStore::new());
        rt.block_on(ReportBuilder::new(FixedRate, &cache).build(transactions(), NoopWriter))
            .unwrap();

        let cache = &cache;
        b.to_async(&rt).iter(|| async move {
            ReportBuilder::new(FixedRate, cache)
                .build(transactions(), NoopWriter)
                .await
                .unwrap();
        });
    });

    group.finish();
}

criterion_group!(benches, build_report);
criterion_main!(benches);
