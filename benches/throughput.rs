use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use payment_status::{run, run_async, ParseMode, PaymentRecord, PaymentStatus, ReportedStatus};
use rust_decimal::Decimal;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::runtime::Runtime;

const NUM_RECORDS: u64 = 1_000_000;
const NUM_PAYMENTS: u64 = 100_000;

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

/// Writes NUM_RECORDS observations cycling through every known status plus one unknown.
fn write_input(path: &Path) -> csv::Result<()> {
    let statuses: Vec<ReportedStatus> = <PaymentStatus as strum::IntoEnumIterator>::iter()
        .map(ReportedStatus::from)
        .chain([ReportedStatus::parse("NOT_YET_KNOWN")])
        .collect();

    let mut wtr = csv::Writer::from_path(path)?;
    for i in 0..NUM_RECORDS {
        wtr.serialize(PaymentRecord {
            id: format!("P{:07}", i % NUM_PAYMENTS),
            status: statuses[(i as usize) % statuses.len()].clone(),
            amount: Some(Decimal::from(i % 1000)),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn reconcile_statuses(c: &mut Criterion) {
    let input: PathBuf = std::env::temp_dir().join("payment_status_bench_1M.csv");
    write_input(&input).unwrap();

    let mut group = c.benchmark_group("throughput");

    group.throughput(Throughput::Elements(NUM_RECORDS));
    group.measurement_time(Duration::from_secs(60));
    group.sample_size(50);

    let input = input.as_path();

    group.bench_function("sync_reconcile_100K_payments_1M_records", |b| {
        b.iter(|| {
            run(input, NoopWriter, ParseMode::Lenient).unwrap();
        });
    });

    group.bench_function("async_reconcile_100K_payments_1M_records", |b| {
        let rt = Runtime::new().unwrap();
        b.to_async(rt).iter(|| async move {
            run_async(input, NoopWriter, ParseMode::Lenient)
                .await
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, reconcile_statuses);
criterion_main!(benches);
