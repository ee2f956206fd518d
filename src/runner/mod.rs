//! The runner is responsible for setting up a file stream for reading from CSV,
//! feeding the payment records to the reconciler, and writing the status
//! summary to a writer.
//!
//! This module provides both a synchronous and an asynchronous runner implementations.
//!
mod async_runner;
mod sync_runner;

pub use async_runner::run as run_async;
pub use sync_runner::run;

use std::io::Write;

use tracing::info;

use crate::{csv_utils::write_csv, Reconciler, Result};

/// Writes the reconciler's summary and logs the outcome of the run.
fn finish<W: Write>(reconciler: &Reconciler, writer: W) -> Result<()> {
    let summary = reconciler.summary();
    let failed = reconciler.failed_payments();
    let unknown = reconciler.unknown_statuses();
    info!(
        payments = reconciler.len(),
        statuses = summary.len(),
        failed = failed.len(),
        unknown = unknown.len(),
        "status summary ready"
    );
    write_csv(writer, summary.into_iter())?;
    Ok(())
}
