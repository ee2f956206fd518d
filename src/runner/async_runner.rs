use std::io::Write;
use std::path::Path;

use crate::{dto::PaymentRecord, status::ParseMode, Reconciler, Result};

use csv_async::{AsyncReaderBuilder, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::debug;

const BUFFER_SIZE: usize = 1024;

/// Runs the status report async on the given input file and writes the summary to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams payment records from the input file, deserializes them and sends them to the reconciler via channel.
/// * Reconciler - receives records from the channel and observes them until the channel is closed.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing payment status records
/// * `writer` - Where to write the per-status summary (e.g. stdout)
/// * `mode` - Whether unrecognized statuses are kept or rejected
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * A status is unrecognized and `mode` is strict
/// * Writing to the output fails
pub async fn run<P, W>(input_path: P, writer: W, mode: ParseMode) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    // Create channel for passing records from reader to reconciler
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();
    debug!(path = %input_path.display(), %mode, "reading payment records");

    let reader_handle = tokio::spawn(read_records(input_path, tx));
    let reconciler_handle = tokio::spawn(observe_records(rx, mode));

    // Wait for reader to finish
    reader_handle.await??;
    let reconciler = reconciler_handle.await??;

    super::finish(&reconciler, writer)
}

/// Reads and deserializes payment records from a CSV file.
/// Returns them through the provided channel.
async fn read_records(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<PaymentRecord>,
) -> Result<()> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<PaymentRecord>();
    while let Some(result) = records.next().await {
        // CSV parsing errors are critical - propagate them
        let record = result?;
        if tx.send(record).await.is_err() {
            // Receiver dropped, exit gracefully
            break;
        }
    }
    Ok(())
}

/// Observes records received through the channel.
/// Returns the final reconciler state once the channel is closed by the reader.
async fn observe_records(
    mut rx: mpsc::Receiver<PaymentRecord>,
    mode: ParseMode,
) -> Result<Reconciler> {
    let mut reconciler = Reconciler::new(mode);
    while let Some(record) = rx.recv().await {
        reconciler.observe(record)?;
    }
    Ok(reconciler)
}
