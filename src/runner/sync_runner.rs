use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::{
    csv_utils::read_csv, dto::PaymentRecord, status::ParseMode, Reconciler, Result,
};

/// Runs the status report on the given input file and writes the summary to the provided writer.
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
pub fn run<P, W>(input_path: P, writer: W, mode: ParseMode) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    debug!(path = %input_path.as_ref().display(), %mode, "reading payment records");
    let mut reconciler = Reconciler::new(mode);

    let records_iter = read_csv::<PaymentRecord, _>(input_path)?;
    for record in records_iter {
        reconciler.observe(record?)?;
    }

    super::finish(&reconciler, writer)
}
