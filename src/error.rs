//! Errors for the payment status library and its report runners.
//!
//! Two kinds of failure live here:
//! - Domain errors: a status token outside the closed set (only raised in
//!   strict mode or by strict parsing), and bad command-line usage.
//! - Technical errors: I/O, CSV decoding and task failures from the runners.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unrecognized payment status: {0:?}")]
    UnrecognizedStatus(String),

    #[error("{0}")]
    Usage(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV error: {0}")]
    CsvAsync(#[from] csv_async::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Whether this error came from a status token outside the known set.
    pub fn is_unrecognized_status(&self) -> bool {
        matches!(self, Error::UnrecognizedStatus(_))
    }
}
