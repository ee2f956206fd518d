pub mod classify;
pub mod config;
mod csv_utils;
mod dto;
mod error;
mod reconciler;
mod runner;
pub mod status;

pub use classify::{is_error, ERROR_STATUSES};
pub use config::Config;
pub use dto::{PaymentRecord, StatusSummaryRow};
pub use error::{Error, Result};
pub use reconciler::Reconciler;
pub use runner::{run, run_async};
pub use status::{ParseMode, PaymentStatus, ReportedStatus, StatusGroup};
