//! Command-line configuration for the `payment-status` binary.
//!
//! ```text
//! payment-status [--strict] [--async] <payments.csv>
//! ```
//!
//! `PAYMENT_STATUS_MODE=strict|lenient` sets the default parse mode;
//! `--strict` always wins over it.

use std::env;
use std::path::PathBuf;

use crate::status::ParseMode;
use crate::{Error, Result};

pub const MODE_ENV_VAR: &str = "PAYMENT_STATUS_MODE";

const USAGE: &str = "Usage: cargo run -- [--strict] [--async] payments.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub mode: ParseMode,
    pub use_async: bool,
}

impl Config {
    /// Builds the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let default_mode = match env::var(MODE_ENV_VAR) {
            Ok(value) => parse_mode(&value)?,
            Err(_) => ParseMode::default(),
        };
        Self::from_args(env::args().skip(1), default_mode)
    }

    /// Parses arguments (without the program name).
    pub fn from_args<I, S>(args: I, default_mode: ParseMode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input = None;
        let mut mode = default_mode;
        let mut use_async = false;

        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "--strict" => mode = ParseMode::Strict,
                "--async" => use_async = true,
                flag if flag.starts_with("--") => {
                    return Err(Error::Usage(format!("unknown option {flag}\n{USAGE}")));
                }
                _ if input.is_some() => return Err(Error::Usage(USAGE.to_owned())),
                _ => input = Some(PathBuf::from(arg)),
            }
        }

        let input = input.ok_or_else(|| Error::Usage(USAGE.to_owned()))?;
        Ok(Self {
            input,
            mode,
            use_async,
        })
    }
}

fn parse_mode(value: &str) -> Result<ParseMode> {
    value.parse().map_err(|_| {
        Error::Usage(format!(
            "{MODE_ENV_VAR} must be \"strict\" or \"lenient\", got {value:?}"
        ))
    })
}
