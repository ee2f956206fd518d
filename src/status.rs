//! Payment lifecycle statuses as reported by the Modulr platform.
//!
//! [`PaymentStatus`] is the closed set of known states. Every variant maps to
//! exactly one wire literal (its SCREAMING_SNAKE_CASE name), and the same
//! literal is used for parsing, display and serde, so comparing a status
//! symbolically and comparing its wire string are interchangeable.
//!
//! The platform may add statuses this crate does not know yet. Payloads are
//! therefore read into [`ReportedStatus`], which keeps unrecognized tokens
//! verbatim in [`ReportedStatus::Unknown`] instead of failing. Callers that
//! want a hard failure use [`ParseMode::Strict`] or [`PaymentStatus::parse`].

use std::fmt;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

use crate::classify;
use crate::error::{Error, Result};

#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Submitted,
    ScreeningReq,
    Validated,
    PendingForDate,
    PendingForFunds,
    ExtProc,
    Processed,
    Reconciled,
    ErInvalid,
    ErExtconn,
    ErExtsys,
    ErExpired,
    ErGeneral,
    ErBatch,
    ExtSent,
    Unallocated,
    Held,
    Returned,
    Cancelled,
    Reprocessing,
    Void,
    Clearing,
    HeldInSuspense,
}

/// Coarse grouping of statuses by what they mean for the payment.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatusGroup {
    Intake,
    Pending,
    Settled,
    Error,
    Held,
    TerminalNonError,
    Other,
}

/// How to treat a status token outside the known set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ParseMode {
    /// Keep the raw token as [`ReportedStatus::Unknown`].
    #[default]
    Lenient,
    /// Reject it with [`Error::UnrecognizedStatus`].
    Strict,
}

impl PaymentStatus {
    /// Parses a wire token. Matching is exact: case-sensitive, no trimming.
    pub fn parse(token: &str) -> Result<Self> {
        token
            .parse::<Self>()
            .map_err(|_| Error::UnrecognizedStatus(token.to_owned()))
    }

    /// The wire literal for this status.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn group(self) -> StatusGroup {
        use PaymentStatus::*;

        match self {
            Submitted | ScreeningReq | Validated => StatusGroup::Intake,
            PendingForDate | PendingForFunds | ExtProc | ExtSent => StatusGroup::Pending,
            Processed | Reconciled => StatusGroup::Settled,
            ErInvalid | ErExtconn | ErExtsys | ErExpired | ErGeneral | ErBatch => {
                StatusGroup::Error
            }
            Unallocated | Held | HeldInSuspense | Returned => StatusGroup::Held,
            Cancelled | Void => StatusGroup::TerminalNonError,
            Reprocessing | Clearing => StatusGroup::Other,
        }
    }

    /// See [`classify::is_error`].
    pub fn is_error(self) -> bool {
        classify::is_error(self)
    }
}

/// A status as found in a platform payload: either one this crate knows, or
/// the raw token of one it doesn't.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum ReportedStatus {
    Known(PaymentStatus),
    Unknown(String),
}

impl ReportedStatus {
    /// Lenient parse. Never fails; unrecognized tokens are kept verbatim.
    pub fn parse(token: &str) -> Self {
        match PaymentStatus::parse(token) {
            Ok(status) => ReportedStatus::Known(status),
            Err(_) => ReportedStatus::Unknown(token.to_owned()),
        }
    }

    pub fn parse_with(token: &str, mode: ParseMode) -> Result<Self> {
        match mode {
            ParseMode::Lenient => Ok(Self::parse(token)),
            ParseMode::Strict => PaymentStatus::parse(token).map(ReportedStatus::Known),
        }
    }

    /// Re-checks an already parsed value against `mode`.
    pub fn check(&self, mode: ParseMode) -> Result<()> {
        match (self, mode) {
            (ReportedStatus::Unknown(raw), ParseMode::Strict) => {
                Err(Error::UnrecognizedStatus(raw.clone()))
            }
            _ => Ok(()),
        }
    }

    pub fn known(&self) -> Option<PaymentStatus> {
        match self {
            ReportedStatus::Known(status) => Some(*status),
            ReportedStatus::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ReportedStatus::Unknown(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ReportedStatus::Known(status) => status.as_str(),
            ReportedStatus::Unknown(raw) => raw,
        }
    }

    /// An unknown status is never an error: it is not in the error set.
    pub fn is_error(&self) -> bool {
        self.known().is_some_and(classify::is_error)
    }
}

impl From<PaymentStatus> for ReportedStatus {
    fn from(status: PaymentStatus) -> Self {
        ReportedStatus::Known(status)
    }
}

impl fmt::Display for ReportedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ReportedStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReportedStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match PaymentStatus::parse(&raw) {
            Ok(status) => ReportedStatus::Known(status),
            Err(_) => ReportedStatus::Unknown(raw),
        })
    }
}
