//! Error-status classification.
//!
//! A payment is in an error state when the platform failed to process it and
//! will not retry on its own. This is narrower than "did not complete":
//! held, returned, cancelled and void payments are not errors.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::status::PaymentStatus;

/// The statuses that mark a platform processing failure.
///
/// Membership is listed explicitly. A new upstream error status is not picked
/// up by name pattern; it has to be added here.
pub static ERROR_STATUSES: Lazy<HashSet<PaymentStatus>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.insert(PaymentStatus::ErInvalid);
    set.insert(PaymentStatus::ErExtconn);
    set.insert(PaymentStatus::ErExtsys);
    set.insert(PaymentStatus::ErExpired);
    set.insert(PaymentStatus::ErGeneral);
    set.insert(PaymentStatus::ErBatch);
    set
});

pub fn is_error(status: PaymentStatus) -> bool {
    ERROR_STATUSES.contains(&status)
}
