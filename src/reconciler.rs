use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::warn;

use crate::dto::{PaymentRecord, StatusSummaryRow, UNKNOWN_GROUP};
use crate::status::{ParseMode, ReportedStatus};
use crate::Result;

#[derive(Debug)]
struct Tally {
    count: u64,
    total: Decimal,
}

/// Tracks the latest reported status of every payment seen so far.
#[derive(Debug, Default)]
pub struct Reconciler {
    mode: ParseMode,
    /// Latest observation per payment id
    payments: HashMap<String, PaymentRecord>,
}

impl Reconciler {
    pub fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            payments: HashMap::new(),
        }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Records a status observation. A later observation of the same payment
    /// replaces the earlier one.
    ///
    /// In strict mode an unknown status is rejected and nothing is stored.
    pub fn observe(&mut self, record: PaymentRecord) -> Result<()> {
        record.status.check(self.mode)?;
        if let ReportedStatus::Unknown(raw) = &record.status {
            warn!(payment = %record.id, status = %raw, "unrecognized payment status");
        }
        self.payments.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    pub fn status_of(&self, id: &str) -> Option<&ReportedStatus> {
        self.payments.get(id).map(|record| &record.status)
    }

    /// One row per observed status. Known statuses come first in declaration
    /// order, then unknown ones sorted by raw token. Totals are normalized.
    pub fn summary(&self) -> Vec<StatusSummaryRow> {
        let mut tallies: BTreeMap<&ReportedStatus, Tally> = BTreeMap::new();
        for record in self.payments.values() {
            let tally = tallies.entry(&record.status).or_insert(Tally {
                count: 0,
                total: Decimal::ZERO,
            });
            tally.count += 1;
            if let Some(amount) = record.amount {
                tally.total += amount;
            }
        }

        tallies
            .into_iter()
            .map(|(status, tally)| StatusSummaryRow {
                status: status.clone(),
                group: status
                    .known()
                    .map_or(UNKNOWN_GROUP, |known| known.group().into()),
                error: status.is_error(),
                count: tally.count,
                total: tally.total.normalize(),
            })
            .collect()
    }

    /// Ids of payments whose latest status is an error status, sorted.
    pub fn failed_payments(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .payments
            .values()
            .filter(|record| record.status.is_error())
            .map(|record| record.id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Distinct raw tokens of unrecognized statuses, sorted.
    pub fn unknown_statuses(&self) -> Vec<&str> {
        self.payments
            .values()
            .filter_map(|record| match &record.status {
                ReportedStatus::Unknown(raw) => Some(raw.as_str()),
                ReportedStatus::Known(_) => None,
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
