//! Read-only statistics derived from the operation log.

use crate::records::OperationLog;
use crate::types::{OperationKind, OperationRecord};

/// Pure read-model over a log snapshot.
///
/// Nothing is cached; every call recomputes from the log. Data volumes are
/// bounded by manual user interaction, so this is cheap enough.
pub struct Statistics<'a> {
    log: &'a OperationLog,
}

/// One row of the per-kind distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistributionRow {
    pub kind: OperationKind,
    pub count: usize,
    pub percentage: f64,
}

impl<'a> Statistics<'a> {
    pub fn new(log: &'a OperationLog) -> Self {
        Self { log }
    }

    /// Total number of recorded operations.
    pub fn total_count(&self) -> usize {
        self.log.len()
    }

    /// Number of operations of one kind.
    pub fn count_by_kind(&self, kind: OperationKind) -> usize {
        self.log.count_by_kind(kind)
    }

    /// Share of one kind in percent. Zero for an empty log; this is a
    /// display convention, not the accumulator's divide operation.
    pub fn percentage(&self, kind: OperationKind) -> f64 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        self.count_by_kind(kind) as f64 / total as f64 * 100.0
    }

    /// The most recently applied operation, if any.
    pub fn most_recent(&self) -> Option<&OperationRecord> {
        self.log.most_recent()
    }

    /// Per-kind counts and percentages, in display order.
    pub fn distribution(&self) -> Vec<DistributionRow> {
        OperationKind::ALL
            .iter()
            .map(|&kind| DistributionRow {
                kind,
                count: self.count_by_kind(kind),
                percentage: self.percentage(kind),
            })
            .collect()
    }
}
