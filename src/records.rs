//! Append-only operation log, newest first.

use crate::types::{OperationKind, OperationRecord};
use std::collections::VecDeque;

/// Ordered history of applied operations.
///
/// Records are kept newest-first for display; chronological order is the
/// reverse of iteration order. No size cap, no eviction, no deduplication.
#[derive(Clone, Debug, Default)]
pub struct OperationLog {
    records: VecDeque<OperationRecord>,
}

impl OperationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from records already in newest-first order.
    pub fn from_records(records: Vec<OperationRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Prepend a record. O(1).
    pub fn append(&mut self, record: OperationRecord) {
        self.records.push_front(record);
    }

    /// Empty the log.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterate records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &OperationRecord> {
        self.records.iter()
    }

    /// The newest record, if any.
    pub fn most_recent(&self) -> Option<&OperationRecord> {
        self.records.front()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records of a given kind.
    pub fn count_by_kind(&self, kind: OperationKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a OperationLog {
    type Item = &'a OperationRecord;
    type IntoIter = std::collections::vec_deque::Iter<'a, OperationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
