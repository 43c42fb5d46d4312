//! Application controller tying all components together.

use crate::accumulator;
use crate::error::{Result, TrackerError};
use crate::records::OperationLog;
use crate::stats::Statistics;
use crate::storage::LocalStore;
use crate::types::{OperationKind, OperationRecord, ViewMode};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Tracker configuration.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    /// Directory where state is persisted.
    pub path: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./numtracker"),
        }
    }
}

/// The arithmetic tracker.
///
/// Exclusively owns the accumulator value, the operation log, the pending
/// input text, and the view selection. Every request runs to completion
/// synchronously; a rejected request mutates nothing.
pub struct Tracker {
    current: f64,
    log: OperationLog,
    pending_input: String,
    view: ViewMode,
    storage: LocalStore,
}

impl Tracker {
    /// Open a tracker, restoring persisted state.
    ///
    /// Missing or unreadable persisted entries silently default to an
    /// accumulator of zero and an empty log.
    pub fn open(config: TrackerConfig) -> Result<Self> {
        let storage = LocalStore::open(&config.path)?;
        let (current, log) = storage.load();

        debug!(current, records = log.len(), "tracker opened");

        Ok(Self {
            current,
            log,
            pending_input: String::new(),
            view: ViewMode::default(),
            storage,
        })
    }

    /// Apply one operation to the running total.
    ///
    /// Parses `raw_input`, applies it under `kind`, records the result, and
    /// persists. On failure (`InvalidNumber`, `DivideByZero`) nothing
    /// changes: no log entry, no accumulator update, no persistence.
    pub fn request_operation(
        &mut self,
        kind: OperationKind,
        raw_input: &str,
    ) -> Result<OperationRecord> {
        let operand = parse_operand(raw_input)?;
        let result = accumulator::apply(self.current, kind, operand)?;

        let record = OperationRecord::new(kind, operand, result);
        self.log.append(record.clone());
        self.current = result;
        self.pending_input.clear();
        self.persist();

        debug!(%kind, operand, result, "operation applied");
        Ok(record)
    }

    /// Reset the accumulator to zero and empty the log. Always succeeds.
    pub fn clear_all(&mut self) {
        self.current = 0.0;
        self.log.clear();
        self.pending_input.clear();
        self.persist();

        debug!("tracker cleared");
    }

    /// Current accumulator value.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// The operation log, newest first.
    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    /// Statistics over the current log snapshot.
    pub fn stats(&self) -> Statistics<'_> {
        Statistics::new(&self.log)
    }

    /// Pending input text, as typed so far.
    pub fn input(&self) -> &str {
        &self.pending_input
    }

    /// Replace the pending input text.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Which view is selected.
    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch between the calculator and statistics views.
    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    /// Write the accumulator and log to storage.
    ///
    /// Storage write failures are not recoverable from here; log and move on.
    fn persist(&self) {
        if let Err(e) = self.storage.save(self.current, &self.log) {
            warn!(error = %e, "failed to persist tracker state");
        }
    }
}

/// Parse user input into a finite operand.
fn parse_operand(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| TrackerError::InvalidNumber(raw.to_string()))?;

    // NaN and infinities would poison the running total
    if !value.is_finite() {
        return Err(TrackerError::InvalidNumber(raw.to_string()));
    }

    Ok(value)
}
