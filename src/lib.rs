//! # Numtracker
//!
//! An arithmetic tracker core: a running total mutated by four operations,
//! an append-only history of what was applied, and statistics derived from
//! that history. State survives restarts via a small file-backed key-value
//! store.
//!
//! ## Core Concepts
//!
//! - **Accumulator**: the single running total; a pure reducer applies one
//!   operation at a time
//! - **Operation Log**: newest-first, append-only history of applied operations
//! - **Statistics**: counts, percentages, and distribution derived from the log
//! - **Tracker**: the controller owning all state; validates, applies, persists
//!
//! ## Example
//!
//! ```ignore
//! use numtracker::{OperationKind, Tracker, TrackerConfig};
//!
//! let mut tracker = Tracker::open(TrackerConfig {
//!     path: "./my-tracker".into(),
//! })?;
//!
//! tracker.request_operation(OperationKind::Add, "5")?;
//! tracker.request_operation(OperationKind::Multiply, "3")?;
//! assert_eq!(tracker.current(), 15.0);
//!
//! let stats = tracker.stats();
//! assert_eq!(stats.total_count(), 2);
//! ```

pub mod accumulator;
pub mod error;
pub mod records;
pub mod stats;
pub mod storage;
pub mod tracker;
pub mod types;

// Re-exports
pub use error::{Result, TrackerError};
pub use records::OperationLog;
pub use stats::{DistributionRow, Statistics};
pub use storage::{LocalStore, CURRENT_KEY, OPERATIONS_KEY};
pub use tracker::{Tracker, TrackerConfig};
pub use types::{OperationKind, OperationRecord, ViewMode};
