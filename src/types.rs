//! Core types for the tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four arithmetic operations. Closed set, no extensibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationKind {
    /// All kinds, in display order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
    ];

    /// Display glyph for the operation.
    pub fn symbol(self) -> char {
        match self {
            OperationKind::Add => '+',
            OperationKind::Subtract => '−',
            OperationKind::Multiply => '×',
            OperationKind::Divide => '÷',
        }
    }

    /// Stable lowercase name, matching the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One immutable entry in the operation log.
///
/// Serialized field names (`type`, `value`, `timestamp`) are part of the
/// persisted format and must not change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    /// Unique identifier (creation-time Unix milliseconds as a string).
    pub id: String,

    /// Which operation was applied.
    #[serde(rename = "type")]
    pub kind: OperationKind,

    /// The operand supplied by the user.
    #[serde(rename = "value")]
    pub operand: f64,

    /// Accumulator value after applying this operation.
    pub result: f64,

    /// When the record was created (round-trips as RFC 3339 text).
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl OperationRecord {
    /// Build a record for an operation applied at this instant.
    pub fn new(kind: OperationKind, operand: f64, result: f64) -> Self {
        let created_at = Utc::now();
        Self {
            id: created_at.timestamp_millis().to_string(),
            kind,
            operand,
            result,
            created_at,
        }
    }
}

/// Which view the user is looking at. In-memory only, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Calculator,
    Statistics,
}
