//! The running-total reducer.

use crate::error::{Result, TrackerError};
use crate::types::OperationKind;

/// Apply one operation to the current accumulator value.
///
/// Pure function: standard IEEE-754 arithmetic, no side effects. The only
/// failure is dividing by a zero operand.
pub fn apply(current: f64, kind: OperationKind, operand: f64) -> Result<f64> {
    match kind {
        OperationKind::Add => Ok(current + operand),
        OperationKind::Subtract => Ok(current - operand),
        OperationKind::Multiply => Ok(current * operand),
        OperationKind::Divide => {
            if operand == 0.0 {
                Err(TrackerError::DivideByZero)
            } else {
                Ok(current / operand)
            }
        }
    }
}
