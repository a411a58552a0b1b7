//! Domain service for calculator
//!
//! Contains the core arithmetic dispatch.

use calculator_sdk::Operation;
use tracing::debug;

use super::DomainError;

/// Apply `operation` to the operands.
///
/// IEEE-754 semantics throughout: `NaN` and infinities are passed through
/// without special-casing.
#[must_use]
pub fn calculate(first_operand: f32, second_operand: f32, operation: Operation) -> f32 {
    let result = match operation {
        Operation::Add => first_operand + second_operand,
        Operation::Subtract => first_operand - second_operand,
    };
    debug!(first_operand, second_operand, %operation, result, "performed calculation");
    result
}

/// Same as [`calculate`], starting from the raw protobuf enum value.
///
/// # Errors
/// Returns [`DomainError::UnimplementedOperation`] for values outside the
/// [`Operation`] enumeration.
pub fn calculate_wire(
    first_operand: f32,
    second_operand: f32,
    raw_operation: i32,
) -> Result<f32, DomainError> {
    let operation = Operation::try_from(raw_operation)
        .map_err(|_| DomainError::UnimplementedOperation(raw_operation))?;
    Ok(calculate(first_operand, second_operand, operation))
}
