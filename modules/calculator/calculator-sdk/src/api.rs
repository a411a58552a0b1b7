//! Calculator API trait and types
//!
//! Contract trait and types for the calculator service.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use tonic::{Code, Status};

use crate::proto;

/// Arithmetic operation applied to the two operands.
///
/// Closed set: anything else arriving on the wire is rejected while
/// converting from the raw enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }

    /// Raw protobuf enum value.
    #[must_use]
    pub fn to_wire(self) -> i32 {
        proto::Operation::from(self).into()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Operation> for proto::Operation {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Add => Self::Add,
            Operation::Subtract => Self::Subtract,
        }
    }
}

impl From<proto::Operation> for Operation {
    fn from(op: proto::Operation) -> Self {
        match op {
            proto::Operation::Add => Self::Add,
            proto::Operation::Subtract => Self::Subtract,
        }
    }
}

impl TryFrom<i32> for Operation {
    type Error = UnknownOperation;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        proto::Operation::try_from(value)
            .map(Self::from)
            .map_err(|_| UnknownOperation::Code(value))
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("add") {
            Ok(Self::Add)
        } else if s.eq_ignore_ascii_case("subtract") || s.eq_ignore_ascii_case("sub") {
            Ok(Self::Subtract)
        } else {
            Err(UnknownOperation::Name(s.to_owned()))
        }
    }
}

/// An operation outside the supported enumeration.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UnknownOperation {
    #[error("unknown operation value {0}")]
    Code(i32),

    #[error("unknown operation '{0}', expected 'add' or 'subtract'")]
    Name(String),
}

/// Calculator API trait
///
/// Stateless: identical inputs always produce identical outputs.
///
/// # Errors
/// Every method fails with [`CalculatorError`] when the call does not
/// complete; no fallback result is ever produced.
#[async_trait]
pub trait CalculatorClient: Send + Sync {
    /// Apply `operation` to the operands.
    async fn calculate(
        &self,
        first_operand: f32,
        second_operand: f32,
        operation: Operation,
    ) -> Result<f32, CalculatorError>;

    /// `a + b`
    async fn add(&self, a: f32, b: f32) -> Result<f32, CalculatorError> {
        self.calculate(a, b, Operation::Add).await
    }

    /// `a - b`
    async fn subtract(&self, a: f32, b: f32) -> Result<f32, CalculatorError> {
        self.calculate(a, b, Operation::Subtract).await
    }
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug)]
pub enum CalculatorError {
    #[error("unimplemented operation: {0}")]
    Unimplemented(String),

    /// Rejected by an intermediary such as a proxy or the transport itself;
    /// the calculator service never returns `INVALID_ARGUMENT`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("gRPC call failed ({code}): {message}")]
    Transport { code: Code, message: String },
}

impl From<Status> for CalculatorError {
    fn from(status: Status) -> Self {
        match status.code() {
            Code::Unimplemented => Self::Unimplemented(status.message().to_owned()),
            Code::InvalidArgument => Self::InvalidArgument(status.message().to_owned()),
            code => Self::Transport {
                code,
                message: status.message().to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_match_proto() {
        assert_eq!(Operation::Add.to_wire(), 0);
        assert_eq!(Operation::Subtract.to_wire(), 1);
    }

    #[test]
    fn test_try_from_known_values() {
        assert_eq!(Operation::try_from(0), Ok(Operation::Add));
        assert_eq!(Operation::try_from(1), Ok(Operation::Subtract));
    }

    #[test]
    fn test_try_from_unknown_value() {
        assert_eq!(Operation::try_from(2), Err(UnknownOperation::Code(2)));
        assert_eq!(Operation::try_from(-1), Err(UnknownOperation::Code(-1)));
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("ADD".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("subtract".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!(" sub ".parse::<Operation>(), Ok(Operation::Subtract));
        assert!(matches!(
            "multiply".parse::<Operation>(),
            Err(UnknownOperation::Name(name)) if name == "multiply"
        ));
    }

    #[test]
    fn test_status_mapping() {
        let err = CalculatorError::from(Status::unimplemented("operation 7"));
        assert!(matches!(err, CalculatorError::Unimplemented(msg) if msg == "operation 7"));

        let err = CalculatorError::from(Status::invalid_argument("bad"));
        assert!(matches!(err, CalculatorError::InvalidArgument(_)));

        let err = CalculatorError::from(Status::unavailable("down"));
        assert!(matches!(
            err,
            CalculatorError::Transport { code: Code::Unavailable, .. }
        ));
    }
}
