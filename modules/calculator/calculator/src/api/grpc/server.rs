//! gRPC Server implementation for calculator
//!
//! Decodes the wire request and delegates to the domain layer.

use tonic::{Request, Response, Status};

use calculator_sdk::{BinaryOperation, CalculationResult, Calculator};

use crate::domain;

/// gRPC service implementation. Stateless, so every call is independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct CalculatorServiceImpl;

impl CalculatorServiceImpl {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[tonic::async_trait]
impl Calculator for CalculatorServiceImpl {
    async fn calculate(
        &self,
        request: Request<BinaryOperation>,
    ) -> Result<Response<CalculationResult>, Status> {
        let req = request.into_inner();

        let result =
            domain::calculate_wire(req.first_operand, req.second_operand, req.operation)
                .inspect_err(|e| {
                    tracing::warn!(operation = req.operation, error = %e, "rejected calculation");
                })?;

        Ok(Response::new(CalculationResult { result }))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;
    use tonic::Code;

    fn request(
        first_operand: f32,
        second_operand: f32,
        operation: i32,
    ) -> Request<BinaryOperation> {
        Request::new(BinaryOperation {
            first_operand,
            second_operand,
            operation,
        })
    }

    #[tokio::test]
    async fn test_add_request() {
        let svc = CalculatorServiceImpl::new();
        let resp = svc.calculate(request(2.0, 3.0, 0)).await.unwrap();
        assert_eq!(resp.into_inner().result, 5.0);
    }

    #[tokio::test]
    async fn test_subtract_request() {
        let svc = CalculatorServiceImpl::new();
        let resp = svc.calculate(request(2.0, 3.0, 1)).await.unwrap();
        assert_eq!(resp.into_inner().result, -1.0);
    }

    #[tokio::test]
    async fn test_unknown_operation_is_unimplemented() {
        let svc = CalculatorServiceImpl::new();
        let status = svc.calculate(request(2.0, 3.0, 42)).await.unwrap_err();
        assert_eq!(status.code(), Code::Unimplemented);
    }
}
