/// Error type for domain operations.
///
/// Converted to a terminal `tonic::Status` at the gRPC boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request named an operation value outside the supported set.
    #[error("unimplemented operation: {0}")]
    UnimplementedOperation(i32),
}
