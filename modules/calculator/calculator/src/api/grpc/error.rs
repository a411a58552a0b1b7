use tonic::Status;

use crate::domain::DomainError;

impl From<DomainError> for Status {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnimplementedOperation(_) => Self::unimplemented(err.to_string()),
        }
    }
}
