//! Allocator error types.

use thiserror::Error;

/// Errors that stop an allocation pass before it starts.
///
/// A capacity shortfall is not an error; it is reported through
/// [`crate::AllocationResult::Shortage`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("total students must be greater than 0, got {0}")]
    InvalidDemand(i64),

    #[error("registry error: {0}")]
    Registry(String),
}

impl From<examseat_registry::RegistryError> for AllocationError {
    fn from(e: examseat_registry::RegistryError) -> Self {
        AllocationError::Registry(e.to_string())
    }
}

pub type AllocResult<T> = Result<T, AllocationError>;
