//! Registry error types.

use examseat_core::RoomId;
use thiserror::Error;

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors returned by [`ClassroomRegistry`](crate::ClassroomRegistry) implementations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("room id already exists: {0}")]
    DuplicateRoomId(RoomId),

    #[error("room not found: {0}")]
    NotFound(RoomId),

    /// The backing store failed; the registry contents are unchanged.
    #[error("registry store error: {0}")]
    Store(String),
}

impl RegistryError {
    /// `NotFound` from a remove is informational and safe to ignore.
    pub fn is_informational(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}
