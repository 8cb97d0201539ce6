//! examseat-registry — the authoritative set of known classrooms.
//!
//! A registry owns its collection and enforces the one structural invariant:
//! no two classrooms share a `roomId`. Ordering is not part of the contract;
//! the allocator sorts its own snapshot.
//!
//! # Components
//!
//! - **`ClassroomRegistry`** — add / remove / list contract shared by every backend
//! - **`MemoryRegistry`** — in-process registry kept in insertion order
//!
//! The persistent backend lives in `examseat-state`.

pub mod error;
pub mod memory;

use examseat_core::Classroom;

pub use error::{RegistryError, RegistryResult};
pub use memory::MemoryRegistry;

/// Add / remove / list over a set of classrooms with unique room ids.
pub trait ClassroomRegistry {
    /// Add a classroom. Fails with [`RegistryError::DuplicateRoomId`] and
    /// leaves the registry unchanged if the id is already present.
    fn add(&mut self, classroom: Classroom) -> RegistryResult<()>;

    /// Remove the classroom with `room_id`. Fails with
    /// [`RegistryError::NotFound`] if there is none.
    fn remove(&mut self, room_id: &str) -> RegistryResult<()>;

    /// Snapshot of the current classrooms.
    fn list(&self) -> RegistryResult<Vec<Classroom>>;
}
