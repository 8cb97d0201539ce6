//! In-memory classroom registry.

use examseat_core::Classroom;
use tracing::debug;

use crate::error::{RegistryError, RegistryResult};
use crate::ClassroomRegistry;

/// Classrooms held in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    rooms: Vec<Classroom>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from existing classrooms, rejecting duplicate ids.
    pub fn from_classrooms(
        classrooms: impl IntoIterator<Item = Classroom>,
    ) -> RegistryResult<Self> {
        let mut registry = Self::new();
        for classroom in classrooms {
            registry.add(classroom)?;
        }
        Ok(registry)
    }

    pub fn get(&self, room_id: &str) -> Option<&Classroom> {
        self.rooms.iter().find(|r| r.room_id() == room_id)
    }

    pub fn contains(&self, room_id: &str) -> bool {
        self.get(room_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl ClassroomRegistry for MemoryRegistry {
    fn add(&mut self, classroom: Classroom) -> RegistryResult<()> {
        if self.contains(classroom.room_id()) {
            return Err(RegistryError::DuplicateRoomId(classroom.room_id().to_string()));
        }
        debug!(room = classroom.room_id(), capacity = classroom.capacity(), "classroom added");
        self.rooms.push(classroom);
        Ok(())
    }

    fn remove(&mut self, room_id: &str) -> RegistryResult<()> {
        let Some(pos) = self.rooms.iter().position(|r| r.room_id() == room_id) else {
            return Err(RegistryError::NotFound(room_id.to_string()));
        };
        self.rooms.remove(pos);
        debug!(room = room_id, "classroom removed");
        Ok(())
    }

    fn list(&self) -> RegistryResult<Vec<Classroom>> {
        Ok(self.rooms.clone())
    }
}
