//! Shared types used across examseat crates.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a classroom within a registry.
pub type RoomId = String;

/// Reasons a classroom description is rejected before it reaches a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassroomError {
    #[error("room id must not be empty")]
    EmptyRoomId,

    #[error("capacity of room {0} must be greater than 0")]
    ZeroCapacity(RoomId),
}

/// A room available for exam seating.
///
/// Fields are fixed at construction; there is no update path. On the wire the
/// field names are `roomId`, `capacity`, `floorNo` and `nearWashroom`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ClassroomFields")]
pub struct Classroom {
    room_id: RoomId,
    capacity: u32,
    floor_no: i32,
    near_washroom: bool,
}

impl Classroom {
    /// Build a validated classroom. The room id is trimmed.
    pub fn new(
        room_id: impl Into<String>,
        capacity: u32,
        floor_no: i32,
        near_washroom: bool,
    ) -> Result<Self, ClassroomError> {
        let room_id = room_id.into().trim().to_string();
        if room_id.is_empty() {
            return Err(ClassroomError::EmptyRoomId);
        }
        if capacity == 0 {
            return Err(ClassroomError::ZeroCapacity(room_id));
        }
        Ok(Self {
            room_id,
            capacity,
            floor_no,
            near_washroom,
        })
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn floor_no(&self) -> i32 {
        self.floor_no
    }

    pub fn near_washroom(&self) -> bool {
        self.near_washroom
    }
}

/// Unvalidated wire form; every deserialized [`Classroom`] passes through
/// [`Classroom::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClassroomFields {
    room_id: String,
    capacity: u32,
    floor_no: i32,
    #[serde(default)]
    near_washroom: bool,
}

impl TryFrom<ClassroomFields> for Classroom {
    type Error = ClassroomError;

    fn try_from(f: ClassroomFields) -> Result<Self, Self::Error> {
        Classroom::new(f.room_id, f.capacity, f.floor_no, f.near_washroom)
    }
}

/// Combined seating capacity of a set of rooms.
pub fn total_capacity(rooms: &[Classroom]) -> u64 {
    rooms.iter().map(|r| u64::from(r.capacity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_room_id() {
        let room = Classroom::new("  A-101 ", 30, 1, false).unwrap();
        assert_eq!(room.room_id(), "A-101");
    }

    #[test]
    fn rejects_blank_room_id() {
        assert_eq!(
            Classroom::new("   ", 30, 1, false),
            Err(ClassroomError::EmptyRoomId)
        );
    }

    #[test]
    fn rejects_zero_capacity() {
        assert_eq!(
            Classroom::new("A", 0, 1, false),
            Err(ClassroomError::ZeroCapacity("A".to_string()))
        );
    }

    #[test]
    fn negative_and_zero_floors_are_allowed() {
        assert!(Classroom::new("basement", 10, -1, false).is_ok());
        assert!(Classroom::new("ground", 10, 0, true).is_ok());
    }

    #[test]
    fn json_uses_camel_case_field_names() {
        let room = Classroom::new("B", 20, 1, true).unwrap();
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "roomId": "B",
                "capacity": 20,
                "floorNo": 1,
                "nearWashroom": true
            })
        );
    }

    #[test]
    fn deserialize_defaults_near_washroom() {
        let room: Classroom =
            serde_json::from_str(r#"{"roomId":"C","capacity":50,"floorNo":1}"#).unwrap();
        assert!(!room.near_washroom());
    }

    #[test]
    fn deserialize_runs_validation() {
        let err = serde_json::from_str::<Classroom>(
            r#"{"roomId":"C","capacity":0,"floorNo":1,"nearWashroom":false}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn total_capacity_sums_rooms() {
        let rooms = vec![
            Classroom::new("A", 30, 2, false).unwrap(),
            Classroom::new("B", 20, 1, false).unwrap(),
            Classroom::new("C", 50, 1, false).unwrap(),
        ];
        assert_eq!(total_capacity(&rooms), 100);
        assert_eq!(total_capacity(&[]), 0);
    }
}
