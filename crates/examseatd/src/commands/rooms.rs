//! `examseatd rooms` — registry administration.

use std::fmt::Write as _;

use examseat_core::{Classroom, total_capacity};
use examseat_registry::{ClassroomRegistry, RegistryError};
use tracing::warn;

pub fn add<R: ClassroomRegistry>(registry: &mut R, classroom: Classroom) -> anyhow::Result<()> {
    let room_id = classroom.room_id().to_string();
    match registry.add(classroom) {
        Ok(()) => {
            println!("Classroom {room_id} added");
            Ok(())
        }
        Err(RegistryError::DuplicateRoomId(id)) => {
            anyhow::bail!("room id {id} already exists; choose a different id")
        }
        Err(e) => Err(e.into()),
    }
}

pub fn remove<R: ClassroomRegistry>(registry: &mut R, room_id: &str) -> anyhow::Result<()> {
    match registry.remove(room_id) {
        Ok(()) => println!("Classroom {room_id} removed"),
        Err(e) if e.is_informational() => {
            warn!(room = room_id, "nothing to remove");
            println!("No classroom with id {room_id}");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub fn list<R: ClassroomRegistry>(registry: &R, format: &str) -> anyhow::Result<()> {
    let rooms = registry.list()?;
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&rooms)?),
        _ => print!("{}", render_text(&rooms)),
    }
    Ok(())
}

fn render_text(rooms: &[Classroom]) -> String {
    if rooms.is_empty() {
        return "No classrooms added yet\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{:<12} {:>8} {:>6}  WASHROOM", "ROOM", "CAPACITY", "FLOOR");
    for room in rooms {
        let _ = writeln!(
            out,
            "{:<12} {:>8} {:>6}  {}",
            room.room_id(),
            room.capacity(),
            room.floor_no(),
            if room.near_washroom() { "near" } else { "-" }
        );
    }
    let _ = writeln!(
        out,
        "{} classroom(s), {} seats total",
        rooms.len(),
        total_capacity(rooms)
    );
    out
}
