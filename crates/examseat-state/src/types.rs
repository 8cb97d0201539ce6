//! Persisted record types.

use examseat_core::Classroom;
use serde::{Deserialize, Serialize};

/// A classroom as stored, tagged with the order it was added in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassroomRecord {
    pub seq: u64,
    pub classroom: Classroom,
}
