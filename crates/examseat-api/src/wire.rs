//! Request and response bodies.

use examseat_alloc::{AllocationResult, RoomAllocation};
use examseat_core::Classroom;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST /api/classrooms body. Fields stay loose so missing and mistyped
/// values can be told apart.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassroomRequest {
    pub room_id: Option<Value>,
    pub capacity: Option<Value>,
    pub floor_no: Option<Value>,
    pub near_washroom: Option<Value>,
}

/// POST /api/allocate body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateRequest {
    pub total_students: Option<Value>,
}

/// 201 body for a created classroom.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub classroom: Classroom,
}

/// Plain acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Allocation body: `totalRoomsUsed` on success, `shortage` otherwise.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationResponse {
    pub success: bool,
    pub message: String,
    pub allocated: Vec<RoomAllocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rooms_used: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortage: Option<u64>,
}

impl From<AllocationResult> for AllocationResponse {
    fn from(result: AllocationResult) -> Self {
        match result {
            AllocationResult::Success(plan) => Self {
                success: true,
                message: plan.message,
                allocated: plan.allocated,
                total_rooms_used: Some(plan.total_rooms_used),
                shortage: None,
            },
            AllocationResult::Shortage(report) => Self {
                success: false,
                message: report.message,
                allocated: Vec::new(),
                total_rooms_used: None,
                shortage: Some(report.shortage),
            },
        }
    }
}

/// Read an integer from a JSON number or a numeric string.
///
/// Floats are truncated toward zero. Values outside the `i64` range and
/// anything else are `None`.
pub fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?.trunc();
            // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
            (f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a room id from a JSON string or number. Empty strings, `null` and
/// other JSON types are `None`.
pub fn parse_room_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read the washroom flag by JSON truthiness; `"true"`/`"false"` strings
/// are read by their text.
pub fn parse_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            _ => false,
        },
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Null => false,
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
