//! REST API handlers.
//!
//! Each handler reads/writes via `StateStore` and returns JSON responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{debug, info, warn};

use examseat_alloc::{AllocationError, allocate};
use examseat_core::Classroom;

use crate::ApiState;
use crate::wire::*;

fn error_response(msg: &str, status: StatusCode) -> impl IntoResponse {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: msg.to_string(),
        }),
    )
}

/// Map a body the `Json` extractor could not read to a 400 error body.
fn rejection_response(rejection: JsonRejection) -> axum::response::Response {
    debug!(error = %rejection.body_text(), "rejected request body");
    error_response("Invalid request body", StatusCode::BAD_REQUEST).into_response()
}

// ── Classrooms ─────────────────────────────────────────────────

/// GET /api/classrooms
pub async fn list_classrooms(State(state): State<ApiState>) -> impl IntoResponse {
    match state.store.list_classrooms() {
        Ok(classrooms) => Json(classrooms).into_response(),
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

/// POST /api/classrooms
pub async fn create_classroom(
    State(state): State<ApiState>,
    payload: Result<Json<CreateClassroomRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection),
    };
    let near_washroom = req.near_washroom.as_ref().is_some_and(parse_flag);

    let (Some(room_id), Some(capacity), Some(floor_no)) = (
        req.room_id.as_ref().and_then(parse_room_id),
        req.capacity.filter(|c| !c.is_null()),
        req.floor_no.filter(|f| !f.is_null()),
    ) else {
        return error_response("Missing required fields", StatusCode::BAD_REQUEST).into_response();
    };

    let (Some(capacity), Some(floor_no)) = (parse_int(&capacity), parse_int(&floor_no)) else {
        return error_response("Invalid input types", StatusCode::BAD_REQUEST).into_response();
    };

    if capacity <= 0 {
        return error_response("Capacity must be greater than 0", StatusCode::BAD_REQUEST)
            .into_response();
    }
    if floor_no < 0 && state.reject_negative_floors {
        return error_response("Floor number cannot be negative", StatusCode::BAD_REQUEST)
            .into_response();
    }
    let (Ok(capacity), Ok(floor_no)) = (u32::try_from(capacity), i32::try_from(floor_no)) else {
        return error_response("Invalid input types", StatusCode::BAD_REQUEST).into_response();
    };

    let classroom = match Classroom::new(room_id, capacity, floor_no, near_washroom) {
        Ok(c) => c,
        Err(e) => return error_response(&e.to_string(), StatusCode::BAD_REQUEST).into_response(),
    };

    match state.store.insert_classroom(&classroom) {
        Ok(true) => {
            info!(room = classroom.room_id(), capacity, floor_no, "classroom created");
            (
                StatusCode::CREATED,
                Json(CreatedResponse {
                    success: true,
                    classroom,
                }),
            )
                .into_response()
        }
        Ok(false) => {
            debug!(room = classroom.room_id(), "duplicate room id");
            error_response("Room ID already exists", StatusCode::CONFLICT).into_response()
        }
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

/// DELETE /api/classrooms/:roomId
pub async fn delete_classroom(
    State(state): State<ApiState>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    match state.store.delete_classroom(&room_id) {
        Ok(true) => {
            info!(room = %room_id, "classroom deleted");
            Json(MessageResponse {
                success: true,
                message: "Classroom deleted".to_string(),
            })
            .into_response()
        }
        Ok(false) => error_response("classroom not found", StatusCode::NOT_FOUND).into_response(),
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}

// ── Allocation ─────────────────────────────────────────────────

/// POST /api/allocate
pub async fn allocate_seats(
    State(state): State<ApiState>,
    payload: Result<Json<AllocateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection),
    };
    let total_students = match req.total_students.filter(|v| !v.is_null()) {
        None => 0,
        Some(v) => match parse_int(&v) {
            Some(n) => n,
            None => {
                return error_response("Invalid total students value", StatusCode::BAD_REQUEST)
                    .into_response();
            }
        },
    };

    // One read transaction; the pass never goes back to the store.
    let snapshot = match state.store.list_classrooms() {
        Ok(rooms) => rooms,
        Err(e) => {
            return error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR)
                .into_response();
        }
    };

    match allocate(&snapshot, total_students) {
        Ok(result) => Json(AllocationResponse::from(result)).into_response(),
        Err(AllocationError::InvalidDemand(n)) => {
            warn!(total_students = n, "rejected allocation request");
            error_response("Total students must be greater than 0", StatusCode::BAD_REQUEST)
                .into_response()
        }
        Err(e) => error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response(),
    }
}
