//! examseat-api — REST API for examseat.
//!
//! Provides axum route handlers for the classroom registry and seat
//! allocation. Paths and JSON field names match the existing web frontend.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/api/classrooms` | List all classrooms |
//! | POST | `/api/classrooms` | Add a classroom |
//! | DELETE | `/api/classrooms/:roomId` | Remove a classroom |
//! | POST | `/api/allocate` | Allocate seats for `totalStudents` |

pub mod handlers;
pub mod wire;

use axum::Router;
use axum::routing::{delete, get, post};
use examseat_state::StateStore;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub store: StateStore,
    /// Reject classrooms with a negative floor number on create.
    pub reject_negative_floors: bool,
}

impl ApiState {
    pub fn new(store: StateStore) -> Self {
        Self {
            store,
            reject_negative_floors: true,
        }
    }
}

/// Build the complete API router.
pub fn build_router(state: ApiState) -> Router {
    let api_routes = Router::new()
        .route(
            "/classrooms",
            get(handlers::list_classrooms).post(handlers::create_classroom),
        )
        .route("/classrooms/{room_id}", delete(handlers::delete_classroom))
        .route("/allocate", post(handlers::allocate_seats))
        .with_state(state);

    Router::new().nest("/api", api_routes)
}
