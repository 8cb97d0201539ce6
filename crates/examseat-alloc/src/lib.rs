//! examseat allocator — greedy exam seating across classrooms.
//!
//! Given a snapshot of classrooms and a student count, the allocator walks
//! the rooms in a fixed order (lowest floor first, then smallest room first)
//! and fills each one until every student is seated. It does not backtrack
//! or try to minimise rooms used.
//!
//! # Components
//!
//! - **`order`** — the stable floor/capacity seating order
//! - **`allocator`** — the greedy pass and its result types
//! - **`error`** — demand validation errors

pub mod allocator;
pub mod error;
pub mod order;

pub use allocator::{
    AllocationPlan, AllocationResult, RoomAllocation, ShortageReport, allocate, allocate_from,
};
pub use error::{AllocResult, AllocationError};
pub use order::{compare_rooms, seating_order};
