//! Greedy allocation pass.
//!
//! Walks the seating order once, giving each room `min(capacity, remaining)`
//! students, and stops as soon as everyone is seated. If the rooms run out
//! first the partial plan is discarded and only the shortfall is reported.

use examseat_core::Classroom;
use examseat_registry::ClassroomRegistry;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{AllocResult, AllocationError};
use crate::order::seating_order;

/// Summary message for a shortage.
pub const SHORTAGE_MESSAGE: &str = "Not enough seats available";

/// Seats given to one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAllocation {
    pub room_id: String,
    pub capacity: u32,
    pub floor_no: i32,
    pub near_washroom: bool,
    /// Never exceeds `capacity`.
    pub seats_allocated: u32,
}

/// Every student seated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationPlan {
    /// Rooms in the order they were filled.
    pub allocated: Vec<RoomAllocation>,
    pub total_rooms_used: usize,
    pub message: String,
}

impl AllocationPlan {
    pub fn seats_allocated(&self) -> u64 {
        self.allocated
            .iter()
            .map(|a| u64::from(a.seats_allocated))
            .sum()
    }
}

/// Combined capacity ran out before every student was seated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortageReport {
    /// Students left without a seat.
    pub shortage: u64,
    pub message: String,
}

/// Outcome of a valid allocation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationResult {
    Success(AllocationPlan),
    Shortage(ShortageReport),
}

impl AllocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, AllocationResult::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            AllocationResult::Success(plan) => &plan.message,
            AllocationResult::Shortage(report) => &report.message,
        }
    }
}

/// Allocate `total_students` across `rooms`.
///
/// Fails with [`AllocationError::InvalidDemand`] when `total_students` is
/// zero or negative. A valid demand always yields a result, including for an
/// empty room set (a shortage of the full demand).
pub fn allocate(rooms: &[Classroom], total_students: i64) -> AllocResult<AllocationResult> {
    if total_students <= 0 {
        return Err(AllocationError::InvalidDemand(total_students));
    }
    let demand = total_students.unsigned_abs();

    let mut remaining = demand;
    let mut allocated: Vec<RoomAllocation> = Vec::new();

    for room in seating_order(rooms) {
        if remaining == 0 {
            break;
        }
        let seats_allocated =
            u32::try_from(remaining).map_or(room.capacity(), |r| r.min(room.capacity()));
        allocated.push(RoomAllocation {
            room_id: room.room_id().to_string(),
            capacity: room.capacity(),
            floor_no: room.floor_no(),
            near_washroom: room.near_washroom(),
            seats_allocated,
        });
        remaining -= u64::from(seats_allocated);
        debug!(
            room = room.room_id(),
            floor = room.floor_no(),
            seats = seats_allocated,
            remaining,
            "seated students"
        );
    }

    if remaining > 0 {
        warn!(
            total_students,
            shortage = remaining,
            rooms = rooms.len(),
            "could not seat all students, insufficient capacity"
        );
        return Ok(AllocationResult::Shortage(ShortageReport {
            shortage: remaining,
            message: SHORTAGE_MESSAGE.to_string(),
        }));
    }

    let total_rooms_used = allocated.len();
    info!(total_students, total_rooms_used, "allocation complete");
    Ok(AllocationResult::Success(AllocationPlan {
        allocated,
        total_rooms_used,
        message: format!(
            "Successfully allocated {demand} students in {total_rooms_used} classroom(s)"
        ),
    }))
}

/// Allocate against a registry, reading its contents exactly once.
pub fn allocate_from<R: ClassroomRegistry + ?Sized>(
    registry: &R,
    total_students: i64,
) -> AllocResult<AllocationResult> {
    if total_students <= 0 {
        return Err(AllocationError::InvalidDemand(total_students));
    }
    let snapshot = registry.list()?;
    allocate(&snapshot, total_students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use examseat_registry::MemoryRegistry;

    fn room(id: &str, capacity: u32, floor: i32) -> Classroom {
        Classroom::new(id, capacity, floor, false).unwrap()
    }

    fn sample_rooms() -> Vec<Classroom> {
        vec![room("A", 30, 2), room("B", 20, 1), room("C", 50, 1)]
    }

    fn expect_success(result: AllocationResult) -> AllocationPlan {
        match result {
            AllocationResult::Success(plan) => plan,
            other => panic!("expected success, got {other:?}"),
        }
    }

    fn expect_shortage(result: AllocationResult) -> ShortageReport {
        match result {
            AllocationResult::Shortage(report) => report,
            other => panic!("expected shortage, got {other:?}"),
        }
    }

    #[test]
    fn fills_lower_floor_small_rooms_first() {
        let plan = expect_success(allocate(&sample_rooms(), 60).unwrap());

        let seats: Vec<(&str, u32)> = plan
            .allocated
            .iter()
            .map(|a| (a.room_id.as_str(), a.seats_allocated))
            .collect();
        assert_eq!(seats, [("B", 20), ("C", 40)]);
        assert_eq!(plan.total_rooms_used, 2);
        assert_eq!(plan.message, "Successfully allocated 60 students in 2 classroom(s)");
    }

    #[test]
    fn shortage_reports_unseated_students_only() {
        let report = expect_shortage(allocate(&sample_rooms(), 150).unwrap());
        assert_eq!(report.shortage, 50);
        assert_eq!(report.message, SHORTAGE_MESSAGE);
    }

    #[test]
    fn empty_rooms_is_full_shortage() {
        let report = expect_shortage(allocate(&[], 10).unwrap());
        assert_eq!(report.shortage, 10);
    }

    #[test]
    fn exact_fit_uses_every_room() {
        let plan = expect_success(allocate(&sample_rooms(), 100).unwrap());
        assert_eq!(plan.total_rooms_used, 3);
        assert_eq!(plan.seats_allocated(), 100);
        for a in &plan.allocated {
            assert_eq!(a.seats_allocated, a.capacity);
        }
    }

    #[test]
    fn one_over_capacity_is_shortage_of_one() {
        let report = expect_shortage(allocate(&sample_rooms(), 101).unwrap());
        assert_eq!(report.shortage, 1);
    }

    #[test]
    fn non_positive_demand_is_invalid() {
        for demand in [0, -1, -500, i64::MIN] {
            assert_eq!(
                allocate(&sample_rooms(), demand),
                Err(AllocationError::InvalidDemand(demand))
            );
        }
    }

    #[test]
    fn invalid_demand_is_distinct_from_shortage() {
        assert!(allocate(&[], 0).is_err());

        let result = allocate(&[], 1).unwrap();
        assert!(!result.is_success());
        assert_eq!(result.message(), SHORTAGE_MESSAGE);

        let result = allocate(&sample_rooms(), 1).unwrap();
        assert!(result.is_success());
        assert_eq!(result.message(), "Successfully allocated 1 students in 1 classroom(s)");
    }

    #[test]
    fn totals_and_per_room_bounds_hold_for_every_feasible_demand() {
        let rooms = vec![
            room("r1", 7, 3),
            room("r2", 12, 0),
            room("r3", 5, 0),
            room("r4", 31, -2),
            room("r5", 12, 0),
            room("r6", 1, 3),
        ];
        let total: i64 = 7 + 12 + 5 + 31 + 12 + 1;

        for demand in 1..=total {
            let plan = expect_success(allocate(&rooms, demand).unwrap());
            assert_eq!(plan.seats_allocated(), demand as u64, "demand {demand}");
            assert_eq!(plan.total_rooms_used, plan.allocated.len());
            for a in &plan.allocated {
                assert!(a.seats_allocated > 0);
                assert!(a.seats_allocated <= a.capacity);
            }
            // Emission order is non-decreasing by (floor, capacity).
            for pair in plan.allocated.windows(2) {
                let key = |a: &RoomAllocation| (a.floor_no, a.capacity);
                assert!(key(&pair[0]) <= key(&pair[1]), "demand {demand}");
            }
        }

        for demand in [total + 1, total + 17, total * 3] {
            let report = expect_shortage(allocate(&rooms, demand).unwrap());
            assert_eq!(report.shortage, (demand - total) as u64);
        }
    }

    #[test]
    fn demand_beyond_u32_range_fills_whole_rooms() {
        let rooms = vec![room("big", u32::MAX, 0), room("small", 10, 1)];
        let demand = i64::from(u32::MAX) + 4;

        let plan = expect_success(allocate(&rooms, demand).unwrap());
        assert_eq!(plan.allocated[0].seats_allocated, u32::MAX);
        assert_eq!(plan.allocated[1].seats_allocated, 4);
        assert_eq!(plan.seats_allocated(), demand as u64);

        let report = expect_shortage(allocate(&rooms, demand + 10).unwrap());
        assert_eq!(report.shortage, 4);
    }

    #[test]
    fn only_last_room_is_partially_filled() {
        let plan = expect_success(allocate(&sample_rooms(), 45).unwrap());
        let (last, full) = plan.allocated.split_last().unwrap();
        assert!(full.iter().all(|a| a.seats_allocated == a.capacity));
        assert_eq!(last.room_id, "C");
        assert_eq!(last.seats_allocated, 25);
    }

    #[test]
    fn tuples_carry_descriptive_fields() {
        let rooms = vec![Classroom::new("W", 10, 4, true).unwrap()];
        let plan = expect_success(allocate(&rooms, 3).unwrap());
        assert_eq!(
            plan.allocated[0],
            RoomAllocation {
                room_id: "W".to_string(),
                capacity: 10,
                floor_no: 4,
                near_washroom: true,
                seats_allocated: 3,
            }
        );
    }

    #[test]
    fn ties_follow_registry_order() {
        let rooms = vec![room("second", 20, 1), room("first", 20, 1)];
        let plan = expect_success(allocate(&rooms, 25).unwrap());
        assert_eq!(plan.allocated[0].room_id, "second");
        assert_eq!(plan.allocated[1].seats_allocated, 5);
    }

    #[test]
    fn allocate_from_registry_snapshot() {
        let registry = MemoryRegistry::from_classrooms(sample_rooms()).unwrap();
        let plan = expect_success(allocate_from(&registry, 60).unwrap());
        assert_eq!(plan.total_rooms_used, 2);

        assert_eq!(
            allocate_from(&registry, 0),
            Err(AllocationError::InvalidDemand(0))
        );
    }

    #[test]
    fn allocation_serializes_with_wire_names() {
        let plan = expect_success(allocate(&[room("B", 20, 1)], 5).unwrap());
        let json = serde_json::to_value(&plan.allocated[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "roomId": "B",
                "capacity": 20,
                "floorNo": 1,
                "nearWashroom": false,
                "seatsAllocated": 5
            })
        );
    }
}
