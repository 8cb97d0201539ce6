//! Seating order for the greedy pass.
//!
//! Lower floors come first; within a floor, smaller rooms come first so
//! large rooms stay free for the tail of the demand. Exact ties keep the
//! order the rooms were given in.

use std::cmp::Ordering;

use examseat_core::Classroom;

/// Floor ascending, then capacity ascending.
pub fn compare_rooms(a: &Classroom, b: &Classroom) -> Ordering {
    a.floor_no()
        .cmp(&b.floor_no())
        .then_with(|| a.capacity().cmp(&b.capacity()))
}

/// Rooms in the order the allocator consumes them.
pub fn seating_order(rooms: &[Classroom]) -> Vec<&Classroom> {
    let mut ordered: Vec<&Classroom> = rooms.iter().collect();
    // `sort_by` is stable.
    ordered.sort_by(|a, b| compare_rooms(a, b));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, capacity: u32, floor: i32) -> Classroom {
        Classroom::new(id, capacity, floor, false).unwrap()
    }

    fn ids(rooms: &[&Classroom]) -> Vec<String> {
        rooms.iter().map(|r| r.room_id().to_string()).collect()
    }

    #[test]
    fn floor_then_capacity() {
        let rooms = vec![room("A", 30, 2), room("B", 20, 1), room("C", 50, 1)];
        assert_eq!(ids(&seating_order(&rooms)), ["B", "C", "A"]);
    }

    #[test]
    fn negative_floors_sort_first() {
        let rooms = vec![room("ground", 10, 0), room("basement", 40, -1), room("upper", 5, 3)];
        assert_eq!(ids(&seating_order(&rooms)), ["basement", "ground", "upper"]);
    }

    #[test]
    fn exact_ties_keep_input_order() {
        let rooms = vec![room("Z", 20, 1), room("M", 20, 1), room("A", 20, 1)];
        assert_eq!(ids(&seating_order(&rooms)), ["Z", "M", "A"]);

        let reversed = vec![room("A", 20, 1), room("M", 20, 1), room("Z", 20, 1)];
        assert_eq!(ids(&seating_order(&reversed)), ["A", "M", "Z"]);
    }

    #[test]
    fn washroom_flag_does_not_affect_order() {
        let rooms = vec![
            Classroom::new("far", 20, 1, false).unwrap(),
            Classroom::new("near", 20, 1, true).unwrap(),
        ];
        assert_eq!(ids(&seating_order(&rooms)), ["far", "near"]);
    }

    #[test]
    fn empty_input() {
        assert!(seating_order(&[]).is_empty());
    }
}
