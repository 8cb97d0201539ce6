//! `examseatd allocate` — run the allocator against the store.

use std::fmt::Write as _;

use examseat_alloc::{AllocationError, AllocationResult, allocate_from};
use examseat_api::wire::AllocationResponse;
use examseat_registry::ClassroomRegistry;

pub fn run<R: ClassroomRegistry>(registry: &R, students: i64, format: &str) -> anyhow::Result<()> {
    let result = match allocate_from(registry, students) {
        Ok(result) => result,
        Err(AllocationError::InvalidDemand(_)) => {
            anyhow::bail!("please enter a valid number of students (got {students})")
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&AllocationResponse::from(result))?
        ),
        _ => print!("{}", render_text(&result)),
    }
    Ok(())
}

fn render_text(result: &AllocationResult) -> String {
    let mut out = String::new();
    match result {
        AllocationResult::Success(plan) => {
            let _ = writeln!(out, "{}", plan.message);
            let _ = writeln!(out, "Total Rooms Used: {}", plan.total_rooms_used);
            for a in &plan.allocated {
                let _ = writeln!(
                    out,
                    "  {:<12} {:>4} seats  (capacity {}, floor {}{})",
                    a.room_id,
                    a.seats_allocated,
                    a.capacity,
                    a.floor_no,
                    if a.near_washroom { ", near washroom" } else { "" }
                );
            }
        }
        AllocationResult::Shortage(report) => {
            let _ = writeln!(out, "Allocation Failed: {}", report.message);
            let _ = writeln!(out, "Shortage: {} students", report.shortage);
        }
    }
    out
}
