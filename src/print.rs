//! Text rendering of snapshots for the terminal log.

use std::fmt::Write;

use crate::shared::{Direction, ElevatorState, PickupRequest};
use crate::simulation::Snapshot;

/// Renders one snapshot as a header line followed by one line per elevator.
///
/// ```text
/// Tick 12 | pending: 2 [3v1, 6^9]
///   Elevator 0 | floor 4 | fetching 6 | riding: [2^5]
///   Elevator 1 | floor 0 | idle
/// ```
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let state = &snapshot.state;
    let mut out = format!(
        "Tick {} | pending: {} {}",
        snapshot.tick,
        state.pending_requests.len(),
        format_requests(&state.pending_requests)
    );

    for elevator in state.elevators.iter() {
        let _ = write!(out, "\n  {}", format_elevator(elevator));
    }
    out
}

pub fn format_elevator(elevator: &ElevatorState) -> String {
    let mut line = format!("Elevator {} | floor {}", elevator.id, elevator.floor);

    if elevator.is_idle() {
        line.push_str(" | idle");
        return line;
    }
    if let Some(target) = elevator.fetch_target {
        let _ = write!(line, " | fetching {}", target);
    }
    if !elevator.riding_queue.is_empty() {
        let _ = write!(line, " | riding: {}", format_requests(&elevator.riding_queue));
    }
    line
}

fn format_requests(requests: &[PickupRequest]) -> String {
    let rendered: Vec<String> = requests
        .iter()
        .map(|request| {
            let arrow = match request.direction {
                Direction::Up => '^',
                Direction::Down => 'v',
            };
            format!("{}{}{}", request.origin_floor, arrow, request.destination_floor)
        })
        .collect();

    format!("[{}]", rendered.join(", "))
}
