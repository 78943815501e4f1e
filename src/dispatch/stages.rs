/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::trace;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, DispatchResult, SystemState};

/**
 * The transition stages of one tick.
 *
 * Each stage consumes a snapshot and returns the next one. They run in a fixed order,
 * see `pipeline::tick_with`:
 *
 * - `load`:        claim pending requests waiting on an elevator's floor.
 * - `reprioritize`: optional, nearest destination first.
 * - `fetch`:       give idle elevators a target, clear reached targets.
 * - `advance`:     move every busy elevator one floor.
 * - `unload`:      drop off riders at their destination.
 *
 * Only `advance` can fail, and only if an earlier stage left a satisfied target behind.
 */

/***************************************/
/*             Public API              */
/***************************************/
/// Moves pending requests into the riding queue of the first elevator, in fleet
/// order, standing on their origin floor. An elevator that takes on riders drops its
/// fetch target and serves them instead.
pub fn load(state: SystemState) -> SystemState {
    let SystemState {
        mut pending_requests,
        mut elevators,
    } = state;

    for elevator in elevators.iter_mut() {
        let (boarding, waiting): (Vec<_>, Vec<_>) = pending_requests
            .into_iter()
            .partition(|request| request.origin_floor == elevator.floor);

        if !boarding.is_empty() {
            elevator.fetch_target = None;
            elevator.riding_queue.extend(boarding);
        }
        pending_requests = waiting;
    }

    SystemState {
        pending_requests,
        elevators,
    }
}

/// Stable-sorts every riding queue by distance from the elevator to the destination.
pub fn reprioritize(state: SystemState) -> SystemState {
    let SystemState {
        pending_requests,
        mut elevators,
    } = state;

    for elevator in elevators.iter_mut() {
        let floor = elevator.floor;
        elevator
            .riding_queue
            .sort_by_key(|request| (request.destination_floor - floor).abs());
    }

    SystemState {
        pending_requests,
        elevators,
    }
}

/// Sends idle elevators after the oldest pending request, or home to floor 0 when
/// nothing is waiting. Fetch targets that have been reached are cleared.
pub fn fetch(state: SystemState) -> SystemState {
    let SystemState {
        pending_requests,
        mut elevators,
    } = state;

    let oldest_origin = pending_requests.first().map(|request| request.origin_floor);

    for elevator in elevators.iter_mut() {
        if elevator.is_idle() {
            match oldest_origin {
                Some(origin) => {
                    trace!("elevator {} fetching floor {}", elevator.id, origin);
                    elevator.fetch_target = Some(origin);
                }
                None if elevator.floor > 0 => {
                    trace!("elevator {} parking at floor 0", elevator.id);
                    elevator.fetch_target = Some(0);
                }
                None => {}
            }
        }

        // Pickup happens in `load` on the next tick
        if elevator.fetch_target == Some(elevator.floor) {
            elevator.fetch_target = None;
        }
    }

    SystemState {
        pending_requests,
        elevators,
    }
}

/// Moves every elevator one floor towards its fetch target, or failing that towards
/// the destination at the head of its riding queue. Idle elevators stay put.
pub fn advance(state: SystemState) -> DispatchResult<SystemState> {
    let SystemState {
        pending_requests,
        mut elevators,
    } = state;

    for elevator in elevators.iter_mut() {
        let target = if elevator.is_fetching() {
            elevator.fetch_target
        } else if !elevator.is_idle() {
            elevator.riding_queue.first().map(|head| head.destination_floor)
        } else {
            None
        };
        let Some(target) = target else {
            continue;
        };

        elevator.floor += Direction::between(elevator.floor, target)?.step();
    }

    Ok(SystemState {
        pending_requests,
        elevators,
    })
}

/// Removes every rider whose destination is the elevator's current floor.
pub fn unload(state: SystemState) -> SystemState {
    let SystemState {
        pending_requests,
        mut elevators,
    } = state;

    for elevator in elevators.iter_mut() {
        let floor = elevator.floor;
        elevator
            .riding_queue
            .retain(|request| request.destination_floor != floor);
    }

    SystemState {
        pending_requests,
        elevators,
    }
}
