/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::error::{DispatchError, DispatchResult};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Direction of travel from `current` towards `target`.
    ///
    /// Fails with `SameFloorDirection` when the floors are equal; there is no
    /// direction to an elevator's own floor.
    pub fn between(current: i32, target: i32) -> DispatchResult<Direction> {
        if target > current {
            Ok(Direction::Up)
        } else if target < current {
            Ok(Direction::Down)
        } else {
            Err(DispatchError::SameFloorDirection { floor: current })
        }
    }

    /// Floor delta of one tick of travel.
    pub fn step(&self) -> i32 {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/**
 * A rider's call: where they wait, which way they said they are going, and where they
 * get off. The direction is whatever the rider pressed and is never re-derived.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PickupRequest {
    #[serde(rename = "originFloor")]
    pub origin_floor: i32,
    pub direction: Direction,
    #[serde(rename = "destinationFloor")]
    pub destination_floor: i32,
}

impl PickupRequest {
    pub fn new(origin_floor: i32, direction: Direction, destination_floor: i32) -> PickupRequest {
        PickupRequest {
            origin_floor,
            direction,
            destination_floor,
        }
    }

    /// Builds a request with the direction derived from the two floors.
    pub fn between(origin_floor: i32, destination_floor: i32) -> DispatchResult<PickupRequest> {
        let direction = Direction::between(origin_floor, destination_floor)
            .map_err(|_| DispatchError::MalformedRequest { floor: origin_floor })?;

        Ok(PickupRequest::new(origin_floor, direction, destination_floor))
    }

    pub fn validate(&self) -> DispatchResult<()> {
        if self.origin_floor == self.destination_floor {
            return Err(DispatchError::MalformedRequest {
                floor: self.origin_floor,
            });
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorState {
    pub id: usize,
    pub floor: i32,
    #[serde(rename = "ridingQueue")]
    pub riding_queue: Vec<PickupRequest>,
    #[serde(rename = "fetchTarget")]
    pub fetch_target: Option<i32>,
}

impl ElevatorState {
    pub fn new(id: usize) -> ElevatorState {
        ElevatorState {
            id,
            floor: 0,
            riding_queue: Vec::new(),
            fetch_target: None,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.riding_queue.is_empty() && self.fetch_target.is_none()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_target.is_some()
    }
}

/**
 * One snapshot of the whole fleet.
 *
 * Every request lives in exactly one place: the pending pool or a single elevator's
 * riding queue. Elevator order is the order the Load stage claims requests in.
 */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SystemState {
    #[serde(rename = "pendingRequests")]
    pub pending_requests: Vec<PickupRequest>,
    pub elevators: Vec<ElevatorState>,
}

impl SystemState {
    pub fn new(fleet_size: usize) -> SystemState {
        SystemState {
            pending_requests: Vec::new(),
            elevators: (0..fleet_size).map(ElevatorState::new).collect(),
        }
    }

    /// Requests still in the system, waiting or riding.
    pub fn request_count(&self) -> usize {
        self.pending_requests.len()
            + self
                .elevators
                .iter()
                .map(|elevator| elevator.riding_queue.len())
                .sum::<usize>()
    }
}
