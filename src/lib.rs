//! Tick based elevator dispatch.
//!
//! The core is a pure pipeline over immutable fleet snapshots: `dispatch::initialize`
//! builds the first snapshot and `dispatch::tick` produces each following one from the
//! previous snapshot plus newly arrived requests. Everything under `simulation` is a
//! driver built on those two calls.

/* Modules */
pub mod config;
pub mod dispatch;
pub mod print;
pub mod shared;
pub mod simulation;


pub use dispatch::{initialize, tick, tick_with};
pub use shared::{Direction, DispatchError, DispatchResult, ElevatorState, PickupRequest, SystemState};
