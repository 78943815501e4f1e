/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::DispatchConfig;
use crate::dispatch::stages;
use crate::shared::{DispatchResult, PickupRequest, SystemState};

/***************************************/
/*             Public API              */
/***************************************/
/// A fleet of `fleet_size` elevators on floor 0, ids `0..fleet_size`, nothing pending.
pub fn initialize(fleet_size: usize) -> SystemState {
    SystemState::new(fleet_size)
}

/// Runs one tick with the default dispatch options.
pub fn tick(state: &SystemState, new_requests: Vec<PickupRequest>) -> DispatchResult<SystemState> {
    tick_with(&DispatchConfig::default(), state, new_requests)
}

/**
 * Produces the snapshot following `state`.
 *
 * New requests are validated before anything else happens; a malformed request fails
 * the whole tick and `state` stays the latest snapshot. Otherwise the requests join the
 * back of the pending pool and the stages run in order: load, reprioritize (if
 * enabled), fetch, advance, unload. Loading before moving lets an elevator pick up a
 * rider the tick it is on the right floor, and moving before unloading drops riders
 * off on the tick they arrive.
 */
pub fn tick_with(
    config: &DispatchConfig,
    state: &SystemState,
    new_requests: Vec<PickupRequest>,
) -> DispatchResult<SystemState> {
    for request in new_requests.iter() {
        request.validate()?;
    }

    let ingested = new_requests.len();
    let mut next = state.clone();
    next.pending_requests.extend(new_requests);

    let pending_before = next.pending_requests.len();
    next = stages::load(next);
    let loaded = pending_before - next.pending_requests.len();

    if config.reprioritize_by_distance {
        next = stages::reprioritize(next);
    }

    next = stages::fetch(next);
    next = stages::advance(next)?;

    let riding_before = next.request_count();
    next = stages::unload(next);
    let unloaded = riding_before - next.request_count();

    debug!(
        "tick: ingested {}, loaded {}, unloaded {}, pending {}",
        ingested,
        loaded,
        unloaded,
        next.pending_requests.len()
    );

    Ok(next)
}
