use crate::config::{Config, DispatchConfig};
use crate::dispatch::{initialize, tick_with};
use crate::shared::{DispatchResult, PickupRequest, SystemState};
use crossbeam_channel as cbc;
use log::{info, warn};
use serde::Serialize;
use std::time::{Duration, Instant};

enum Event {
    RequestsReceived(Vec<PickupRequest>),
    RequestSourceLost,
    Tick,
    Terminate,
    TerminateLost,
}

/// A published state together with the number of ticks that produced it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub tick: u64,
    pub state: SystemState,
}

/**
 * Drives the dispatch pipeline at a fixed cadence.
 *
 * Request batches arriving between two ticks are buffered in arrival order and handed
 * to the next tick. Every tick publishes a `Snapshot` clone, so consumers never share
 * state with the loop.
 *
 * # Fields
 * - `state`:           The latest snapshot.
 * - `dispatch`:        Options passed to every tick.
 * - `tick_interval`:   Time between ticks in `run`.
 * - `max_ticks`:       Tick budget for `run`, 0 for none.
 * - `ticks`:           Ticks completed so far.
 * - `incoming`:        Requests received since the last tick.
 * - `request_rx`:      Receives request batches from the request source.
 * - `snapshot_tx`:     Publishes a snapshot after each tick.
 * - `terminate_rx`:    Stops `run` when a message arrives.
 */
pub struct Simulation {
    state: SystemState,
    dispatch: DispatchConfig,
    tick_interval: Duration,
    max_ticks: u64,
    ticks: u64,
    incoming: Vec<PickupRequest>,

    request_rx: cbc::Receiver<Vec<PickupRequest>>,
    snapshot_tx: cbc::Sender<Snapshot>,
    terminate_rx: cbc::Receiver<()>,
}

impl Simulation {
    pub fn new(
        config: &Config,
        request_rx: cbc::Receiver<Vec<PickupRequest>>,
        snapshot_tx: cbc::Sender<Snapshot>,
        terminate_rx: cbc::Receiver<()>,
    ) -> Simulation {
        Simulation {
            state: initialize(config.simulation.fleet_size),
            dispatch: config.dispatch.clone(),
            tick_interval: Duration::from_millis(config.simulation.tick_interval_ms),
            max_ticks: config.simulation.max_ticks,
            ticks: 0,
            incoming: Vec::new(),
            request_rx,
            snapshot_tx,
            terminate_rx,
        }
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs one tick on the current state and publishes the result.
    pub fn step(&mut self, new_requests: Vec<PickupRequest>) -> DispatchResult<()> {
        self.state = tick_with(&self.dispatch, &self.state, new_requests)?;
        self.ticks += 1;

        // Nobody watching is fine
        let _ = self.snapshot_tx.send(Snapshot {
            tick: self.ticks,
            state: self.state.clone(),
        });

        Ok(())
    }

    /// Ticks until the tick budget is spent or a terminate message arrives, and
    /// returns the final state. Any dispatch error ends the run.
    pub fn run(mut self) -> DispatchResult<SystemState> {
        let ticker = cbc::tick(self.tick_interval);

        loop {
            if self.max_ticks > 0 && self.ticks >= self.max_ticks {
                info!("Tick limit of {} reached", self.max_ticks);
                break;
            }

            match self.wait_for_event(&ticker) {
                Event::RequestsReceived(batch) => self.ingest(batch),
                Event::RequestSourceLost => {
                    warn!("Request source disconnected, ticking without new requests");
                    self.request_rx = cbc::never();
                }
                Event::Tick => {
                    let batch = std::mem::take(&mut self.incoming);
                    self.step(batch)?;
                }
                Event::Terminate => {
                    info!("Simulation terminated after {} ticks", self.ticks);
                    break;
                }
                Event::TerminateLost => self.terminate_rx = cbc::never(),
            }
        }

        Ok(self.state)
    }

    fn wait_for_event(&self, ticker: &cbc::Receiver<Instant>) -> Event {
        cbc::select! {
            recv(self.request_rx) -> batch => {
                match batch {
                    Ok(batch) => Event::RequestsReceived(batch),
                    Err(_) => Event::RequestSourceLost,
                }
            }
            recv(ticker) -> _ => Event::Tick,
            recv(self.terminate_rx) -> msg => {
                match msg {
                    Ok(()) => Event::Terminate,
                    Err(_) => Event::TerminateLost,
                }
            }
        }
    }

    fn ingest(&mut self, batch: Vec<PickupRequest>) {
        for request in batch {
            match request.validate() {
                Ok(()) => self.incoming.push(request),
                Err(e) => warn!("Dropping request: {}", e),
            }
        }
    }
}
