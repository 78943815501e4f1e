use crate::config::SimulationConfig;
use crate::shared::PickupRequest;
use crossbeam_channel as cbc;
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/**
 * # Request Generator
 * Stands in for the riders of a building by producing random pickup requests.
 *
 * Every batch makes `max_requests_per_tick` attempts, each succeeding with probability
 * `request_probability`. Origins are uniform over `0..n_floors` and destinations uniform
 * over the remaining floors, so a generated request is never malformed.
 *
 * # Fields
 * - `rng`:                     Seeded generator, runs with the same seed are identical.
 * - `n_floors`:                Number of floors in the building.
 * - `request_probability`:     Chance of one attempt producing a request.
 * - `max_requests_per_tick`:   Attempts per batch.
 * - `interval`:                Time between batches when running as a thread.
 */
pub struct RequestGenerator {
    rng: SmallRng,
    n_floors: i32,
    request_probability: f64,
    max_requests_per_tick: usize,
    interval: Duration,
}

impl RequestGenerator {
    pub fn new(config: &SimulationConfig) -> RequestGenerator {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        RequestGenerator {
            rng,
            n_floors: config.n_floors,
            request_probability: config.request_probability.clamp(0.0, 1.0),
            max_requests_per_tick: config.max_requests_per_tick,
            interval: Duration::from_millis(config.tick_interval_ms),
        }
    }

    pub fn next_batch(&mut self) -> Vec<PickupRequest> {
        let mut batch = Vec::new();
        if self.n_floors < 2 {
            return batch;
        }

        for _ in 0..self.max_requests_per_tick {
            if !self.rng.gen_bool(self.request_probability) {
                continue;
            }

            let origin = self.rng.gen_range(0..self.n_floors);
            let mut destination = self.rng.gen_range(0..self.n_floors - 1);
            if destination >= origin {
                destination += 1;
            }

            if let Ok(request) = PickupRequest::between(origin, destination) {
                batch.push(request);
            }
        }

        batch
    }

    /// Emits one batch per interval until terminated or the receiving end hangs up.
    pub fn run(mut self, request_tx: cbc::Sender<Vec<PickupRequest>>, terminate_rx: cbc::Receiver<()>) {
        loop {
            cbc::select! {
                recv(terminate_rx) -> _ => {
                    debug!("Request generator terminated");
                    return;
                }
                default(self.interval) => {
                    let batch = self.next_batch();
                    if batch.is_empty() {
                        continue;
                    }
                    if request_tx.send(batch).is_err() {
                        debug!("Request receiver gone, stopping generator");
                        return;
                    }
                }
            }
        }
    }
}
