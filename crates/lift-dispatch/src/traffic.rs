//! Seeded random traffic.
//!
//! Each tick the generator places at most one call, with probability
//! `call_probability`.  A call has a uniformly random pickup floor and between
//! one and `max_drop_offs` destinations, none equal to the pickup.  The same
//! seed always yields the same calls.

use std::collections::BTreeSet;

use lift_core::{Floor, SimRng, StopRequest, Tick};

use crate::CallSource;

#[derive(Clone, Debug)]
pub struct TrafficConfig {
    pub seed: u64,

    /// Chance of a call being placed on any given tick, in `[0, 1]`.
    pub call_probability: f64,

    /// Upper bound on destinations per call.  Treated as 1 if zero.
    pub max_drop_offs: u32,

    /// Number of ticks during which calls are generated.
    pub active_ticks: u64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            seed:             42,
            call_probability: 0.25,
            max_drop_offs:    2,
            active_ticks:     100,
        }
    }
}

/// Produces random calls for the first `active_ticks` ticks it is polled.
pub struct TrafficGenerator {
    config:     TrafficConfig,
    rng:        SimRng,
    ticks_seen: u64,
}

impl TrafficGenerator {
    pub fn new(config: TrafficConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, rng, ticks_seen: 0 }
    }

    pub fn config(&self) -> &TrafficConfig {
        &self.config
    }

    /// Roll for one call in a `num_floors`-storey building.
    pub fn generate(&mut self, num_floors: u32) -> Option<StopRequest> {
        if num_floors < 2 || !self.rng.gen_bool(self.config.call_probability) {
            return None;
        }

        let pickup = self.random_floor(num_floors, None);
        let count = self.rng.gen_range(1..=self.config.max_drop_offs.max(1));
        let drop_offs: BTreeSet<Floor> = (0..count)
            .map(|_| self.random_floor(num_floors, Some(pickup)))
            .collect();

        Some(StopRequest::with_drop_offs(pickup, drop_offs))
    }

    /// Uniform floor in `1..=num_floors`, skipping `exclude`.
    fn random_floor(&mut self, num_floors: u32, exclude: Option<Floor>) -> Floor {
        match exclude {
            None => Floor(self.rng.gen_range(1..=num_floors)),
            Some(skip) => {
                let n = self.rng.gen_range(1..num_floors);
                if n >= skip.0 { Floor(n + 1) } else { Floor(n) }
            }
        }
    }
}

impl CallSource for TrafficGenerator {
    fn calls_at(&mut self, _tick: Tick, num_floors: u32) -> Vec<StopRequest> {
        if self.is_exhausted() {
            return Vec::new();
        }
        self.ticks_seen += 1;
        self.generate(num_floors).into_iter().collect()
    }

    fn is_exhausted(&self) -> bool {
        self.ticks_seen >= self.config.active_ticks
    }
}
