//! Building and elevator configuration.
//!
//! Typically built in code or loaded from JSON by the application crate (with
//! the `serde` feature) and handed to `Elevator::with_config` or the
//! controller builder.  Both types validate themselves; nothing downstream
//! re-checks these invariants.

use crate::{Floor, LiftError, LiftResult};

/// Doors stay open this many ticks at every serviced stop unless configured.
pub const DEFAULT_DWELL_DURATION: u32 = 2;

/// Ticks to move one floor unless configured.
pub const DEFAULT_TRAVEL_TIME_PER_FLOOR: u32 = 1;

// ── ElevatorConfig ────────────────────────────────────────────────────────────

/// Fixed parameters of one elevator.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorConfig {
    /// Floors served, numbered `1..=num_floors`.  Must be at least 2.
    pub num_floors: u32,

    /// Ticks spent with doors open before a stop counts as serviced.
    pub dwell_duration: u32,

    /// Ticks needed to move one floor.
    pub travel_time_per_floor: u32,

    /// Floor the car is parked at when the simulation starts.
    pub start_floor: Floor,
}

impl ElevatorConfig {
    /// Default timings (dwell 2, travel 1) parked on the ground floor.
    pub fn new(num_floors: u32) -> Self {
        Self {
            num_floors,
            dwell_duration:        DEFAULT_DWELL_DURATION,
            travel_time_per_floor: DEFAULT_TRAVEL_TIME_PER_FLOOR,
            start_floor:           Floor::GROUND,
        }
    }

    pub fn validate(&self) -> LiftResult<()> {
        if self.num_floors < 2 {
            return Err(LiftError::InvalidConfig(format!(
                "num_floors must be at least 2, got {}",
                self.num_floors
            )));
        }
        if self.dwell_duration == 0 {
            return Err(LiftError::InvalidConfig("dwell_duration must be positive".into()));
        }
        if self.travel_time_per_floor == 0 {
            return Err(LiftError::InvalidConfig(
                "travel_time_per_floor must be positive".into(),
            ));
        }
        if !self.start_floor.in_building(self.num_floors) {
            return Err(LiftError::InvalidConfig(format!(
                "start_floor {} is outside 1..={}",
                self.start_floor, self.num_floors
            )));
        }
        Ok(())
    }
}

// ── BuildingConfig ────────────────────────────────────────────────────────────

/// Top-level configuration for a bank of identical elevators.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildingConfig {
    pub num_floors: u32,

    /// Must be at least 1.
    pub num_elevators: u32,

    pub dwell_duration: u32,

    pub travel_time_per_floor: u32,

    /// Upper bound on ticks a driver loop may run before giving up on the
    /// bank going idle.
    pub max_ticks: u64,
}

impl BuildingConfig {
    pub fn new(num_floors: u32, num_elevators: u32) -> Self {
        Self {
            num_floors,
            num_elevators,
            dwell_duration:        DEFAULT_DWELL_DURATION,
            travel_time_per_floor: DEFAULT_TRAVEL_TIME_PER_FLOOR,
            max_ticks:             10_000,
        }
    }

    pub fn validate(&self) -> LiftResult<()> {
        if self.num_elevators < 1 {
            return Err(LiftError::InvalidConfig(format!(
                "num_elevators must be at least 1, got {}",
                self.num_elevators
            )));
        }
        self.elevator_config().validate()
    }

    /// The per-car configuration every elevator in the bank starts from.
    pub fn elevator_config(&self) -> ElevatorConfig {
        ElevatorConfig {
            num_floors:            self.num_floors,
            dwell_duration:        self.dwell_duration,
            travel_time_per_floor: self.travel_time_per_floor,
            start_floor:           Floor::GROUND,
        }
    }
}
