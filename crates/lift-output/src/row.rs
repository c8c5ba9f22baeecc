//! Plain data row types written by output backends.

use lift_car::Elevator;
use lift_core::{ElevatorId, StopRequest, Tick};

/// One elevator's position and state at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub tick:        u64,
    pub elevator_id: u32,
    pub name:        String,
    pub floor:       u32,
    /// `"idle"`, `"ascending"` or `"descending"`.
    pub state:       &'static str,
    /// Queued stops across both directions.
    pub load:        u32,
}

impl ElevatorSnapshotRow {
    pub fn capture(tick: Tick, id: ElevatorId, elevator: &Elevator) -> Self {
        Self {
            tick:        tick.0,
            elevator_id: id.0,
            name:        elevator.name().to_owned(),
            floor:       elevator.current_floor().0,
            state:       elevator.state().as_str(),
            load:        elevator.load() as u32,
        }
    }
}

/// One dispatch decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRow {
    pub tick:        u64,
    pub elevator_id: u32,
    pub pickup:      u32,
    /// Ascending; empty for a bare call.
    pub drop_offs:   Vec<u32>,
    /// Winning time-to-arrival estimate, in ticks.
    pub estimate:    u64,
}

impl DispatchRow {
    pub fn capture(tick: Tick, id: ElevatorId, request: &StopRequest, estimate: u64) -> Self {
        Self {
            tick: tick.0,
            elevator_id: id.0,
            pickup: request.pickup.0,
            drop_offs: request.drop_offs().iter().map(|f| f.0).collect(),
            estimate,
        }
    }
}
