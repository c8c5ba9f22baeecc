//! Fluent builder for constructing an [`ElevatorController`].

use lift_car::Elevator;
use lift_core::{BuildingConfig, ElevatorConfig, Floor, LiftResult};

use crate::{DispatchError, DispatchResult, ElevatorController};

/// Fluent builder for [`ElevatorController`].
///
/// # Optional inputs (have defaults)
///
/// | Method                        | Default                          |
/// |-------------------------------|----------------------------------|
/// | `.dwell_duration(n)`          | 2 ticks                          |
/// | `.travel_time_per_floor(n)`   | 1 tick                           |
/// | `.start_floors(v)`            | every car on floor 1             |
/// | `.names(v)`                   | `"Elevator 1"`, `"Elevator 2"`, … |
///
/// # Example
///
/// ```rust,ignore
/// let bank = ControllerBuilder::new(20, 3)
///     .dwell_duration(3)
///     .start_floors(vec![Floor(1), Floor(10), Floor(20)])
///     .build()?;
/// ```
pub struct ControllerBuilder {
    config:       BuildingConfig,
    start_floors: Option<Vec<Floor>>,
    names:        Option<Vec<String>>,
}

impl ControllerBuilder {
    pub fn new(num_floors: u32, num_elevators: u32) -> Self {
        Self::from_config(BuildingConfig::new(num_floors, num_elevators))
    }

    pub fn from_config(config: BuildingConfig) -> Self {
        Self { config, start_floors: None, names: None }
    }

    pub fn dwell_duration(mut self, ticks: u32) -> Self {
        self.config.dwell_duration = ticks;
        self
    }

    pub fn travel_time_per_floor(mut self, ticks: u32) -> Self {
        self.config.travel_time_per_floor = ticks;
        self
    }

    /// Where each car is parked at tick 0 (must be length `num_elevators`).
    pub fn start_floors(mut self, floors: Vec<Floor>) -> Self {
        self.start_floors = Some(floors);
        self
    }

    /// Display names, in elevator order (must be length `num_elevators`).
    pub fn names(mut self, names: Vec<String>) -> Self {
        self.names = Some(names);
        self
    }

    /// Validate inputs and construct every car.
    pub fn build(self) -> DispatchResult<ElevatorController> {
        self.config.validate()?;
        let count = self.config.num_elevators as usize;

        let names = match self.names {
            Some(n) => {
                if n.len() != count {
                    return Err(DispatchError::ElevatorCountMismatch {
                        expected: count,
                        got:      n.len(),
                        what:     "names",
                    });
                }
                n
            }
            None => (1..=count).map(|i| format!("Elevator {i}")).collect(),
        };

        let starts = match self.start_floors {
            Some(f) => {
                if f.len() != count {
                    return Err(DispatchError::ElevatorCountMismatch {
                        expected: count,
                        got:      f.len(),
                        what:     "start floors",
                    });
                }
                f
            }
            None => vec![Floor::GROUND; count],
        };

        let base = self.config.elevator_config();
        let elevators = names
            .into_iter()
            .zip(starts)
            .map(|(name, start_floor)| {
                Elevator::with_config(name, ElevatorConfig { start_floor, ..base.clone() })
            })
            .collect::<LiftResult<Vec<_>>>()?;

        Ok(ElevatorController::from_parts(self.config.num_floors, elevators))
    }
}
