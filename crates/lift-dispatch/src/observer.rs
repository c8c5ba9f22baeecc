//! Observer trait for status reporting and data collection.

use lift_car::Elevator;
use lift_core::{ElevatorId, Floor, StopRequest, Tick};

/// Callbacks invoked by [`ElevatorController`][crate::ElevatorController]
/// while dispatching and stepping.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: status printer
///
/// ```rust,ignore
/// struct StatusPrinter;
///
/// impl DispatchObserver for StatusPrinter {
///     fn on_tick_end(&mut self, tick: Tick, elevators: &[Elevator]) {
///         for e in elevators {
///             println!("{tick} {e}");
///         }
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called after a request has been assigned to `elevator`.
    ///
    /// `estimate` is the winning time-to-arrival score.
    fn on_dispatch(
        &mut self,
        _tick:     Tick,
        _elevator: ElevatorId,
        _request:  &StopRequest,
        _estimate: u64,
    ) {}

    /// Called at the very start of each tick, before any car moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a car finishes dwelling at `floor` and its passengers for
    /// `drop_offs` board.
    fn on_stop_serviced(
        &mut self,
        _tick:      Tick,
        _elevator:  ElevatorId,
        _floor:     Floor,
        _drop_offs: &[Floor],
    ) {}

    /// Called at the end of each tick with read-only access to every car.
    fn on_tick_end(&mut self, _tick: Tick, _elevators: &[Elevator]) {}

    /// Called once when a run finishes with every car idle.
    fn on_idle(&mut self, _tick: Tick) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
