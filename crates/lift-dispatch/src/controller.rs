//! The `ElevatorController` — dispatcher plus lockstep tick loop.

use lift_car::{Elevator, StepOutcome};
use lift_core::{BuildingConfig, ElevatorId, LiftError, SimClock, StopRequest, Tick};

use crate::{
    CallSchedule, CallSource, ControllerBuilder, DispatchError, DispatchObserver, DispatchResult,
    NoopObserver,
};

/// A fixed bank of elevators serving one building.
///
/// Elevator order is fixed at construction and doubles as the tie-break for
/// equal estimates: the earlier car wins.
///
/// All mutation goes through `&mut self`, so a dispatch reads every estimate
/// and commits the assignment without any other call interleaving.  A
/// multi-client front end has to keep one lock around the whole controller to
/// preserve that.
///
/// Create via [`ElevatorController::new`] or [`ControllerBuilder`].
pub struct ElevatorController {
    num_floors: u32,
    elevators:  Vec<Elevator>,
    clock:      SimClock,
}

impl ElevatorController {
    /// `num_elevators` cars with default timings, all parked on floor 1 and
    /// named `"Elevator 1"`, `"Elevator 2"`, ….
    pub fn new(num_floors: u32, num_elevators: u32) -> DispatchResult<Self> {
        ControllerBuilder::new(num_floors, num_elevators).build()
    }

    pub fn from_config(config: &BuildingConfig) -> DispatchResult<Self> {
        ControllerBuilder::from_config(config.clone()).build()
    }

    pub(crate) fn from_parts(num_floors: u32, elevators: Vec<Elevator>) -> Self {
        Self { num_floors, elevators, clock: SimClock::new() }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn num_floors(&self) -> u32 {
        self.num_floors
    }

    pub fn num_elevators(&self) -> usize {
        self.elevators.len()
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.get(id.index())
    }

    /// The tick the next `step()` will simulate.
    pub fn now(&self) -> Tick {
        self.clock.current_tick
    }

    /// `true` while any car has stops left.
    pub fn is_active(&self) -> bool {
        self.elevators.iter().any(|e| e.state().is_active())
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Every car's estimate for `request`, in elevator order.
    pub fn estimates(&self, request: &StopRequest) -> Vec<u64> {
        self.elevators.iter().map(|e| e.estimate_time_to_stop(request)).collect()
    }

    /// The car with the strictly smallest estimate, earliest on ties.
    ///
    /// `None` only for an empty bank, which the builder never produces.
    pub fn select(&self, request: &StopRequest) -> Option<(ElevatorId, u64)> {
        let mut best: Option<(ElevatorId, u64)> = None;
        for (i, elevator) in self.elevators.iter().enumerate() {
            let estimate = elevator.estimate_time_to_stop(request);
            match best {
                Some((_, lowest)) if estimate >= lowest => {}
                _ => best = Some((ElevatorId(i as u32), estimate)),
            }
        }
        best
    }

    /// Assign `request` to the best car and return its id.
    pub fn dispatch(&mut self, request: StopRequest) -> DispatchResult<ElevatorId> {
        self.dispatch_observed(request, &mut NoopObserver)
    }

    /// Like [`dispatch`][Self::dispatch], reporting the assignment to
    /// `observer`.
    pub fn dispatch_observed<O: DispatchObserver>(
        &mut self,
        request:  StopRequest,
        observer: &mut O,
    ) -> DispatchResult<ElevatorId> {
        if !request.pickup.in_building(self.num_floors) {
            return Err(LiftError::InvalidFloor {
                floor:      request.pickup,
                num_floors: self.num_floors,
            }
            .into());
        }

        let (id, estimate) = self
            .select(&request)
            .ok_or_else(|| DispatchError::Config("controller has no elevators".into()))?;

        let record = request.clone();
        self.elevators[id.index()].add_stop(request)?;
        observer.on_dispatch(self.now(), id, &record, estimate);
        Ok(id)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance every car one tick.
    pub fn step(&mut self) {
        self.step_observed(&mut NoopObserver);
    }

    /// Advance every car one tick, reporting serviced stops and the end-of-tick
    /// state to `observer`.
    pub fn step_observed<O: DispatchObserver>(&mut self, observer: &mut O) {
        let now = self.now();
        observer.on_tick_start(now);

        for (i, elevator) in self.elevators.iter_mut().enumerate() {
            if let StepOutcome::Serviced { floor, drop_offs } = elevator.advance() {
                observer.on_stop_serviced(now, ElevatorId(i as u32), floor, &drop_offs);
            }
        }

        observer.on_tick_end(now, &self.elevators);
        self.clock.advance();
    }

    /// Step until every car is idle.
    ///
    /// Returns the tick at which the bank went idle, or
    /// [`DispatchError::TickLimit`] if it was still busy after `max_ticks`.
    pub fn run_until_idle<O: DispatchObserver>(
        &mut self,
        max_ticks: u64,
        observer:  &mut O,
    ) -> DispatchResult<Tick> {
        self.run(&mut CallSchedule::new(), max_ticks, observer)
    }

    /// Drive the bank from `calls` until the source is exhausted and every car
    /// is idle.
    ///
    /// Each tick, due calls are dispatched before the cars move.  An invalid
    /// call aborts the run.
    pub fn run<S: CallSource, O: DispatchObserver>(
        &mut self,
        calls:     &mut S,
        max_ticks: u64,
        observer:  &mut O,
    ) -> DispatchResult<Tick> {
        let start = self.now();
        loop {
            let now = self.now();
            for request in calls.calls_at(now, self.num_floors) {
                self.dispatch_observed(request, observer)?;
            }

            if !self.is_active() && calls.is_exhausted() {
                break;
            }
            if now.since(start) >= max_ticks {
                return Err(DispatchError::TickLimit { limit: max_ticks });
            }

            self.step_observed(observer);
        }

        observer.on_idle(self.now());
        Ok(self.now())
    }
}
