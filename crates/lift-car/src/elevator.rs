//! The `Elevator` state machine.

use std::collections::VecDeque;
use std::fmt;

use lift_core::{
    Direction, DirectionState, ElevatorConfig, Floor, LiftError, LiftResult, StopRequest, Tick,
};

use crate::StopQueue;

// ── StepOutcome ───────────────────────────────────────────────────────────────

/// What one call to [`Elevator::advance`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// No queued stops; nothing happened.
    Idle,

    /// Travelling toward the next floor; still at `Floor` this tick.
    Travelling(Floor),

    /// Arrived at a new floor.
    Moved(Floor),

    /// Doors open at `floor` for the `ticks`-th tick; not yet serviced.
    Dwelling { floor: Floor, ticks: u32 },

    /// Dwell finished: the stop at `floor` was popped and passengers for
    /// `drop_offs` boarded.
    Serviced { floor: Floor, drop_offs: Vec<Floor> },
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One elevator car.
///
/// State invariants, upheld by every public method:
///
/// - `state == Idle` iff both queues are empty.
/// - `Ascending` implies the ascending queue is non-empty; `Descending`
///   implies the descending queue is non-empty.
/// - Ascending entries sit at or above `current_floor`, descending entries at
///   or below (equal only while dwelling at the head).
#[derive(Clone, Debug)]
pub struct Elevator {
    name:           String,
    config:         ElevatorConfig,
    current_floor:  Floor,
    state:          DirectionState,
    ascending:      StopQueue,
    descending:     StopQueue,
    /// Ticks the doors have been open at the head-of-queue floor.
    dwell_counter:  u32,
    /// Ticks spent travelling toward the next floor.
    travel_counter: u32,
    /// Ticks this car has been stepped.
    elapsed:        Tick,
}

impl Elevator {
    /// A car with default timings (dwell 2, travel 1) parked on floor 1.
    pub fn new(name: impl Into<String>, num_floors: u32) -> LiftResult<Self> {
        Self::with_config(name, ElevatorConfig::new(num_floors))
    }

    pub fn with_config(name: impl Into<String>, config: ElevatorConfig) -> LiftResult<Self> {
        config.validate()?;
        Ok(Self {
            name:           name.into(),
            current_floor:  config.start_floor,
            config,
            state:          DirectionState::Idle,
            ascending:      StopQueue::ascending(),
            descending:     StopQueue::descending(),
            dwell_counter:  0,
            travel_counter: 0,
            elapsed:        Tick::ZERO,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn num_floors(&self) -> u32 {
        self.config.num_floors
    }

    #[inline]
    pub fn state(&self) -> DirectionState {
        self.state
    }

    /// Number of queued stops across both directions.
    #[inline]
    pub fn load(&self) -> usize {
        self.ascending.len() + self.descending.len()
    }

    #[inline]
    pub fn config(&self) -> &ElevatorConfig {
        &self.config
    }

    #[inline]
    pub fn dwell_counter(&self) -> u32 {
        self.dwell_counter
    }

    #[inline]
    pub fn elapsed(&self) -> Tick {
        self.elapsed
    }

    pub fn ascending_queue(&self) -> &StopQueue {
        &self.ascending
    }

    pub fn descending_queue(&self) -> &StopQueue {
        &self.descending
    }

    /// The queue serviced while sweeping in `dir`.
    pub fn queue(&self, dir: Direction) -> &StopQueue {
        match dir {
            Direction::Up   => &self.ascending,
            Direction::Down => &self.descending,
        }
    }

    fn queue_mut(&mut self, dir: Direction) -> &mut StopQueue {
        match dir {
            Direction::Up   => &mut self.ascending,
            Direction::Down => &mut self.descending,
        }
    }

    /// `true` if the state/queue invariants hold.  Intended for tests and
    /// debug assertions.
    pub fn is_consistent(&self) -> bool {
        let state_ok = match self.state {
            DirectionState::Idle       => self.ascending.is_empty() && self.descending.is_empty(),
            DirectionState::Ascending  => !self.ascending.is_empty(),
            DirectionState::Descending => !self.descending.is_empty(),
        };
        let cur = self.current_floor;
        state_ok
            && self.ascending.floors().all(|f| f >= cur)
            && self.descending.floors().all(|f| f <= cur)
    }

    // ── Requests ──────────────────────────────────────────────────────────

    /// Queue `request`.
    ///
    /// - Pickup above the car: ascending queue (merged with any entry for the
    ///   same floor).
    /// - Pickup below the car: descending queue, likewise.
    /// - Pickup at the car: the passengers board on the spot and each
    ///   drop-off floor is queued instead.  A request with no drop-offs is
    ///   already satisfied and is dropped.
    ///
    /// An idle car takes the direction of the first stop it is given.  When
    /// several passengers board on the spot, that is their lowest
    /// destination.
    ///
    /// Fails with [`LiftError::InvalidFloor`] if the pickup or any drop-off is
    /// outside the building; nothing is queued in that case.
    pub fn add_stop(&mut self, request: StopRequest) -> LiftResult<()> {
        self.check_floor(request.pickup)?;
        for &floor in request.drop_offs() {
            self.check_floor(floor)?;
        }
        self.place(request);
        Ok(())
    }

    fn check_floor(&self, floor: Floor) -> LiftResult<()> {
        if floor.in_building(self.config.num_floors) {
            Ok(())
        } else {
            Err(LiftError::InvalidFloor { floor, num_floors: self.config.num_floors })
        }
    }

    /// Insert an already-validated request, boarding passengers at the
    /// current floor through a worklist rather than recursion.
    ///
    /// Boarded destinations are placed lowest floor first, so an idle car
    /// heads toward the lowest destination's side.
    fn place(&mut self, request: StopRequest) {
        let mut pending = VecDeque::from([request]);
        while let Some(req) = pending.pop_front() {
            match Direction::between(self.current_floor, req.pickup) {
                Some(dir) => {
                    self.queue_mut(dir).insert(req);
                    if self.state == DirectionState::Idle {
                        self.state = dir.into();
                    }
                }
                None => pending.extend(req.into_boarded()),
            }
        }
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Advance one tick and return the floor the car is at afterwards.
    pub fn step(&mut self) -> Floor {
        self.advance();
        self.current_floor
    }

    /// Advance one tick and report what happened.
    pub fn advance(&mut self) -> StepOutcome {
        self.elapsed = self.elapsed + 1;

        let Some(dir) = self.state.direction() else {
            return StepOutcome::Idle;
        };
        let Some(head) = self.queue(dir).head_floor() else {
            // Only reachable if the state invariant was broken; recover.
            self.state = self.settled_state(dir);
            return StepOutcome::Idle;
        };

        if self.current_floor != head {
            self.travel_counter += 1;
            if self.travel_counter < self.config.travel_time_per_floor {
                return StepOutcome::Travelling(self.current_floor);
            }
            self.travel_counter = 0;
            self.current_floor = match dir {
                Direction::Up   => self.current_floor.up(),
                Direction::Down => self.current_floor.down(),
            };
            return StepOutcome::Moved(self.current_floor);
        }

        self.dwell_counter += 1;
        if self.dwell_counter < self.config.dwell_duration {
            return StepOutcome::Dwelling { floor: head, ticks: self.dwell_counter };
        }
        self.dwell_counter = 0;

        let serviced = self.queue_mut(dir).pop_head();
        let drop_offs = match serviced {
            Some(serviced) => {
                let floors: Vec<Floor> = serviced.drop_offs().iter().copied().collect();
                for boarded in serviced.into_boarded() {
                    self.place(boarded);
                }
                floors
            }
            None => Vec::new(),
        };
        self.state = self.settled_state(dir);

        StepOutcome::Serviced { floor: head, drop_offs }
    }

    /// Direction to continue in after servicing a stop while sweeping `dir`:
    /// keep going while that queue has stops, otherwise reverse, otherwise idle.
    fn settled_state(&self, dir: Direction) -> DirectionState {
        let opposite = match dir {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
        };
        if !self.queue(dir).is_empty() {
            dir.into()
        } else if !self.queue(opposite).is_empty() {
            opposite.into()
        } else {
            DirectionState::Idle
        }
    }
}

impl fmt::Display for Elevator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: floor {}, {}, {} stop(s)",
            self.name,
            self.current_floor,
            self.state,
            self.load()
        )
    }
}
