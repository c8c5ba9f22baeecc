//! `lift-car` — one elevator car: direction queues, motion, and estimation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`queue`]     | `StopQueue` — one entry per pickup floor, ordered by sweep      |
//! | [`elevator`]  | `Elevator` — state machine, `add_stop`, `step`                  |
//! | [`estimate`]  | `estimate_time_to_stop` and the queue-walk cost model           |
//!
//! # Motion model
//!
//! An elevator holds two queues: stops above it (serviced on the way up) and
//! stops below it (serviced on the way down).  Each `step()` is one tick:
//!
//! 1. Idle cars do nothing.
//! 2. A moving car not yet at the head of its active queue travels toward it,
//!    one floor per `travel_time_per_floor` ticks.
//! 3. At the head floor the doors stay open for `dwell_duration` ticks; then
//!    the stop is popped, its passengers board (each drop-off floor becomes a
//!    new stop), and the car keeps its direction, reverses, or goes idle.

pub mod elevator;
pub mod estimate;
pub mod queue;


pub use elevator::{Elevator, StepOutcome};
pub use estimate::QueueWalk;
pub use queue::{StopQueue, SweepIter};
