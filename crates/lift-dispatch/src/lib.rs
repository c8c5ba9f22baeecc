//! `lift-dispatch` — dispatcher and tick loop for a bank of elevators.
//!
//! # Dispatch and tick loop
//!
//! ```text
//! dispatch(request):
//!   ① Validate   — pickup must lie in 1..=num_floors.
//!   ② Score      — estimate_time_to_stop on every car, in construction order.
//!   ③ Select     — strictly smallest estimate; first car wins ties.
//!   ④ Assign     — add_stop on the winner.
//!
//! run(calls, max_ticks):
//!   loop:
//!     ① Calls    — dispatch every call the CallSource has for this tick.
//!     ② Done?    — stop once all cars are idle and the source is exhausted.
//!     ③ Step     — advance every car one tick, then the clock.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{Floor, StopRequest};
//! use lift_dispatch::{ElevatorController, NoopObserver};
//!
//! let mut bank = ElevatorController::new(10, 4)?;
//! bank.dispatch(StopRequest::with_drop_off(Floor(7), Floor(1)))?;
//! bank.run_until_idle(1_000, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod loader;
pub mod observer;
pub mod schedule;
pub mod traffic;


pub use builder::ControllerBuilder;
pub use controller::ElevatorController;
pub use error::{DispatchError, DispatchResult};
pub use loader::{load_calls_csv, load_calls_reader};
pub use observer::{DispatchObserver, NoopObserver};
pub use schedule::{CallSchedule, CallSource};
pub use traffic::{TrafficConfig, TrafficGenerator};
