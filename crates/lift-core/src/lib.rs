//! `lift-core` — foundational types for the `lift` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`floor`]       | `Floor` newtype and sweep sentinels                   |
//! | [`ids`]         | `ElevatorId`                                          |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`direction`]   | `Direction`, `DirectionState`                         |
//! | [`request`]     | `StopRequest`                                         |
//! | [`config`]      | `ElevatorConfig`, `BuildingConfig`                    |
//! | [`rng`]         | `SimRng` (seeded traffic randomness)                  |
//! | [`error`]       | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod request;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, ElevatorConfig};
pub use direction::{Direction, DirectionState};
pub use error::{LiftError, LiftResult};
pub use floor::Floor;
pub use ids::ElevatorId;
pub use request::StopRequest;
pub use rng::SimRng;
pub use time::{SimClock, Tick};
