//! Error type shared by every `lift-*` crate.
//!
//! Higher crates wrap `LiftError` as one variant of their own enum via
//! `#[from]`, so `?` works across crate boundaries.

use thiserror::Error;

use crate::Floor;

/// The top-level error type for `lift-core` and `lift-car`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiftError {
    #[error("floor {floor} is outside the building (valid floors are 1..={num_floors})")]
    InvalidFloor {
        floor:      Floor,
        num_floors: u32,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Shorthand result type for `lift-core` and `lift-car`.
pub type LiftResult<T> = Result<T, LiftError>;
