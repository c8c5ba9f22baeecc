use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match elevator count {expected}")]
    ElevatorCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Lift(#[from] LiftError),

    #[error("elevators still active after {limit} ticks")]
    TickLimit { limit: u64 },

    #[error("call script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
