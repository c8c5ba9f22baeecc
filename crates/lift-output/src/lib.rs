//! `lift-output` — run recorders for the lift simulation.
//!
//! | Writer      | Files created                                      |
//! |-------------|----------------------------------------------------|
//! | `CsvWriter` | `elevator_snapshots.csv`, `dispatch_log.csv`       |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`DispatchOutputObserver`], which implements
//! `lift_dispatch::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, DispatchOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = DispatchOutputObserver::new(writer);
//! bank.run(&mut calls, 10_000, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DispatchOutputObserver;
pub use row::{DispatchRow, ElevatorSnapshotRow};
pub use writer::OutputWriter;
