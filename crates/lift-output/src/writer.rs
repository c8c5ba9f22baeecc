//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DispatchRow, ElevatorSnapshotRow, OutputResult};

/// Sink for recorded runs.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`DispatchOutputObserver::take_error`][crate::DispatchOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of elevator snapshots.
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write one dispatch decision.
    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
