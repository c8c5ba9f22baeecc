//! `DispatchOutputObserver<W>` — bridges `DispatchObserver` to an `OutputWriter`.

use lift_car::Elevator;
use lift_core::{ElevatorId, StopRequest, Tick};
use lift_dispatch::DispatchObserver;

use crate::row::{DispatchRow, ElevatorSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that records every dispatch decision and periodic
/// elevator snapshots to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct DispatchOutputObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> DispatchOutputObserver<W> {
    /// Create an observer backed by `writer` that snapshots every tick.
    pub fn new(writer: W) -> Self {
        Self { writer, snapshot_interval: 1, last_error: None }
    }

    /// Only snapshot on ticks that are a multiple of `ticks` (0 is treated
    /// as 1).
    pub fn snapshot_interval(mut self, ticks: u64) -> Self {
        self.snapshot_interval = ticks.max(1);
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to finish it after a failed run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> DispatchObserver for DispatchOutputObserver<W> {
    fn on_dispatch(&mut self, tick: Tick, elevator: ElevatorId, request: &StopRequest, estimate: u64) {
        let row = DispatchRow::capture(tick, elevator, request, estimate);
        let result = self.writer.write_dispatch(&row);
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, elevators: &[Elevator]) {
        if tick.0 % self.snapshot_interval != 0 {
            return;
        }
        let rows: Vec<ElevatorSnapshotRow> = elevators
            .iter()
            .enumerate()
            .map(|(i, e)| ElevatorSnapshotRow::capture(tick, ElevatorId(i as u32), e))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_idle(&mut self, _tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
