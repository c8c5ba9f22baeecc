//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `elevator_snapshots.csv`
//! - `dispatch_log.csv`
//!
//! Drop-off lists are written `;`-separated, the same format the call-script
//! loader reads.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DispatchRow, ElevatorSnapshotRow, OutputResult};

/// Writes a recorded run to two CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    dispatches: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        snapshots.write_record(["tick", "elevator_id", "name", "floor", "state", "load"])?;

        let mut dispatches = Writer::from_path(dir.join("dispatch_log.csv"))?;
        dispatches.write_record(["tick", "elevator_id", "pickup", "drop_offs", "estimate"])?;

        Ok(Self { snapshots, dispatches, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.elevator_id.to_string(),
                row.name.clone(),
                row.floor.to_string(),
                row.state.to_string(),
                row.load.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()> {
        let drop_offs = row
            .drop_offs
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(";");
        self.dispatches.write_record(&[
            row.tick.to_string(),
            row.elevator_id.to_string(),
            row.pickup.to_string(),
            drop_offs,
            row.estimate.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.dispatches.flush()?;
        Ok(())
    }
}
