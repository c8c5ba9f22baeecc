//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{DispatchRow, ElevatorSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(elevator_id: u32, tick: u64) -> ElevatorSnapshotRow {
        ElevatorSnapshotRow {
            tick,
            elevator_id,
            name:  format!("Elevator {}", elevator_id + 1),
            floor: elevator_id + 1,
            state: "idle",
            load:  0,
        }
    }

    fn read_all(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("elevator_snapshots.csv").exists());
        assert!(dir.path().join("dispatch_log.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "elevator_id", "name", "floor", "state", "load"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("dispatch_log.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "elevator_id", "pickup", "drop_offs", "estimate"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let rows = read_all(dir.path().join("elevator_snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");          // tick
        assert_eq!(&rows[1][1], "1");          // elevator_id
        assert_eq!(&rows[1][2], "Elevator 2"); // name
        assert_eq!(&rows[1][4], "idle");       // state
    }

    #[test]
    fn csv_dispatch_drop_offs_joined() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_dispatch(&DispatchRow {
            tick: 3, elevator_id: 1, pickup: 4, drop_offs: vec![6, 9], estimate: 11,
        }).unwrap();
        w.write_dispatch(&DispatchRow {
            tick: 4, elevator_id: 0, pickup: 2, drop_offs: vec![], estimate: 0,
        }).unwrap();
        w.finish().unwrap();

        let rows = read_all(dir.path().join("dispatch_log.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][3], "6;9");
        assert_eq!(&rows[0][4], "11");
        assert_eq!(&rows[1][3], "");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn missing_dir_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("absent")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io::Cursor;

    use lift_core::{Floor, StopRequest, Tick};
    use lift_dispatch::{ElevatorController, load_calls_reader};

    use crate::observer::DispatchOutputObserver;
    use crate::row::{DispatchRow, ElevatorSnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult};

    /// Keeps everything in memory.
    #[derive(Default)]
    struct MemoryWriter {
        snapshots:  Vec<ElevatorSnapshotRow>,
        dispatches: Vec<DispatchRow>,
        finishes:   usize,
        fail:       bool,
    }

    impl OutputWriter for MemoryWriter {
        fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }

        fn write_dispatch(&mut self, row: &DispatchRow) -> OutputResult<()> {
            self.dispatches.push(row.clone());
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    #[test]
    fn records_dispatch_and_snapshots() {
        let mut bank = ElevatorController::new(10, 2).unwrap();
        let mut obs = DispatchOutputObserver::new(MemoryWriter::default());
        bank.dispatch_observed(StopRequest::with_drop_off(Floor(4), Floor(1)), &mut obs)
            .unwrap();
        let done = bank.run_until_idle(100, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        assert_eq!(
            w.dispatches,
            [DispatchRow { tick: 0, elevator_id: 0, pickup: 4, drop_offs: vec![1], estimate: 3 }]
        );
        // One row per car per tick.
        assert_eq!(w.snapshots.len() as u64, done.0 * 2);
        let first = &w.snapshots[0];
        assert_eq!((first.tick, first.elevator_id, first.floor), (0, 0, 2));
        assert_eq!(first.state, "ascending");
        assert_eq!(w.snapshots[1].state, "idle");
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn snapshot_interval_thins_rows() {
        let mut bank = ElevatorController::new(10, 1).unwrap();
        let mut obs = DispatchOutputObserver::new(MemoryWriter::default()).snapshot_interval(2);
        bank.dispatch(StopRequest::new(Floor(4))).unwrap();
        bank.run_until_idle(100, &mut obs).unwrap();

        let ticks: Vec<u64> = obs.into_writer().snapshots.iter().map(|r| r.tick).collect();
        assert_eq!(ticks, [0, 2, 4]);
    }

    #[test]
    fn first_error_is_kept() {
        let mut bank = ElevatorController::new(10, 1).unwrap();
        let writer = MemoryWriter { fail: true, ..MemoryWriter::default() };
        let mut obs = DispatchOutputObserver::new(writer);
        bank.dispatch(StopRequest::new(Floor(3))).unwrap();
        bank.run_until_idle(100, &mut obs).unwrap();

        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn integration_csv() {
        let script = "tick,pickup,drop_offs\n0,1,6;7\n0,7,2\n12,5,1\n";
        let mut calls = load_calls_reader(Cursor::new(script)).unwrap();
        let mut bank = ElevatorController::new(10, 4).unwrap();

        let dir = tempfile::tempdir().expect("create temp dir");
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = DispatchOutputObserver::new(writer);
        let done = bank.run(&mut calls, 1_000, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert!(done > Tick(12));

        let mut rdr = csv::Reader::from_path(dir.path().join("dispatch_log.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][3], "6;7");

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let snaps = rdr.records().count() as u64;
        assert_eq!(snaps, done.0 * 4, "expected 4 rows per tick");
    }
}
