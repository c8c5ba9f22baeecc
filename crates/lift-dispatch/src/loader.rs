//! CSV call-script loader.
//!
//! # CSV format
//!
//! One row per call.  `drop_offs` lists destination floors separated by `;`
//! and may be empty for a call with no known destination.
//!
//! ```csv
//! tick,pickup,drop_offs
//! 0,1,6;7
//! 0,7,2
//! 12,5,1
//! 15,3,
//! ```
//!
//! Floors are not range-checked here; the controller rejects out-of-range
//! calls when they are dispatched.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, StopRequest, Tick};

use crate::{CallSchedule, DispatchError, DispatchResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    tick:      u64,
    pickup:    u32,
    #[serde(default)]
    drop_offs: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a call script from a CSV file.
pub fn load_calls_csv(path: &Path) -> DispatchResult<CallSchedule> {
    let file = std::fs::File::open(path)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
pub fn load_calls_reader<R: Read>(reader: R) -> DispatchResult<CallSchedule> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut schedule = CallSchedule::new();

    for result in csv_reader.deserialize::<CallRecord>() {
        let row = result.map_err(|e| DispatchError::Parse(e.to_string()))?;
        let drop_offs = parse_drop_offs(&row.drop_offs)?;
        schedule.push(
            Tick(row.tick),
            StopRequest::with_drop_offs(Floor(row.pickup), drop_offs),
        );
    }

    Ok(schedule)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_drop_offs(s: &str) -> DispatchResult<Vec<Floor>> {
    s.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>().map(Floor).map_err(|_| {
                DispatchError::Parse(format!(
                    "invalid drop-off floor {part:?}: expected an unsigned integer"
                ))
            })
        })
        .collect()
}
