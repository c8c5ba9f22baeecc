//! tower — drives a bank of elevators through a scripted morning rush plus
//! random inter-floor traffic.
//!
//! Usage: `tower [building.json]`
//!
//! With no argument a 10-floor, 4-car building is simulated.  A JSON file
//! overrides the building, e.g.
//!
//! ```json
//! { "num_floors": 20, "num_elevators": 3, "dwell_duration": 2,
//!   "travel_time_per_floor": 1, "max_ticks": 5000 }
//! ```

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use lift_car::Elevator;
use lift_core::{BuildingConfig, ElevatorId, Floor, StopRequest, Tick};
use lift_dispatch::{
    ControllerBuilder, DispatchObserver, TrafficConfig, TrafficGenerator, load_calls_reader,
};
use lift_output::{CsvWriter, DispatchOutputObserver, OutputWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:          u32 = 10;
const NUM_ELEVATORS:       u32 = 4;
const SEED:                u64 = 42;
const TRAFFIC_TICKS:       u64 = 60;
const STATUS_EVERY_TICKS:  u64 = 10;
const OUTPUT_DIR:          &str = "output/tower";

// ── Call script ───────────────────────────────────────────────────────────────

// Morning rush: arrivals in the lobby heading up, a few early leavers heading
// down.  drop_offs are `;`-separated.
const CALLS_CSV: &str = "\
tick,pickup,drop_offs\n\
0,1,6;7\n\
0,7,2\n\
2,1,10\n\
4,9,1\n\
5,1,3;5;8\n\
12,5,1\n\
15,3,\n\
20,1,9\n\
";

// ── Status printer ────────────────────────────────────────────────────────────

/// Prints dispatches and serviced stops as they happen, a status table every
/// few ticks, and forwards everything to the output recorder.
struct StatusObserver<W: OutputWriter> {
    inner:        DispatchOutputObserver<W>,
    every:        u64,
    dispatches:   usize,
    stops_served: usize,
}

impl<W: OutputWriter> StatusObserver<W> {
    fn new(inner: DispatchOutputObserver<W>, every: u64) -> Self {
        Self { inner, every, dispatches: 0, stops_served: 0 }
    }
}

impl<W: OutputWriter> DispatchObserver for StatusObserver<W> {
    fn on_dispatch(&mut self, tick: Tick, elevator: ElevatorId, request: &StopRequest, estimate: u64) {
        self.dispatches += 1;
        println!("{tick}  call {request} -> {elevator} (eta {estimate})");
        self.inner.on_dispatch(tick, elevator, request, estimate);
    }

    fn on_stop_serviced(&mut self, tick: Tick, elevator: ElevatorId, floor: Floor, drop_offs: &[Floor]) {
        self.stops_served += 1;
        if !drop_offs.is_empty() {
            let floors: Vec<String> = drop_offs.iter().map(Floor::to_string).collect();
            println!("{tick}  {elevator} boarded at {floor} for [{}]", floors.join(", "));
        }
        self.inner.on_stop_serviced(tick, elevator, floor, drop_offs);
    }

    fn on_tick_end(&mut self, tick: Tick, elevators: &[Elevator]) {
        if tick.0 % self.every == 0 {
            println!("{tick}  status");
            for e in elevators {
                println!("      {e}");
            }
        }
        self.inner.on_tick_end(tick, elevators);
    }

    fn on_idle(&mut self, tick: Tick) {
        println!("{tick}  all elevators idle");
        self.inner.on_idle(tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_building(path: Option<String>) -> Result<BuildingConfig> {
    let Some(path) = path else {
        return Ok(BuildingConfig::new(NUM_FLOORS, NUM_ELEVATORS));
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading building config {path}"))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing building config {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    let building = load_building(std::env::args().nth(1))?;
    building.validate()?;

    println!("=== tower — elevator dispatch ===");
    println!(
        "Floors: {}  |  Elevators: {}  |  Dwell: {}  |  Travel/floor: {}  |  Seed: {SEED}",
        building.num_floors,
        building.num_elevators,
        building.dwell_duration,
        building.travel_time_per_floor,
    );
    println!();

    // 1. Build the bank, spreading the cars over the building.
    let starts: Vec<Floor> = (0..building.num_elevators)
        .map(|i| Floor(1 + i * (building.num_floors - 1) / building.num_elevators.max(1)))
        .collect();
    let mut bank = ControllerBuilder::from_config(building.clone())
        .start_floors(starts)
        .build()?;

    // 2. Calls: the embedded script plus random traffic.
    let script = load_calls_reader(Cursor::new(CALLS_CSV))?;
    match script.next_tick() {
        Some(first) => println!(
            "Loaded {} scripted calls over {} ticks, first at {first}",
            script.len(),
            script.tick_count(),
        ),
        None => println!("No scripted calls"),
    }
    let traffic = TrafficGenerator::new(TrafficConfig {
        seed:             SEED,
        call_probability: 0.2,
        max_drop_offs:    2,
        active_ticks:     TRAFFIC_TICKS,
    });
    let mut calls = (script, traffic);

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = StatusObserver::new(DispatchOutputObserver::new(writer), STATUS_EVERY_TICKS);

    // 4. Run.
    let t0 = Instant::now();
    let done = bank.run(&mut calls, building.max_ticks, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    println!("Idle after {} ticks ({:.3} ms)", done.0, elapsed.as_secs_f64() * 1_000.0);
    println!("  calls dispatched : {}", obs.dispatches);
    println!("  stops serviced   : {}", obs.stops_served);
    println!("  output           : {OUTPUT_DIR}/");
    println!();

    println!("{:<14} {:<7} {:<10}", "Elevator", "Floor", "Ticks");
    println!("{}", "-".repeat(33));
    for e in bank.elevators() {
        println!("{:<14} {:<7} {:<10}", e.name(), e.current_floor(), e.elapsed().0);
    }

    Ok(())
}
