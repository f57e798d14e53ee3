//! Tilt Discs headless driver
//!
//! Stands in for a host: builds an arena, feeds a slowly rotating tilt for
//! a number of ticks and prints the final disc snapshot as JSON.
//!
//! Usage: `tilt-discs [rect|round] [ticks] [settings.json]`

use tilt_discs::Settings;
use tilt_discs::sim::{Arena, ArenaShape, Simulation, TickInput, tick};

/// Display frame of the reference device (square, in pixels)
const FRAME_SIZE: f64 = 180.0;
/// Ticks to run when none are given
const DEFAULT_TICKS: u64 = 200;
/// Magnitude of the synthetic tilt reading
const TILT_MAGNITUDE: f64 = 800.0;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let shape = match args.first() {
        Some(arg) => ArenaShape::from_str(arg).unwrap_or_else(|| {
            log::warn!("Unknown arena shape '{}', using rectangular", arg);
            ArenaShape::Rectangular
        }),
        None => ArenaShape::Rectangular,
    };
    let ticks = match args.get(1) {
        Some(arg) => arg.parse().unwrap_or_else(|e| {
            log::warn!("Bad tick count '{}' ({}), using {}", arg, e, DEFAULT_TICKS);
            DEFAULT_TICKS
        }),
        None => DEFAULT_TICKS,
    };
    let settings = match args.get(2) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    log::info!(
        "Tilt Discs starting: {} arena, {} ticks every {} ms",
        shape.as_str(),
        ticks,
        settings.tick_ms
    );

    let arena = Arena::from_frame(FRAME_SIZE, FRAME_SIZE, shape);
    let mut sim = Simulation::start(arena, settings);

    for t in 0..ticks {
        tick(&mut sim, &synthetic_tilt(t));
    }

    log::info!("Finished after {} ticks", sim.time_ticks());

    match serde_json::to_string_pretty(&sim.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

/// Tilt that sweeps a full circle every ~126 ticks
fn synthetic_tilt(t: u64) -> TickInput {
    let angle = t as f64 * 0.05;
    TickInput::new(angle.cos() * TILT_MAGNITUDE, angle.sin() * TILT_MAGNITUDE)
}
