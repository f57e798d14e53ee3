//! Tilt Discs - tilt-driven disc physics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vector math, discs, boundary collisions, tick)
//! - `settings`: Tunable simulation parameters, loadable from JSON

pub mod settings;
pub mod sim;

pub use settings::{ColorMode, Settings};
pub use sim::{Arena, Disc, DiscSnapshot, SimPhase, Simulation, TickInput, tick};

/// Simulation configuration defaults
pub mod consts {
    /// Host tick interval in milliseconds
    pub const TICK_MS: u64 = 50;

    /// Number of discs in a simulation
    pub const NUM_DISCS: usize = 20;
    /// Mass per unit area
    pub const DISC_DENSITY: f64 = 0.25;
    /// Radius of the first (smallest) disc
    pub const FIRST_DISC_RADIUS: f64 = 3.0;
    /// Radius increase from one disc to the next
    pub const DISC_RADIUS_STEP: f64 = 0.5;

    /// Tilt reading to force conversion factor
    pub const ACCEL_RATIO: f64 = 0.05;

    /// Velocity retained after hitting a rectangular wall
    pub const RESTITUTION_RECTANGULAR: f64 = 0.5;
    /// Velocity retained after hitting the circular wall
    pub const RESTITUTION_CIRCULAR: f64 = 0.7;

    /// Seed for disc colors
    pub const DEFAULT_SEED: u64 = 0x5eed_d15c;
}
