//! Deterministic disc simulation
//!
//! All physics lives here:
//! - Fixed tick only, no wall-clock time
//! - Seeded RNG only (disc colors)
//! - Stable iteration order (disc index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{WallHit, circle_wall_collision, rect_wall_collision, resolve_wall_collision};
pub use state::{
    Arena, ArenaShape, Disc, DiscColor, DiscSnapshot, SimPhase, Simulation, disc_mass,
};
pub use tick::{TickInput, step_disc, tick};
pub use vector::{SQRT_TOLERANCE, approx_sqrt};
