//! Fixed tick simulation step
//!
//! One call to [`tick`] per host timer interval. Velocity is a per-tick
//! displacement, so there is no `dt`.

use glam::DVec2;

use super::collision::{WallHit, resolve_wall_collision};
use super::state::{Arena, Disc, SimPhase, Simulation};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Raw tilt reading (x right, y up on the device)
    pub tilt: DVec2,
}

impl TickInput {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            tilt: DVec2::new(x, y),
        }
    }
}

/// Move a disc by its velocity, then bounce it off the arena wall
pub fn step_disc(disc: &mut Disc, arena: &Arena, restitution: f64) -> WallHit {
    disc.pos += disc.vel;
    resolve_wall_collision(disc, arena, restitution)
}

/// Advance every disc by one tick
///
/// Each disc gets the tilt force then a step, in index order. Discs do not
/// interact. Does nothing before the discs are initialized.
pub fn tick(sim: &mut Simulation, input: &TickInput) {
    if sim.phase() != SimPhase::Running {
        log::debug!("tick ignored: discs not initialized");
        return;
    }

    let arena = *sim.arena();
    let restitution = sim.restitution();
    let accel_ratio = sim.settings().accel_ratio;

    let mut bounces = 0usize;
    for disc in sim.discs_mut() {
        disc.apply_acceleration(input.tilt, accel_ratio);
        if step_disc(disc, &arena, restitution).any() {
            bounces += 1;
        }
    }

    sim.advance_clock();
    if bounces > 0 {
        log::trace!("tick {}: {} wall bounces", sim.time_ticks(), bounces);
    }
}
