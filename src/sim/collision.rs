//! Disc vs arena wall collision response
//!
//! Rectangular walls flip one velocity component at a time. The circular
//! wall is handled as a flat tangent at the contact point: the disc is put
//! back on the boundary and its velocity mirrored about the radial normal.

use glam::DVec2;

use super::state::{Arena, Disc};
use super::vector::{add, dot, length, reflect, scale, set_length, subtract};

/// Which walls a disc bounced off in one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHit {
    /// Left or right wall (or the circular wall)
    pub x: bool,
    /// Top or bottom wall (or the circular wall)
    pub y: bool,
}

impl WallHit {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Resolve a disc against whichever wall the arena has
pub fn resolve_wall_collision(disc: &mut Disc, arena: &Arena, restitution: f64) -> WallHit {
    match *arena {
        Arena::Rectangular { width, height } => {
            rect_wall_collision(disc, width, height, restitution)
        }
        Arena::Circular { radius, .. } => {
            let hit = circle_wall_collision(
                disc,
                arena.boundary_center(),
                radius.floor() - 1.0,
                restitution,
            );
            WallHit { x: hit, y: hit }
        }
    }
}

/// Bounce a disc off the walls of a `width` x `height` box
///
/// An axis only bounces when the disc's edge is past the wall and still
/// heading into it. The position is not corrected, so a disc can sit up to
/// one tick of travel beyond the wall before coming back.
pub fn rect_wall_collision(disc: &mut Disc, width: f64, height: f64, restitution: f64) -> WallHit {
    let r = disc.radius();
    let mut hit = WallHit::miss();

    if (disc.pos.x - r < 0.0 && disc.vel.x < 0.0) || (disc.pos.x + r > width && disc.vel.x > 0.0) {
        disc.vel.x = -disc.vel.x * restitution;
        hit.x = true;
    }

    if (disc.pos.y - r < 0.0 && disc.vel.y < 0.0) || (disc.pos.y + r > height && disc.vel.y > 0.0)
    {
        disc.vel.y = -disc.vel.y * restitution;
        hit.y = true;
    }

    hit
}

/// Bounce a disc off a circular wall of `wall_radius` centered at `center`
///
/// The usable radius for the disc center is `wall_radius - radius`. Returns
/// whether the disc touched the wall.
pub fn circle_wall_collision(
    disc: &mut Disc,
    center: DVec2,
    wall_radius: f64,
    restitution: f64,
) -> bool {
    let limit = wall_radius - disc.radius();
    let offset = subtract(disc.pos, center);

    if dot(offset, offset) <= limit * limit {
        return false;
    }

    // `length` approaches the root from above, so once the squared test
    // fires this only fails when rounding puts the estimate on `limit`
    // itself; the disc is then already on the wall.
    let dist = length(offset);
    if dist > limit {
        disc.pos = add(center, set_length(offset, limit, dist));
    }
    disc.vel = scale(reflect(disc, center), restitution);

    log::debug!(
        "disc r={} hit circular wall at ({:.2}, {:.2})",
        disc.radius(),
        disc.pos.x,
        disc.pos.y
    );
    true
}
