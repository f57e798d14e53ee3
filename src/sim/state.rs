//! Simulation state and core types
//!
//! Discs, the arena they live in, and the [`Simulation`] that owns both.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::{ColorMode, Settings};

/// Lifecycle of a simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimPhase {
    /// Arena and settings known, discs not created yet
    Uninitialized,
    /// Discs exist and ticks advance them
    Running,
}

/// RGB fill color of a disc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DiscColor {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random_range(0..255),
            g: rng.random_range(0..255),
            b: rng.random_range(0..255),
        }
    }
}

/// A simulated disc
#[derive(Debug, Clone, PartialEq)]
pub struct Disc {
    /// Center, in arena coordinates (origin top-left, y down)
    pub pos: DVec2,
    /// Displacement per tick
    pub vel: DVec2,
    radius: f64,
    mass: f64,
    pub color: Option<DiscColor>,
}

impl Disc {
    /// Create a resting disc; mass is derived from radius and density
    pub fn new(pos: DVec2, radius: f64, density: f64, color: Option<DiscColor>) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
            radius,
            mass: disc_mass(radius, density),
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Accelerate the disc by `force / mass`
    pub fn apply_force(&mut self, force: DVec2) {
        self.vel.x += force.x / self.mass;
        self.vel.y += force.y / self.mass;
    }

    /// Push the disc with a tilt reading
    ///
    /// Tilt y points up on the device while arena y points down, so the
    /// vertical component is inverted.
    pub fn apply_acceleration(&mut self, tilt: DVec2, accel_ratio: f64) {
        self.apply_force(DVec2::new(tilt.x * accel_ratio, -tilt.y * accel_ratio));
    }

    pub fn snapshot(&self) -> DiscSnapshot {
        DiscSnapshot {
            pos: self.pos,
            radius: self.radius,
            color: self.color,
        }
    }
}

/// Mass of a disc of uniform density
#[inline]
pub fn disc_mass(radius: f64, density: f64) -> f64 {
    std::f64::consts::PI * radius * radius * density
}

/// What the host needs to draw one disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscSnapshot {
    pub pos: DVec2,
    pub radius: f64,
    pub color: Option<DiscColor>,
}

/// Arena shape without dimensions (host display kind)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArenaShape {
    #[default]
    Rectangular,
    Circular,
}

impl ArenaShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArenaShape::Rectangular => "Rectangular",
            ArenaShape::Circular => "Circular",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rect" | "rectangle" | "rectangular" => Some(ArenaShape::Rectangular),
            "round" | "circle" | "circular" => Some(ArenaShape::Circular),
            _ => None,
        }
    }
}

/// Region the discs are confined to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arena {
    /// Axis-aligned box from (0, 0) to (width, height)
    Rectangular { width: f64, height: f64 },
    /// Circle of `radius` around `center`, the middle of the host frame
    Circular { radius: f64, center: DVec2 },
}

impl Arena {
    /// Circle filling a `2r` x `2r` frame
    pub fn circle(radius: f64) -> Self {
        Arena::Circular {
            radius,
            center: DVec2::splat(radius).floor(),
        }
    }

    /// Build an arena from the host's display frame
    ///
    /// A circular arena takes the largest circle that fits the frame,
    /// centered in it.
    pub fn from_frame(width: f64, height: f64, shape: ArenaShape) -> Self {
        match shape {
            ArenaShape::Rectangular => Arena::Rectangular { width, height },
            ArenaShape::Circular => Arena::Circular {
                radius: width.min(height) / 2.0,
                center: (DVec2::new(width, height) / 2.0).floor(),
            },
        }
    }

    pub fn shape(&self) -> ArenaShape {
        match self {
            Arena::Rectangular { .. } => ArenaShape::Rectangular,
            Arena::Circular { .. } => ArenaShape::Circular,
        }
    }

    /// Middle of the frame on the pixel grid (where discs spawn)
    pub fn frame_center(&self) -> DVec2 {
        match *self {
            Arena::Rectangular { width, height } => (DVec2::new(width, height) / 2.0).floor(),
            Arena::Circular { center, .. } => center,
        }
    }

    /// Center of the circular wall
    ///
    /// On an even-sized frame the visual center falls between two pixels,
    /// and a pixel drawn at `frame_center` lands down-right of it, hence
    /// the one-unit shift.
    pub fn boundary_center(&self) -> DVec2 {
        self.frame_center() - DVec2::ONE
    }

    /// Distance from [`Arena::boundary_center`] to the circular wall
    ///
    /// Shrunk by the same one-unit shift as the center so the wall stays
    /// inside the frame. `None` for a rectangle.
    pub fn wall_radius(&self) -> Option<f64> {
        match *self {
            Arena::Rectangular { .. } => None,
            Arena::Circular { radius, .. } => Some(radius.floor() - 1.0),
        }
    }

    /// Fraction of velocity kept after a wall bounce
    pub fn restitution(&self, settings: &Settings) -> f64 {
        match self {
            Arena::Rectangular { .. } => settings.restitution_rectangular,
            Arena::Circular { .. } => settings.restitution_circular,
        }
    }

    /// Whether a disc of this radius has room to move
    pub fn fits(&self, radius: f64) -> bool {
        match *self {
            Arena::Rectangular { width, height } => radius * 2.0 < width.min(height),
            Arena::Circular { .. } => self.wall_radius().is_some_and(|wall| radius < wall),
        }
    }
}

/// The complete simulation: arena, settings and discs
#[derive(Debug, Clone)]
pub struct Simulation {
    arena: Arena,
    settings: Settings,
    phase: SimPhase,
    /// Ticks advanced since the discs were created
    time_ticks: u64,
    /// Ordered by creation; radius strictly increases with the index
    discs: Vec<Disc>,
}

impl Simulation {
    /// Create a simulation without discs
    pub fn new(arena: Arena, settings: Settings) -> Self {
        if !arena.fits(settings.largest_radius()) {
            log::warn!(
                "Largest disc (radius {}) does not fit {:?}",
                settings.largest_radius(),
                arena
            );
        }

        Self {
            arena,
            settings,
            phase: SimPhase::Uninitialized,
            time_ticks: 0,
            discs: Vec::new(),
        }
    }

    /// Create a simulation and its discs in one go
    pub fn start(arena: Arena, settings: Settings) -> Self {
        let mut sim = Self::new(arena, settings);
        sim.init_discs();
        sim
    }

    /// Populate the disc collection and enter [`SimPhase::Running`]
    ///
    /// Discs spawn at rest in the middle of the frame with radii growing
    /// by `radius_step` from `first_radius`. Calling this again is a no-op.
    pub fn init_discs(&mut self) {
        if self.phase == SimPhase::Running {
            log::warn!("Discs already initialized, ignoring");
            return;
        }

        let mut rng = Pcg32::seed_from_u64(self.settings.seed);
        let spawn = self.arena.frame_center();
        let mut next_radius = self.settings.first_radius;

        self.discs = Vec::with_capacity(self.settings.disc_count);
        for _ in 0..self.settings.disc_count {
            let color = match self.settings.color_mode {
                ColorMode::Color => Some(DiscColor::random(&mut rng)),
                ColorMode::Monochrome => None,
            };
            self.discs
                .push(Disc::new(spawn, next_radius, self.settings.disc_density, color));
            next_radius += self.settings.radius_step;
        }

        self.phase = SimPhase::Running;
        log::info!(
            "{} discs spawned at ({}, {}) in {} arena",
            self.discs.len(),
            spawn.x,
            spawn.y,
            self.arena.shape().as_str()
        );
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// Mutable access to the discs; the collection itself stays fixed
    pub fn discs_mut(&mut self) -> &mut [Disc] {
        &mut self.discs
    }

    /// Restitution for this simulation's arena
    pub fn restitution(&self) -> f64 {
        self.arena.restitution(&self.settings)
    }

    /// Drawable state of every disc, in draw order
    pub fn snapshot(&self) -> Vec<DiscSnapshot> {
        self.discs.iter().map(Disc::snapshot).collect()
    }

    pub(super) fn advance_clock(&mut self) {
        self.time_ticks += 1;
    }
}
