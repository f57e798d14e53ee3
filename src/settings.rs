//! Simulation settings
//!
//! Every tunable of the disc simulation. Settings are plain data and can be
//! loaded from a JSON file; missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Whether discs carry a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Color,
    Monochrome,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Color => "Color",
            ColorMode::Monochrome => "Monochrome",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "color" | "colour" => Some(ColorMode::Color),
            "mono" | "monochrome" | "bw" => Some(ColorMode::Monochrome),
            _ => None,
        }
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Discs ===
    /// Number of discs created at startup
    pub disc_count: usize,
    /// Mass per unit area (mass = π r² density)
    pub disc_density: f64,
    /// Radius of disc 0
    pub first_radius: f64,
    /// Radius added for each following disc
    pub radius_step: f64,

    // === Forces ===
    /// Tilt reading to force factor
    pub accel_ratio: f64,
    /// Velocity kept after bouncing off a rectangular wall
    pub restitution_rectangular: f64,
    /// Velocity kept after bouncing off the circular wall
    pub restitution_circular: f64,

    // === Host ===
    /// Interval the host should tick at
    pub tick_ms: u64,
    /// Give discs a color or leave them monochrome
    pub color_mode: ColorMode,
    /// Seed for disc colors
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            disc_count: NUM_DISCS,
            disc_density: DISC_DENSITY,
            first_radius: FIRST_DISC_RADIUS,
            radius_step: DISC_RADIUS_STEP,

            accel_ratio: ACCEL_RATIO,
            restitution_rectangular: RESTITUTION_RECTANGULAR,
            restitution_circular: RESTITUTION_CIRCULAR,

            tick_ms: TICK_MS,
            color_mode: ColorMode::Color,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Default settings with a different color mode
    pub fn with_color_mode(color_mode: ColorMode) -> Self {
        Self {
            color_mode,
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Cannot read settings {}: {} - using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Radius of the largest disc this configuration creates
    pub fn largest_radius(&self) -> f64 {
        let extra_discs = self.disc_count.saturating_sub(1) as f64;
        self.first_radius + extra_discs * self.radius_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.disc_count, 20);
        assert_eq!(settings.tick_ms, 50);
        assert_eq!(settings.accel_ratio, 0.05);
        assert_eq!(settings.restitution_rectangular, 0.5);
        assert_eq!(settings.restitution_circular, 0.7);
        assert_eq!(settings.color_mode, ColorMode::Color);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "disc_count": 5, "color_mode": "monochrome" }"#)
            .unwrap();
        assert_eq!(settings.disc_count, 5);
        assert_eq!(settings.color_mode, ColorMode::Monochrome);
        assert_eq!(settings.disc_density, DISC_DENSITY);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            seed: 7,
            ..Settings::with_color_mode(ColorMode::Monochrome)
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ disc_count: ").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let settings = Settings::load("/definitely/not/here/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_largest_radius() {
        assert!((Settings::default().largest_radius() - 12.5).abs() < 1e-9);
        let one = Settings {
            disc_count: 1,
            ..Settings::default()
        };
        assert_eq!(one.largest_radius(), 3.0);
    }

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!(ColorMode::from_str("MONO"), Some(ColorMode::Monochrome));
        assert_eq!(ColorMode::from_str("color"), Some(ColorMode::Color));
        assert_eq!(ColorMode::from_str("sepia"), None);
        assert_eq!(ColorMode::Monochrome.as_str(), "Monochrome");
    }
}
