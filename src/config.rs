//! Tunable simulation parameters.
//!
//! Every constant the game plays with — field size, gap size, scroll speed,
//! flap strength — lives here rather than being scattered through the
//! simulation. A JSON file in the platform config directory overrides the
//! defaults; a missing file just means defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Simulation tunables, in field units (the reference used CSS pixels).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Horizontal extent of the play field.
    pub field_width: f64,
    /// Vertical extent of the play field.
    pub field_height: f64,
    /// Passable vertical space between a pair's top and bottom obstacles.
    pub gap_size: f64,
    /// Horizontal distance between consecutive obstacle pairs.
    pub pair_spacing: f64,
    /// Number of obstacle pairs cycling through the field.
    pub pair_count: usize,
    /// Rendering width of an obstacle pair, also used for off-screen detection.
    pub obstacle_width: f64,
    /// Leftward displacement applied to every pair each tick.
    pub scroll_speed: f64,
    /// Fixed horizontal position of the bird's left edge.
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Upward displacement per tick while the flap window is open.
    pub flap_delta: f64,
    /// Downward displacement per tick while falling (positive magnitude).
    pub fall_delta: f64,
    /// Ticks one flap keeps the bird rising; re-flapping restarts the window.
    pub flap_hold_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 450.0,
            gap_size: 200.0,
            pair_spacing: 400.0,
            pair_count: 4,
            obstacle_width: 120.0,
            scroll_speed: 5.0,
            bird_x: 120.0,
            bird_width: 60.0,
            bird_height: 40.0,
            flap_delta: 8.0,
            fall_delta: 5.0,
            // ~120ms at the 30ms tick before a lone flap decays into a fall
            flap_hold_ticks: 4,
        }
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

impl GameConfig {
    /// Path of the user override file.
    pub fn config_path() -> io::Result<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "skyhopper").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;
        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Load the override file if present, falling back to defaults.
    ///
    /// The returned config has already passed [`GameConfig::validate`].
    pub fn load() -> io::Result<Self> {
        let path = Self::config_path()?;
        let config = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject parameter sets the simulation cannot run on.
    ///
    /// Checked once at construction so the per-tick code can treat every
    /// operation as total.
    pub fn validate(&self) -> io::Result<()> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(invalid(format!(
                "field dimensions must be positive (got {}x{})",
                self.field_width, self.field_height
            )));
        }
        if self.gap_size <= 0.0 || self.gap_size >= self.field_height {
            return Err(invalid(format!(
                "gap_size {} must be positive and smaller than field_height {}",
                self.gap_size, self.field_height
            )));
        }
        if self.pair_count == 0 {
            return Err(invalid("pair_count must be at least 1".to_string()));
        }
        if self.obstacle_width <= 0.0 {
            return Err(invalid(format!(
                "obstacle_width {} must be positive",
                self.obstacle_width
            )));
        }
        if self.pair_spacing <= 0.0 {
            return Err(invalid(format!(
                "pair_spacing {} must be positive",
                self.pair_spacing
            )));
        }
        if self.scroll_speed <= 0.0 || self.scroll_speed >= self.pair_spacing {
            // A step as large as the spacing could carry a pair past the
            // midpoint without any tick observing the crossing.
            return Err(invalid(format!(
                "scroll_speed {} must be positive and smaller than pair_spacing {}",
                self.scroll_speed, self.pair_spacing
            )));
        }
        if self.bird_width <= 0.0 || self.bird_height <= 0.0 {
            return Err(invalid(format!(
                "bird dimensions must be positive (got {}x{})",
                self.bird_width, self.bird_height
            )));
        }
        if self.bird_height >= self.field_height {
            return Err(invalid(format!(
                "bird_height {} must be smaller than field_height {}",
                self.bird_height, self.field_height
            )));
        }
        if self.bird_x < 0.0 || self.bird_x + self.bird_width > self.field_width {
            return Err(invalid(format!(
                "bird at x={} (width {}) must sit inside the field (width {})",
                self.bird_x, self.bird_width, self.field_width
            )));
        }
        if self.flap_delta <= 0.0 || self.fall_delta <= 0.0 {
            return Err(invalid(format!(
                "flap_delta {} and fall_delta {} must be positive magnitudes",
                self.flap_delta, self.fall_delta
            )));
        }
        if self.flap_hold_ticks == 0 {
            return Err(invalid(
                "flap_hold_ticks must be at least 1 or flapping never lifts".to_string(),
            ));
        }
        Ok(())
    }
}
