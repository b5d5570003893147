//! Bird vertical physics and the flap input window.

use crate::config::GameConfig;
use crate::geometry::Rect;

/// The player avatar. Horizontal position is fixed; only `y` integrates.
///
/// A flap opens a short hold window during which the bird rises each tick;
/// once the window runs out it falls again. Re-flapping restarts the window
/// rather than stacking, so holding the key (or clicking repeatedly) reads
/// as "hold to rise, release to fall".
#[derive(Debug, Clone)]
pub struct Bird {
    /// Vertical position of the bird's bottom edge, measured from the floor.
    pub y: f64,
    flap_ticks_left: u32,
    x: f64,
    width: f64,
    height: f64,
    field_height: f64,
    flap_delta: f64,
    fall_delta: f64,
    flap_hold_ticks: u32,
}

impl Bird {
    /// Spawn at the vertical center of the field.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            y: config.field_height / 2.0,
            flap_ticks_left: 0,
            x: config.bird_x,
            width: config.bird_width,
            height: config.bird_height,
            field_height: config.field_height,
            flap_delta: config.flap_delta,
            fall_delta: config.fall_delta,
            flap_hold_ticks: config.flap_hold_ticks,
        }
    }

    /// Flap trigger. Opens the hold window, or restarts it if already open.
    pub fn flap(&mut self) {
        self.flap_ticks_left = self.flap_hold_ticks;
    }

    pub fn is_flapping(&self) -> bool {
        self.flap_ticks_left > 0
    }

    /// Integrate one tick of flap or fall, saturating at the field bounds.
    pub fn advance(&mut self) {
        let delta = if self.is_flapping() {
            self.flap_delta
        } else {
            -self.fall_delta
        };
        self.flap_ticks_left = self.flap_ticks_left.saturating_sub(1);

        let ceiling = self.field_height - self.height;
        self.y = (self.y + delta).clamp(0.0, ceiling);
    }

    /// Logical collision rectangle at the current position.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
