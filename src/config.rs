//! Tunables for the gopher simulation.

use crate::error::ConfigError;
use log::LevelFilter;

/// Constants the simulation step, spawner and HUD work from.
///
/// # Builder Pattern
/// ```
/// use gopher_swarm::config::Config;
///
/// let config = Config::default()
///     .with_screen(800.0, 600.0)
///     .with_gravity(0.2)
///     .with_gophers_per_click(250);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Screen width in pixels. Default: 640.
    pub screen_width: f32,
    /// Screen height in pixels. Default: 480.
    pub screen_height: f32,
    /// Gopher sprite width in pixels. Default: 27.
    pub sprite_width: f32,
    /// Gopher sprite height in pixels. Default: 29.
    pub sprite_height: f32,
    /// Added to every gopher's vertical velocity each tick. Default: 0.0981.
    pub gravity: f32,
    /// Vertical velocity multiplier applied on hitting the floor. Default: 0.85 / 2.
    pub floor_damping: f32,
    /// A floor bounce gets an extra kick when a fresh random draw exceeds this. Default: 0.5.
    pub kick_threshold: f32,
    /// Upper bound (exclusive) of the extra upward kick. Default: 8.
    pub kick_strength: f32,
    /// Upper bound (exclusive) of each velocity component of a new gopher. Default: 5.
    pub launch_speed: f32,
    /// Gophers created at setup. Default: 1000.
    pub starting_gophers: usize,
    /// Gophers appended per spawn request. Default: 1000.
    pub gophers_per_click: usize,
    /// Most verbose level forwarded to the host log. Default: `Info`.
    pub log_level: LevelFilter,
}

impl Config {
    pub fn new() -> Self {
        Config {
            screen_width: 640.0,
            screen_height: 480.0,
            sprite_width: 27.0,
            sprite_height: 29.0,
            gravity: 0.0981,
            floor_damping: 0.85 / 2.0,
            kick_threshold: 0.5,
            kick_strength: 8.0,
            launch_speed: 5.0,
            starting_gophers: 1000,
            gophers_per_click: 1000,
            log_level: LevelFilter::Info,
        }
    }

    pub fn with_screen(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_sprite(mut self, width: f32, height: f32) -> Self {
        self.sprite_width = width;
        self.sprite_height = height;
        self
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_starting_gophers(mut self, count: usize) -> Self {
        self.starting_gophers = count;
        self
    }

    pub fn with_gophers_per_click(mut self, count: usize) -> Self {
        self.gophers_per_click = count;
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Lowest y a gopher can reach before it counts as touching the floor.
    pub fn floor(&self) -> f32 {
        self.screen_height - self.sprite_height
    }

    /// Lowest x a gopher can reach before it counts as touching the right wall.
    pub fn right_wall(&self) -> f32 {
        self.screen_width - self.sprite_width
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let screen_ok = |v: f32| v.is_finite() && v > 0.0;
        if !screen_ok(self.screen_width) || !screen_ok(self.screen_height) {
            return Err(ConfigError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        let sprite_fits = |sprite: f32, screen: f32| sprite.is_finite() && sprite >= 0.0 && sprite < screen;
        if !sprite_fits(self.sprite_width, self.screen_width)
            || !sprite_fits(self.sprite_height, self.screen_height)
        {
            return Err(ConfigError::SpriteTooLarge {
                sprite_width: self.sprite_width,
                sprite_height: self.sprite_height,
                screen_width: self.screen_width,
                screen_height: self.screen_height,
            });
        }

        finite("gravity", self.gravity)?;
        in_range("floor_damping", self.floor_damping, 0.0, 1.0)?;
        in_range("kick_threshold", self.kick_threshold, 0.0, 1.0)?;
        in_range("kick_strength", self.kick_strength, 0.0, f32::MAX)?;
        in_range("launch_speed", self.launch_speed, 0.0, f32::MAX)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn in_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < min || value > max {
        return Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
