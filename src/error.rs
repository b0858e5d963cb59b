//! Error types for setting up the simulation.

use thiserror::Error;

/// Reasons a [`Config`](crate::config::Config) is rejected.
///
/// Once a game is constructed nothing in the frame loop can fail, so this is
/// the only error type the crate exposes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen size must be positive and finite, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("sprite {sprite_width}x{sprite_height} does not fit on a {screen_width}x{screen_height} screen")]
    SpriteTooLarge {
        sprite_width: f32,
        sprite_height: f32,
        screen_width: f32,
        screen_height: f32,
    },
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },
    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}
