// Creates gophers, both the initial population and the bursts dropped
// at the cursor on a spawn request.

use crate::color::{Color, PALETTE};
use crate::config::Config;
use crate::host::Random;
use crate::particle::{Gopher, Gophers};
use cgmath::{vec2, Vector2};

/// Makes one gopher at `pos` with a random launch velocity and palette color.
///
/// Draw order is velocity x, velocity y, then color, so a scripted random
/// source sees the same sequence every time.
pub fn new_gopher<R: Random + ?Sized>(pos: Vector2<f32>, config: &Config, rng: &mut R) -> Gopher {
    let vel_x = rng.random_float() * config.launch_speed;
    let vel_y = rng.random_float() * config.launch_speed;
    let color = Color::from_palette(rng.random_int(PALETTE.len() as i32));
    Gopher::new(pos, vec2(vel_x, vel_y), color)
}

/// Appends `count` new gophers at `pos`; existing gophers are untouched.
pub fn spawn<R: Random + ?Sized>(
    gophers: &mut Gophers,
    pos: Vector2<f32>,
    count: usize,
    config: &Config,
    rng: &mut R,
) {
    gophers.reserve(count);
    for _ in 0..count {
        gophers.push(new_gopher(pos, config, rng));
    }
}

/// Populates the swarm at setup, every gopher starting in the top-left corner.
pub fn seed<R: Random + ?Sized>(gophers: &mut Gophers, config: &Config, rng: &mut R) {
    spawn(gophers, vec2(0.0, 0.0), config.starting_gophers, config, rng);
}

/// One spawn request's worth of gophers at the cursor.
pub fn spawn_burst<R: Random + ?Sized>(
    gophers: &mut Gophers,
    cursor: Vector2<f32>,
    config: &Config,
    rng: &mut R,
) {
    spawn(gophers, cursor, config.gophers_per_click, config, rng);
}
