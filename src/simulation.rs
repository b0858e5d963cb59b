// One tick of the swarm: gravity, Euler integration, then bouncing off
// the screen edges. Positions are never clamped, so a gopher can overlap
// an edge for a frame before its velocity carries it back.

use crate::config::Config;
use crate::host::Random;
use crate::particle::{Gopher, Gophers};

pub fn step<R: Random + ?Sized>(gophers: &mut Gophers, config: &Config, rng: &mut R) {
    let floor = config.floor();
    let right_wall = config.right_wall();
    for gopher in gophers.iter_mut() {
        integrate(gopher, config.gravity);
        bounce_vertical(gopher, floor, config, rng);
        bounce_horizontal(gopher, right_wall);
    }
}

fn integrate(gopher: &mut Gopher, gravity: f32) {
    gopher.vel.y += gravity;
    gopher.pos += gopher.vel;
}

// Floor is checked before the ceiling; only the floor consumes randomness
fn bounce_vertical<R: Random + ?Sized>(gopher: &mut Gopher, floor: f32, config: &Config, rng: &mut R) {
    if gopher.pos.y >= floor {
        gopher.vel.y *= config.floor_damping;
        if rng.random_float() > config.kick_threshold {
            gopher.vel.y -= rng.random_float() * config.kick_strength;
        }
    } else if gopher.pos.y < 0.0 {
        gopher.vel.y = -gopher.vel.y;
    }
}

fn bounce_horizontal(gopher: &mut Gopher, right_wall: f32) {
    if gopher.pos.x >= right_wall {
        gopher.vel.x = -gopher.vel.x.abs();
    } else if gopher.pos.x < 0.0 {
        gopher.vel.x = gopher.vel.x.abs();
    }
}
