//! Capabilities the engine host lends the guest.
//!
//! The host owns logging, timing, randomness, input and drawing. Everything
//! in the simulation reaches those through the traits here instead of calling
//! the raw imports, so it can run against a scripted host in tests. The wasm
//! bindings live in `guest`.

use crate::color::Color;
use cgmath::Vector2;
use rand::Rng;

/// Input codes understood by the host's `InputPressed` import.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Button {
    Exit = 1,
    Spawn = 2,
}

impl Button {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// The host answers `InputPressed` with an `int32`; anything non-zero is down.
pub fn is_pressed(raw: i32) -> bool {
    raw != 0
}

pub trait Random {
    /// Uniform float in [0, 1).
    fn random_float(&mut self) -> f32;
    /// Uniform integer in [0, max).
    fn random_int(&mut self, max: i32) -> i32;
}

pub trait Engine: Random {
    fn log(&mut self, message: &str);
    fn fps(&self) -> f32;
    fn tps(&self) -> f32;
    /// Asks the host to stop driving the frame loop.
    fn exit(&mut self);
}

pub trait Input {
    fn pressed(&self, button: Button) -> bool;
    fn cursor_position(&self) -> Vector2<f32>;
}

pub trait Gfx {
    fn clear(&mut self, color: Color);
    /// Draws the gopher sprite with its top-left corner at `pos`, tinted by `tint`.
    fn image(&mut self, pos: Vector2<f32>, tint: Color);
    fn rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn text(&mut self, text: &str, x: f32, y: f32);
}

/// Everything a full frame needs from the host.
pub trait Host: Engine + Input + Gfx {}

impl<T: Engine + Input + Gfx + ?Sized> Host for T {}

/// Random source backed by a `rand` generator, for running the simulation
/// away from the host with a fixed seed.
#[derive(Clone, Debug)]
pub struct SeededRandom<R> {
    rng: R,
}

impl<R: Rng> SeededRandom<R> {
    pub fn new(rng: R) -> Self {
        SeededRandom { rng }
    }
}

impl SeededRandom<rand::rngs::SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        SeededRandom::new(rand::rngs::SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Random for SeededRandom<R> {
    fn random_float(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    fn random_int(&mut self, max: i32) -> i32 {
        if max <= 0 {
            return 0;
        }
        self.rng.gen_range(0, max)
    }
}
