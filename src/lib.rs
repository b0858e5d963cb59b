//! Gophers falling under gravity and bouncing off the screen edges, built
//! as a guest module for a wasm game engine host.
//!
//! The host calls `setup` once, then `update` and `render` every frame,
//! then `teardown`. All drawing, input, timing and randomness come from the
//! host through the traits in [`host`]. [`GameSlot`] holds the game between
//! host calls; the exported entry points that bind it to the host's `env`
//! imports live in the wasm-only `guest` module.

pub mod color;
pub mod config;
pub mod error;
pub mod host;
pub mod logger;
pub mod particle;
pub mod renderer;
pub mod simulation;
pub mod slot;
pub mod spawner;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod guest;

// Use `wee_alloc` as the global allocator when the feature is on.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub use color::{Color, PALETTE};
pub use config::Config;
pub use error::ConfigError;
pub use host::{Button, Engine, Gfx, Host, Input, Random, SeededRandom};
pub use particle::{Gopher, Gophers};
pub use renderer::Renderer;
pub use slot::GameSlot;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Ready,
    Terminated,
}

/// The whole guest: the swarm, the constants it runs under, and where it
/// is in the host's lifecycle.
pub struct Game {
    config: Config,
    gophers: Gophers,
    renderer: Renderer,
    state: State,
}

impl Game {
    pub fn new(config: Config) -> Result<Game, ConfigError> {
        config.validate()?;
        Ok(Game {
            gophers: Gophers::with_capacity(config.starting_gophers),
            config,
            renderer: Renderer::new(),
            state: State::Uninitialized,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gophers(&self) -> &Gophers {
        &self.gophers
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn setup<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.state != State::Uninitialized {
            log::debug!("setup called while {:?}, ignoring", self.state);
            return;
        }

        host.log("Setup");
        spawner::seed(&mut self.gophers, &self.config, host);
        self.state = State::Ready;
    }

    /// Advances the swarm one tick. Input is level-triggered: holding the
    /// spawn button adds a burst on every tick it stays down.
    pub fn update<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.state != State::Ready {
            return;
        }

        if host.pressed(Button::Exit) {
            log::info!("exit requested with {} gophers", self.gophers.len());
            host.exit();
            self.state = State::Terminated;
            return;
        }

        if host.pressed(Button::Spawn) {
            let cursor = host.cursor_position();
            spawner::spawn_burst(&mut self.gophers, cursor, &self.config, host);
            log::debug!(
                "spawned {} gophers at ({}, {}), {} total",
                self.config.gophers_per_click,
                cursor.x,
                cursor.y,
                self.gophers.len()
            );
        }

        simulation::step(&mut self.gophers, &self.config, host);
    }

    pub fn render<H: Host + ?Sized>(&self, host: &mut H) {
        if self.state == State::Uninitialized {
            return;
        }
        self.renderer.render(&self.gophers, host);
    }

    /// `update` followed by `render`, for hosts that drive a single
    /// callback per frame.
    pub fn frame<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.update(host);
        self.render(host);
    }

    /// Ends the game. Takes it by value so the swarm is released here and
    /// nothing can draw or step it afterwards.
    pub fn teardown<H: Host + ?Sized>(self, host: &mut H) {
        host.log("Teardown");
        log::debug!("releasing {} gophers", self.gophers.len());
    }
}
