#![allow(dead_code)]

use cgmath::{vec2, Vector2};
use gopher_swarm::{Button, Color, Engine, Gfx, Input, Random, SeededRandom};
use rand::rngs::SmallRng;
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Image { x: f32, y: f32, tint: Color },
    Rectangle { x: f32, y: f32, w: f32, h: f32, color: Color },
    Text { text: String, x: f32, y: f32 },
}

/// Host stand-in: scripted random draws (falling back to a seeded
/// generator), settable input, and a recording of everything drawn.
pub struct MockHost {
    pub floats: VecDeque<f32>,
    pub ints: VecDeque<i32>,
    pub fallback: SeededRandom<SmallRng>,
    pub pressed: HashSet<Button>,
    pub cursor: Vector2<f32>,
    pub fps: f32,
    pub tps: f32,
    pub commands: Vec<DrawCommand>,
    pub logs: Vec<String>,
    pub exit_requested: bool,
}

impl MockHost {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        MockHost {
            floats: VecDeque::new(),
            ints: VecDeque::new(),
            fallback: SeededRandom::from_seed(seed),
            pressed: HashSet::new(),
            cursor: vec2(0.0, 0.0),
            fps: 60.0,
            tps: 60.0,
            commands: Vec::new(),
            logs: Vec::new(),
            exit_requested: false,
        }
    }

    pub fn script_floats(&mut self, floats: &[f32]) {
        self.floats.extend(floats.iter().copied());
    }

    pub fn press(&mut self, button: Button) {
        self.pressed.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed.remove(&button);
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Random for MockHost {
    fn random_float(&mut self) -> f32 {
        match self.floats.pop_front() {
            Some(f) => f,
            None => self.fallback.random_float(),
        }
    }

    fn random_int(&mut self, max: i32) -> i32 {
        match self.ints.pop_front() {
            Some(i) => i,
            None => self.fallback.random_int(max),
        }
    }
}

impl Engine for MockHost {
    fn log(&mut self, message: &str) {
        self.logs.push(message.to_owned());
    }

    fn fps(&self) -> f32 {
        self.fps
    }

    fn tps(&self) -> f32 {
        self.tps
    }

    fn exit(&mut self) {
        self.exit_requested = true;
    }
}

impl Input for MockHost {
    fn pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn cursor_position(&self) -> Vector2<f32> {
        self.cursor
    }
}

impl Gfx for MockHost {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn image(&mut self, pos: Vector2<f32>, tint: Color) {
        self.commands.push(DrawCommand::Image {
            x: pos.x,
            y: pos.y,
            tint,
        });
    }

    fn rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands
            .push(DrawCommand::Rectangle { x, y, w, h, color });
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
        });
    }
}

/// Random source that replays floats in order and panics when it runs dry,
/// for tests that must account for every draw.
pub struct Script {
    floats: VecDeque<f32>,
}

impl Script {
    pub fn new(floats: &[f32]) -> Self {
        Script {
            floats: floats.iter().copied().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.floats.len()
    }
}

impl Random for Script {
    fn random_float(&mut self) -> f32 {
        self.floats.pop_front().expect("random source ran dry")
    }

    fn random_int(&mut self, _max: i32) -> i32 {
        0
    }
}
