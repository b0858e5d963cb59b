// Gopher particle struct, keeps track of position, velocity, and tint,
// plus the append-only store that owns every gopher in the swarm

use crate::color::Color;
use cgmath::Vector2;
use std::slice;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gopher {
    pub pos: Vector2<f32>,
    pub vel: Vector2<f32>,
    pub color: Color,
}

impl Gopher {
    pub fn new(pos: Vector2<f32>, vel: Vector2<f32>, color: Color) -> Gopher {
        Gopher { pos, vel, color }
    }
}

/// Insertion-ordered store of every gopher in the simulation.
///
/// Gophers are only ever appended; there is no way to remove or reorder
/// them, so the length only grows until the store itself is dropped.
#[derive(Clone, Debug, Default)]
pub struct Gophers {
    gophers: Vec<Gopher>,
}

impl Gophers {
    pub fn new() -> Self {
        Gophers {
            gophers: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Gophers {
            gophers: Vec::with_capacity(capacity),
        }
    }

    pub fn reserve(&mut self, additional: usize) {
        self.gophers.reserve(additional);
    }

    pub fn push(&mut self, gopher: Gopher) {
        self.gophers.push(gopher);
    }

    pub fn len(&self) -> usize {
        self.gophers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gophers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Gopher> {
        self.gophers.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Gopher> {
        self.gophers.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Gopher> {
        self.gophers.iter_mut()
    }

    pub fn as_slice(&self) -> &[Gopher] {
        &self.gophers
    }
}

impl Extend<Gopher> for Gophers {
    fn extend<I: IntoIterator<Item = Gopher>>(&mut self, iter: I) {
        self.gophers.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Gophers {
    type Item = &'a Gopher;
    type IntoIter = slice::Iter<'a, Gopher>;

    fn into_iter(self) -> Self::IntoIter {
        self.gophers.iter()
    }
}

impl<'a> IntoIterator for &'a mut Gophers {
    type Item = &'a mut Gopher;
    type IntoIter = slice::IterMut<'a, Gopher>;

    fn into_iter(self) -> Self::IntoIter {
        self.gophers.iter_mut()
    }
}
