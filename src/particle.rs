//! Verlet particles with position-based dynamics.

use crate::float::Float;
use crate::topology::{GridCoord, Neighbors};
use crate::vec::Vec2;

/// One lattice cell: a point mass with implicit velocity.
///
/// Velocity is never stored; it is `pos - prev_pos`. A pinned particle keeps
/// `pos == prev_pos` and ignores integration and relaxation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec2<F>,
    pub prev_pos: Vec2<F>,
    pub acceleration: Vec2<F>,
    pub rest_length: F,
    pub pinned: bool,
    coord: GridCoord,
    neighbors: Neighbors,
}

impl<F: Float> Particle<F> {
    /// A resting particle at `pos`.
    pub fn new(
        coord: GridCoord,
        neighbors: Neighbors,
        pos: Vec2<F>,
        acceleration: Vec2<F>,
        rest_length: F,
    ) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration,
            rest_length,
            pinned: false,
            coord,
            neighbors,
        }
    }

    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    /// Advance one Verlet step.
    ///
    /// A pinned particle snaps back to `prev_pos`, overriding any external
    /// force. A free particle moves by its implicit velocity plus
    /// `acceleration * dt^2`.
    pub fn integrate(&mut self, dt: F) {
        if self.pinned {
            self.freeze();
            return;
        }
        let displacement = (self.pos - self.prev_pos) + self.acceleration.scale(dt * dt);
        self.prev_pos = self.pos;
        self.pos = self.pos + displacement;
    }

    /// Restore a pinned particle to its held position.
    pub fn freeze(&mut self) {
        self.pos = self.prev_pos;
    }

    /// Implicit per-step velocity.
    pub fn velocity_raw(&self) -> Vec2<F> {
        self.pos - self.prev_pos
    }

    /// Teleport to `pos` with zero velocity and set the pin state.
    pub fn place(&mut self, pos: Vec2<F>, pinned: bool) {
        self.pos = pos;
        self.prev_pos = pos;
        self.pinned = pinned;
    }

    /// Hold the particle where it currently is.
    pub fn pin(&mut self) {
        self.pinned = true;
        self.prev_pos = self.pos;
    }

    /// Release the particle. It resumes from rest.
    pub fn unpin(&mut self) {
        self.pinned = false;
        self.prev_pos = self.pos;
    }
}
