//! Cloth lattice: a fixed-size, row-major grid of Verlet particles.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::Particle;
use crate::topology::{GridCoord, Neighbors};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// A cloth built from a `rows x columns` grid of particles.
///
/// The particle at `(row, column)` has index `row * columns + column` and
/// starts at `origin + (row, column) * rest_length`, so rows advance along x
/// and columns along y. Every particle starts at rest with every structural
/// constraint exactly satisfied. The particle set and topology never change
/// after construction.
#[derive(Clone, Debug)]
pub struct ClothGrid<F: Float> {
    particles: AllocVec<Particle<F>>,
    rows: usize,
    columns: usize,
}

impl<F: Float> ClothGrid<F> {
    /// Build the lattice and its neighbor sets.
    pub fn new(config: &ClothConfig<F>) -> Result<Self, ClothError> {
        config.validate()?;

        let rows = config.rows;
        let columns = config.columns;
        let spacing = config.rest_length;
        let mut particles = AllocVec::with_capacity(rows * columns);

        for row in 0..rows {
            for column in 0..columns {
                let coord = GridCoord::new(row, column);
                let pos = Vec2::new(
                    config.origin.x + F::from_usize(row) * spacing,
                    config.origin.y + F::from_usize(column) * spacing,
                );
                particles.push(Particle::new(
                    coord,
                    Neighbors::of(coord, rows, columns),
                    pos,
                    config.acceleration,
                    spacing,
                ));
            }
        }

        Ok(ClothGrid { particles, rows, columns })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn columns(&self) -> usize { self.columns }
    pub fn particle_count(&self) -> usize { self.particles.len() }

    /// Flat index of `(row, column)`.
    pub fn index(&self, row: usize, column: usize) -> Result<usize, ClothError> {
        let coord = GridCoord::new(row, column);
        if coord.in_bounds(self.rows, self.columns) {
            Ok(coord.index(self.columns))
        } else {
            Err(ClothError::ParticleOutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    pub fn particle(&self, row: usize, column: usize) -> Result<&Particle<F>, ClothError> {
        let idx = self.index(row, column)?;
        Ok(&self.particles[idx])
    }

    pub fn particle_mut(&mut self, row: usize, column: usize) -> Result<&mut Particle<F>, ClothError> {
        let idx = self.index(row, column)?;
        Ok(&mut self.particles[idx])
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle<F>] {
        &mut self.particles
    }

    pub fn position_at(&self, row: usize, column: usize) -> Result<Vec2<F>, ClothError> {
        Ok(self.particle(row, column)?.pos)
    }

    /// Move a particle to `pos` with zero velocity and set its pin state.
    pub fn set_position(
        &mut self,
        row: usize,
        column: usize,
        pos: Vec2<F>,
        pinned: bool,
    ) -> Result<(), ClothError> {
        self.particle_mut(row, column)?.place(pos, pinned);
        Ok(())
    }

    pub fn pin(&mut self, row: usize, column: usize) -> Result<(), ClothError> {
        self.particle_mut(row, column)?.pin();
        Ok(())
    }

    pub fn unpin(&mut self, row: usize, column: usize) -> Result<(), ClothError> {
        self.particle_mut(row, column)?.unpin();
        Ok(())
    }

    /// Replace the acceleration of every particle.
    pub fn set_acceleration(&mut self, acceleration: Vec2<F>) {
        for p in self.particles.iter_mut() {
            p.acceleration = acceleration;
        }
    }

    /// One Verlet pass over every particle.
    ///
    /// Each particle reads only its own state, so with the `parallel`
    /// feature the pass is split across the rayon thread pool.
    pub fn integrate<O: StepObserver>(&mut self, dt: F, observer: &mut O) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.particles.par_iter_mut().for_each(|p| p.integrate(dt));
        }
        #[cfg(not(feature = "parallel"))]
        for p in self.particles.iter_mut() {
            p.integrate(dt);
        }
        observer.on_integrate();
    }

    /// Copy of every particle position, row-major.
    pub fn positions(&self) -> AllocVec<Vec2<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    /// Each structural link once, as `(a, b)` flat indices with `a < b`.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.particles.iter().enumerate().flat_map(|(a, p)| {
            p.neighbors().iter().filter(move |&b| b > a).map(move |b| (a, b))
        })
    }

    pub fn link_count(&self) -> usize {
        self.links().count()
    }

    /// Sum over all links of `|length - rest_length|`.
    pub fn constraint_error(&self) -> F {
        self.links().fold(F::zero(), |acc, (a, b)| {
            let pa = &self.particles[a];
            let pb = &self.particles[b];
            acc + (pa.pos.distance(pb.pos) - pa.rest_length).abs()
        })
    }
}
