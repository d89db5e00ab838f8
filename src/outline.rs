//! Read-only views of the cloth for rendering.
//!
//! A [`Snapshot`] is an owned copy of every particle position taken between
//! ticks. It can be handed to another thread and turned into a drawable
//! outline without touching the live simulation.

use crate::error::ClothError;
use crate::float::Float;
use crate::hull::{closed_hull, convex_hull};
use crate::topology::{GridCoord, Neighbors};
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Which points feed the outline hull.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutlineSampling {
    /// Each particle position once.
    #[default]
    Particles,
    /// Each particle once per structural link it starts, the way a line
    /// renderer walks the mesh. Duplicates collapse before the hull scan, so
    /// the outline matches `Particles` except on a 1x1 grid, which has no
    /// links and yields no points.
    PerLink,
}

/// Scale simulation-space positions into output space and pick hull inputs.
pub(crate) fn sample_points<F: Float>(
    positions: &[Vec2<F>],
    rows: usize,
    columns: usize,
    output_scale: F,
    sampling: OutlineSampling,
) -> AllocVec<Vec2<F>> {
    match sampling {
        OutlineSampling::Particles => positions.iter().map(|p| p.scale(output_scale)).collect(),
        OutlineSampling::PerLink => {
            let mut points = AllocVec::with_capacity(positions.len() * 4);
            for (a, pos) in positions.iter().enumerate() {
                let coord = GridCoord::from_index(a, columns);
                let links = Neighbors::of(coord, rows, columns).len();
                points.extend(core::iter::repeat(pos.scale(output_scale)).take(links));
            }
            points
        }
    }
}

/// Tick-complete copy of the particle positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<F: Float> {
    tick: u64,
    rows: usize,
    columns: usize,
    output_scale: F,
    positions: AllocVec<Vec2<F>>,
}

impl<F: Float> Snapshot<F> {
    pub(crate) fn new(
        tick: u64,
        rows: usize,
        columns: usize,
        output_scale: F,
        positions: AllocVec<Vec2<F>>,
    ) -> Self {
        Snapshot { tick, rows, columns, output_scale, positions }
    }

    /// Number of ticks completed when the copy was taken.
    pub fn tick(&self) -> u64 { self.tick }
    pub fn rows(&self) -> usize { self.rows }
    pub fn columns(&self) -> usize { self.columns }
    pub fn output_scale(&self) -> F { self.output_scale }

    /// Simulation-space positions, row-major.
    pub fn positions(&self) -> &[Vec2<F>] {
        &self.positions
    }

    pub fn position_at(&self, row: usize, column: usize) -> Option<Vec2<F>> {
        let coord = GridCoord::new(row, column);
        if coord.in_bounds(self.rows, self.columns) {
            Some(self.positions[coord.index(self.columns)])
        } else {
            None
        }
    }

    /// Positions in output space.
    pub fn output_positions(&self) -> AllocVec<Vec2<F>> {
        sample_points(&self.positions, self.rows, self.columns, self.output_scale, OutlineSampling::Particles)
    }

    /// Convex outline in output space. May hold fewer than 3 points.
    pub fn outline(&self, sampling: OutlineSampling) -> AllocVec<Vec2<F>> {
        convex_hull(&sample_points(&self.positions, self.rows, self.columns, self.output_scale, sampling))
    }

    /// Convex outline as a closed polygon, or `DegenerateGeometry`.
    pub fn closed_outline(&self, sampling: OutlineSampling) -> Result<AllocVec<Vec2<F>>, ClothError> {
        closed_hull(&sample_points(&self.positions, self.rows, self.columns, self.output_scale, sampling))
    }
}
