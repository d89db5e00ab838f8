//! Iterative distance-constraint relaxation over a cloth grid.

use crate::float::Float;
use crate::grid::ClothGrid;
use crate::observer::StepObserver;

/// Relaxes every structural link toward its rest length.
///
/// Passes run Gauss-Seidel style: particles are visited in row-major order
/// and each correction sees the positions already updated earlier in the
/// same pass. Traversal order shifts intermediate results but not the
/// configuration the cloth converges to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConstraintSolver {
    passes: usize,
}

impl ConstraintSolver {
    pub fn new(passes: usize) -> Self {
        ConstraintSolver { passes }
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Run the configured number of passes.
    pub fn solve<F: Float, O: StepObserver>(&self, grid: &mut ClothGrid<F>, observer: &mut O) {
        for pass in 0..self.passes {
            Self::relax_pass(grid, observer);
            observer.on_relaxation_pass(pass);
        }
    }

    /// A single pass over every particle.
    ///
    /// Pinned particles are re-frozen in place and never receive a
    /// correction, even from a free neighbor. A free particle `p` and each
    /// neighbor `q` are pulled toward each other by half the length error:
    ///
    /// ```text
    /// delta  = q - p
    /// offset = delta * 0.5 * (|delta| - rest) / |delta|
    /// p += offset, q -= offset
    /// ```
    ///
    /// A link whose endpoints coincide has no direction; it is skipped for
    /// this pass and reported to the observer.
    pub fn relax_pass<F: Float, O: StepObserver>(grid: &mut ClothGrid<F>, observer: &mut O) {
        let eps = F::from_f32(1e-10);
        let particles = grid.particles_mut();

        for i in 0..particles.len() {
            if particles[i].pinned {
                particles[i].freeze();
                continue;
            }
            let neighbors = *particles[i].neighbors();
            let rest = particles[i].rest_length;

            for j in neighbors.iter() {
                let delta = particles[j].pos - particles[i].pos;
                let dist = delta.length();
                if dist.is_near_zero(eps) {
                    observer.on_degenerate_constraint(particles[i].coord(), particles[j].coord());
                    continue;
                }

                let correction = (dist - rest) / dist;
                let offset = delta.scale(F::half() * correction);

                particles[i].pos = particles[i].pos + offset;
                if !particles[j].pinned {
                    particles[j].pos = particles[j].pos - offset;
                }
            }
        }
    }
}

impl Default for ConstraintSolver {
    fn default() -> Self {
        Self::new(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClothConfig;
    use crate::observer::{CountingObserver, NoOpStepObserver};
    use crate::vec::Vec2;
    use approx::assert_relative_eq;

    fn assert_near(actual: Vec2<f64>, expected: Vec2<f64>) {
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
    }

    fn two_by_two() -> ClothGrid<f64> {
        ClothGrid::new(&ClothConfig::new().with_dimensions(2, 2)).unwrap()
    }

    #[test]
    fn satisfied_grid_is_unchanged() {
        let mut grid = two_by_two();
        let before = grid.positions();
        ConstraintSolver::relax_pass(&mut grid, &mut NoOpStepObserver);
        assert_eq!(grid.positions(), before);
    }

    #[test]
    fn stretched_pair_moves_symmetrically() {
        let mut grid: ClothGrid<f64> =
            ClothGrid::new(&ClothConfig::new().with_dimensions(1, 2)).unwrap();
        grid.set_position(0, 1, Vec2::new(0.0, 3.0), false).unwrap();
        ConstraintSolver::relax_pass(&mut grid, &mut NoOpStepObserver);
        // Length 3, rest 1: each end moves 1 toward the other.
        assert_near(grid.position_at(0, 0).unwrap(), Vec2::new(0.0, 1.0));
        assert_near(grid.position_at(0, 1).unwrap(), Vec2::new(0.0, 2.0));
    }

    #[test]
    fn pinned_neighbor_is_not_dragged() {
        let mut grid: ClothGrid<f64> =
            ClothGrid::new(&ClothConfig::new().with_dimensions(1, 2)).unwrap();
        grid.set_position(0, 1, Vec2::new(0.0, 3.0), true).unwrap();
        ConstraintSolver::relax_pass(&mut grid, &mut NoOpStepObserver);
        assert_eq!(grid.position_at(0, 1).unwrap(), Vec2::new(0.0, 3.0));
        assert_near(grid.position_at(0, 0).unwrap(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn coincident_endpoints_are_skipped() {
        let mut grid: ClothGrid<f64> =
            ClothGrid::new(&ClothConfig::new().with_dimensions(1, 2)).unwrap();
        grid.set_position(0, 1, Vec2::new(0.0, 0.0), false).unwrap();
        let mut observer = CountingObserver::default();
        ConstraintSolver::relax_pass(&mut grid, &mut observer);
        assert_eq!(grid.position_at(0, 0).unwrap(), Vec2::zero());
        assert_eq!(grid.position_at(0, 1).unwrap(), Vec2::zero());
        // Visited once from each side.
        assert_eq!(observer.degenerate_constraints, 2);
        assert!(grid.positions().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn solve_reports_each_pass() {
        let mut grid = two_by_two();
        let mut observer = CountingObserver::default();
        ConstraintSolver::new(3).solve(&mut grid, &mut observer);
        assert_eq!(observer.relaxation_passes, 3);
    }
}
