//! Fixed-cadence driver: one integration pass plus the relaxation passes.

use crate::config::ClothConfig;
use crate::error::ClothError;
use crate::float::Float;
use crate::grid::ClothGrid;
use crate::hull::{closed_hull, convex_hull};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::outline::{sample_points, OutlineSampling, Snapshot};
use crate::pin::Pin;
use crate::solver::ConstraintSolver;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Lifecycle of a [`Simulation`].
///
/// There is no uninitialized value: construction either builds the full
/// topology or fails.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimulationState {
    /// Topology built, no tick run yet.
    Ready,
    /// At least one tick has run.
    Running,
}

/// A cloth simulation owned by a host.
///
/// The host calls [`tick`](Simulation::tick) once per
/// [`tick_interval`](Simulation::tick_interval). Every tick is exactly one
/// integration pass followed by `relaxation_passes` relaxation passes, in
/// that order. Missed ticks are not buffered. Pin overrides and outline
/// queries happen between ticks and never interleave with one.
///
/// ```
/// use cloth2d::{ClothConfig, Simulation, Pin, Vec2};
///
/// let mut sim: Simulation<f32> = Simulation::new(ClothConfig::new()).unwrap();
/// sim.apply_pins(&[Pin::hold(0, 0, Vec2::new(0.0, 0.0))]).unwrap();
/// for _ in 0..10 {
///     sim.tick();
/// }
/// let outline = sim.compute_outline();
/// assert!(outline.len() >= 3);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    config: ClothConfig<F>,
    grid: ClothGrid<F>,
    solver: ConstraintSolver,
    state: SimulationState,
    ticks: u64,
}

impl<F: Float> Simulation<F> {
    /// Validate `config` and build the particle grid.
    pub fn new(config: ClothConfig<F>) -> Result<Self, ClothError> {
        let grid = ClothGrid::new(&config)?;
        let solver = ConstraintSolver::new(config.relaxation_passes);
        Ok(Simulation {
            config,
            grid,
            solver,
            state: SimulationState::Ready,
            ticks: 0,
        })
    }

    pub fn config(&self) -> &ClothConfig<F> { &self.config }
    pub fn grid(&self) -> &ClothGrid<F> { &self.grid }
    pub fn state(&self) -> SimulationState { self.state }
    pub fn tick_count(&self) -> u64 { self.ticks }
    pub fn tick_interval(&self) -> F { self.config.tick_interval }
    pub fn output_scale(&self) -> F { self.config.output_scale }

    /// Advance one tick.
    pub fn tick(&mut self) {
        self.tick_observed(&mut NoOpStepObserver);
    }

    /// Advance one tick, reporting each phase to `observer`.
    pub fn tick_observed<O: StepObserver>(&mut self, observer: &mut O) {
        self.grid.integrate(self.config.time_step, observer);
        self.solver.solve(&mut self.grid, observer);

        self.ticks += 1;
        self.state = SimulationState::Running;
        observer.on_tick_complete(self.ticks);
    }

    /// Place one particle (simulation space) with zero velocity.
    pub fn set_position(
        &mut self,
        row: usize,
        column: usize,
        pos: Vec2<F>,
        pinned: bool,
    ) -> Result<(), ClothError> {
        self.grid.set_position(row, column, pos, pinned)
    }

    /// Apply a batch of overrides. Nothing changes if any pin is out of bounds.
    pub fn apply_pins(&mut self, pins: &[Pin<F>]) -> Result<(), ClothError> {
        for pin in pins {
            self.grid.index(pin.row, pin.column)?;
        }
        for pin in pins {
            self.grid.set_position(pin.row, pin.column, pin.position, pin.pinned)?;
        }
        Ok(())
    }

    /// Release a particle in place.
    pub fn unpin(&mut self, row: usize, column: usize) -> Result<(), ClothError> {
        self.grid.unpin(row, column)
    }

    /// Replace the acceleration of every particle, e.g. to change gravity.
    pub fn set_acceleration(&mut self, acceleration: Vec2<F>) {
        self.config.acceleration = acceleration;
        self.grid.set_acceleration(acceleration);
    }

    /// Simulation space to output space.
    pub fn to_output_space(&self, v: Vec2<F>) -> Vec2<F> {
        v.scale(self.config.output_scale)
    }

    /// Output space to simulation space, e.g. for a cursor position.
    pub fn to_simulation_space(&self, v: Vec2<F>) -> Vec2<F> {
        v.scale(F::one() / self.config.output_scale)
    }

    /// Particle positions in output space, row-major.
    pub fn output_positions(&self) -> AllocVec<Vec2<F>> {
        self.sample(OutlineSampling::Particles)
    }

    /// Convex outline of the cloth in output space.
    ///
    /// Read-only. The result has fewer than 3 points only when the cloth
    /// has collapsed to a point or a line.
    pub fn compute_outline(&self) -> AllocVec<Vec2<F>> {
        convex_hull(&self.sample(OutlineSampling::Particles))
    }

    /// Convex outline with a chosen sampling, as a closed polygon.
    pub fn outline_polygon(&self, sampling: OutlineSampling) -> Result<AllocVec<Vec2<F>>, ClothError> {
        closed_hull(&self.sample(sampling))
    }

    /// Owned copy of the current positions for another reader.
    pub fn snapshot(&self) -> Snapshot<F> {
        Snapshot::new(
            self.ticks,
            self.grid.rows(),
            self.grid.columns(),
            self.config.output_scale,
            self.grid.positions(),
        )
    }

    fn sample(&self, sampling: OutlineSampling) -> AllocVec<Vec2<F>> {
        let positions = self.grid.positions();
        sample_points(
            &positions,
            self.grid.rows(),
            self.grid.columns(),
            self.config.output_scale,
            sampling,
        )
    }
}
