//! Step observer trait for monitoring simulation progress.

use crate::topology::GridCoord;

/// Trait for observing cloth ticks.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each relaxation pass over the grid.
    fn on_relaxation_pass(&mut self, _pass: usize) {}

    /// Called when a constraint is skipped because its endpoints coincide.
    fn on_degenerate_constraint(&mut self, _a: GridCoord, _b: GridCoord) {}

    /// Called when a tick is fully complete. `tick` counts from 1.
    fn on_tick_complete(&mut self, _tick: u64) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that tallies events. Handy in tests and debug overlays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountingObserver {
    pub integrations: usize,
    pub relaxation_passes: usize,
    pub degenerate_constraints: usize,
    pub ticks: usize,
}

impl StepObserver for CountingObserver {
    fn on_integrate(&mut self) {
        self.integrations += 1;
    }

    fn on_relaxation_pass(&mut self, _pass: usize) {
        self.relaxation_passes += 1;
    }

    fn on_degenerate_constraint(&mut self, _a: GridCoord, _b: GridCoord) {
        self.degenerate_constraints += 1;
    }

    fn on_tick_complete(&mut self, _tick: u64) {
        self.ticks += 1;
    }
}
