//! Configuration types for the cloth simulation.

use crate::error::ConfigError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;

/// Host-supplied configuration for a cloth simulation.
///
/// # Builder Pattern
/// ```
/// use cloth2d::config::ClothConfig;
/// use cloth2d::vec::Vec2;
///
/// let config: ClothConfig<f32> = ClothConfig::new()
///     .with_dimensions(6, 10)
///     .with_acceleration(Vec2::new(0.0, 0.01))
///     .with_relaxation_passes(4)
///     .with_output_scale(20.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClothConfig<F: Float> {
    /// Number of lattice rows. Default: 4.
    pub rows: usize,
    /// Number of lattice columns. Default: 8.
    pub columns: usize,
    /// Wall-clock period between ticks, in seconds. Default: 0.01.
    ///
    /// The simulation never reads a clock; the host uses this to schedule
    /// [`Simulation::tick`](crate::simulation::Simulation::tick).
    pub tick_interval: F,
    /// Integration time step. Default: 1.5.
    pub time_step: F,
    /// Constant external acceleration applied to every particle. Default: (0, 0.005).
    pub acceleration: Vec2<F>,
    /// Target distance of every structural constraint. Default: 1.
    pub rest_length: F,
    /// Factor from simulation space to output (pixel) space. Default: 15.
    pub output_scale: F,
    /// Simulation-space position of particle (0, 0). Default: origin.
    pub origin: Vec2<F>,
    /// Relaxation passes per tick. Default: 2.
    ///
    /// Fewer passes give a more elastic cloth, more passes approach an
    /// inextensible one. Zero disables relaxation entirely.
    pub relaxation_passes: usize,
}

impl<F: Float> ClothConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        ClothConfig {
            rows: 4,
            columns: 8,
            tick_interval: F::from_f32(0.01),
            time_step: F::from_f32(1.5),
            acceleration: Vec2::new(F::zero(), F::from_f32(0.005)),
            rest_length: F::one(),
            output_scale: F::from_f32(15.0),
            origin: Vec2::zero(),
            relaxation_passes: 2,
        }
    }

    /// Set the lattice size.
    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    /// Set the tick interval.
    pub fn with_tick_interval(mut self, tick_interval: F) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Set the integration time step.
    pub fn with_time_step(mut self, time_step: F) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the acceleration vector.
    pub fn with_acceleration(mut self, acceleration: Vec2<F>) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Set only the vertical acceleration, keeping x at zero.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.acceleration = Vec2::new(F::zero(), gravity);
        self
    }

    /// Set the constraint rest length (also the initial lattice spacing).
    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    /// Set the output scale.
    pub fn with_output_scale(mut self, output_scale: F) -> Self {
        self.output_scale = output_scale;
        self
    }

    /// Set the position of particle (0, 0).
    pub fn with_origin(mut self, origin: Vec2<F>) -> Self {
        self.origin = origin;
        self
    }

    /// Set the number of relaxation passes per tick.
    pub fn with_relaxation_passes(mut self, passes: usize) -> Self {
        self.relaxation_passes = passes;
        self
    }

    /// Check every field, failing on the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = self.rows.checked_mul(self.columns);
        let fits = cells
            .and_then(|n| n.checked_mul(core::mem::size_of::<Particle<F>>()))
            .is_some_and(|bytes| bytes <= isize::MAX as usize);
        if self.rows == 0 || self.columns == 0 || !fits {
            return Err(ConfigError::InvalidGridDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if !positive_finite(self.tick_interval) {
            return Err(ConfigError::NonPositiveTickInterval);
        }
        if !positive_finite(self.output_scale) {
            return Err(ConfigError::NonPositiveOutputScale);
        }
        if !positive_finite(self.rest_length) {
            return Err(ConfigError::NonPositiveRestLength);
        }
        if !self.time_step.is_finite() {
            return Err(ConfigError::NonFiniteTimeStep);
        }
        if !self.acceleration.is_finite() {
            return Err(ConfigError::NonFiniteAcceleration);
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::NonFiniteOrigin);
        }
        Ok(())
    }
}

impl<F: Float> Default for ClothConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

fn positive_finite<F: Float>(v: F) -> bool {
    v.is_finite() && v > F::zero()
}
