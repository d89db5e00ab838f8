//! Error types for cloth construction and outline queries.

use core::fmt;

/// Reasons a [`ClothConfig`](crate::config::ClothConfig) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid needs at least one row and one column.
    InvalidGridDimensions { rows: usize, columns: usize },
    /// Tick interval must be positive and finite.
    NonPositiveTickInterval,
    /// Output scale must be positive and finite.
    NonPositiveOutputScale,
    /// Rest length must be positive and finite.
    NonPositiveRestLength,
    /// Time step must be finite.
    NonFiniteTimeStep,
    /// Acceleration components must be finite.
    NonFiniteAcceleration,
    /// Origin components must be finite.
    NonFiniteOrigin,
}

/// Errors that can occur while building or querying a cloth.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Configuration rejected at construction time.
    InvalidConfiguration(ConfigError),
    /// Grid coordinate does not name a particle.
    ParticleOutOfBounds { row: usize, column: usize, rows: usize, columns: usize },
    /// A closed polygon needs a hull with at least 3 vertices.
    DegenerateGeometry { hull_points: usize },
}

impl From<ConfigError> for ClothError {
    fn from(err: ConfigError) -> Self {
        ClothError::InvalidConfiguration(err)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGridDimensions { rows, columns } => {
                write!(f, "grid must be at least 1x1 (got {}x{})", rows, columns)
            }
            ConfigError::NonPositiveTickInterval => write!(f, "tick interval must be positive"),
            ConfigError::NonPositiveOutputScale => write!(f, "output scale must be positive"),
            ConfigError::NonPositiveRestLength => write!(f, "rest length must be positive"),
            ConfigError::NonFiniteTimeStep => write!(f, "time step must be finite"),
            ConfigError::NonFiniteAcceleration => write!(f, "acceleration must be finite"),
            ConfigError::NonFiniteOrigin => write!(f, "origin must be finite"),
        }
    }
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidConfiguration(err) => write!(f, "invalid configuration: {}", err),
            ClothError::ParticleOutOfBounds { row, column, rows, columns } => {
                write!(
                    f,
                    "particle ({}, {}) out of bounds (grid: {}x{})",
                    row, column, rows, columns
                )
            }
            ClothError::DegenerateGeometry { hull_points } => {
                write!(
                    f,
                    "cannot close a polygon from {} hull points",
                    hull_points
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

impl core::error::Error for ClothError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ClothError::InvalidConfiguration(err) => Some(err),
            _ => None,
        }
    }
}
