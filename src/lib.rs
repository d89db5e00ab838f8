//! 2D cloth simulation with a convex-hull outline.
//!
//! `cloth2d` models a piece of cloth as a `rows x columns` grid of Verlet
//! particles linked to their up/down/left/right neighbors by distance
//! constraints. Each tick integrates every particle once and then relaxes
//! the constraints a fixed number of times. For rendering, the particle
//! positions are scaled into output space and wrapped in a convex hull.
//!
//! # Features
//!
//! - **Verlet integration**: Position-based dynamics with implicit velocity
//! - **Constraint relaxation**: Gauss-Seidel passes toward a rest length
//! - **Pinning**: Host-driven overrides that freeze particles in place
//! - **Outline**: Monotone-chain convex hull, counter-clockwise, collinear-free
//! - **Observable**: Monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//! - **`parallel` feature**: Integrate particles on the rayon thread pool

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod topology;
pub mod particle;
pub mod grid;
pub mod solver;
pub mod hull;
pub mod pin;
pub mod outline;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use topology::{GridCoord, Neighbors};
pub use particle::Particle;
pub use grid::ClothGrid;
pub use solver::ConstraintSolver;
pub use hull::{convex_hull, closed_hull};
pub use pin::{Pin, edge_anchors};
pub use outline::{OutlineSampling, Snapshot};
pub use simulation::{Simulation, SimulationState};
pub use config::ClothConfig;
pub use observer::{StepObserver, NoOpStepObserver, CountingObserver};
pub use error::{ClothError, ConfigError};
