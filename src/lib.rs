//! # dg1d
//!
//! A modal Discontinuous Galerkin solver for one-dimensional hyperbolic
//! conservation laws.
//!
//! This crate provides:
//! - Legendre polynomials and Gauss-Legendre quadrature
//! - A modal basis with face, derivative and inverse mass data
//! - Linear advection and the compressible Euler equations with
//!   upwind, Rusanov, Roe and exact (Godunov) Riemann solvers
//! - Interface enhancement from neighbouring modes
//! - Moment limiting (Biswas-Devine-Flaherty)
//! - DG residual assembly with ghost-element boundary conditions
//! - SSP-RK3 time integration and a JSON-configured simulation runner

pub mod basis;
pub mod config;
pub mod enhance;
pub mod equations;
pub mod error;
pub mod flux;
pub mod mesh;
pub mod polynomial;
pub mod simulation;
pub mod solver;
pub mod time;

// Re-export main types for convenience
pub use basis::Basis;
pub use config::DeckConfig;
pub use enhance::{EnhancementSpec, Enhancer};
pub use equations::{Advection1D, ConservationLaw, Euler1D, PdeSystem, Sensor, SensorThresholds};
pub use error::{DgError, Result};
pub use flux::RiemannSolver;
pub use mesh::Mesh1D;
pub use simulation::{Simulation, SimulationConfig, SimulationResult};
pub use solver::{
    BoundaryCondition, DG, InitialCondition, Limiter, LimiterKind, RiemannProblem, Solution,
};
pub use time::{SspRk3, compute_dt};
