//! DG solver components.
//!
//! - [`solution`]: modal coefficients with ghost elements, collocation helpers
//! - [`boundary`]: ghost-element fill rules
//! - [`dg`]: residual assembly
//! - [`limiter`]: moment limiting
//! - [`initial`]: named initial conditions and exact solutions

pub mod boundary;
pub mod dg;
pub mod initial;
pub mod limiter;
pub mod solution;

pub use boundary::BoundaryCondition;
pub use dg::DG;
pub use initial::{InitialCondition, RiemannProblem};
pub use limiter::{Limiter, LimiterKind, STOP_TOL, minmod3};
pub use solution::{N_GHOST, Solution};
