//! Numerical flux functions.
//!
//! Provides the interface fluxes used by the DG residual:
//! - Scalar fluxes: upwind, Lax-Friedrichs
//! - Rusanov (local Lax-Friedrichs) for any conservation law
//! - Roe and exact Godunov solvers for the Euler equations
//!
//! The solver is chosen once at configuration time through
//! [`RiemannSolver`]; the vectorised helpers below sweep a whole mesh.

mod godunov;
mod roe;
mod rusanov;
mod upwind;

pub use godunov::{StarState, godunov_flux_euler, sample, star_region};
pub use roe::roe_flux_euler;
pub use rusanov::rusanov_flux;
pub use upwind::{lax_friedrichs_flux, upwind_flux};

use crate::equations::{MAX_FIELDS, PdeSystem};
use crate::error::{DgError, Result};
use faer::Mat;
use std::fmt;
use std::str::FromStr;

/// Interface flux selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RiemannSolver {
    /// Upwind flux (linear advection only)
    Upwind,
    /// Local Lax-Friedrichs: simple, robust, most diffusive
    #[default]
    Rusanov,
    /// Roe linearisation without entropy fix
    Roe,
    /// Exact Riemann solution sampled at the interface
    Godunov,
}

impl RiemannSolver {
    pub const ALL: [RiemannSolver; 4] = [
        RiemannSolver::Upwind,
        RiemannSolver::Rusanov,
        RiemannSolver::Roe,
        RiemannSolver::Godunov,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RiemannSolver::Upwind => "upwind",
            RiemannSolver::Rusanov => "rusanov",
            RiemannSolver::Roe => "roe",
            RiemannSolver::Godunov => "godunov",
        }
    }
}

impl FromStr for RiemannSolver {
    type Err = DgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "upw" | "upwind" => Ok(Self::Upwind),
            "rus" | "rusanov" | "llf" => Ok(Self::Rusanov),
            "roe" => Ok(Self::Roe),
            "godunov" | "exact" => Ok(Self::Godunov),
            other => Err(DgError::UnknownRiemannSolver(other.to_string())),
        }
    }
}

impl fmt::Display for RiemannSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical flux at every quadrature node.
///
/// Columns of `ug` and `out` are laid out as `element * n_f + field`.
pub fn interior_flux(system: &PdeSystem, ug: &Mat<f64>, out: &mut Mat<f64>) {
    let n_f = system.n_fields();
    let mut q = [0.0; MAX_FIELDS];
    let mut f = [0.0; MAX_FIELDS];

    for g in 0..ug.nrows() {
        for base in (0..ug.ncols()).step_by(n_f) {
            for k in 0..n_f {
                q[k] = ug[(g, base + k)];
            }
            system.flux(&q[..n_f], &mut f[..n_f]);
            for k in 0..n_f {
                out[(g, base + k)] = f[k];
            }
        }
    }
}

/// Numerical flux at every interface.
///
/// `q_l` and `q_r` hold the states on either side of each interface,
/// `n_f` values per interface, and `out` receives the flux in the same
/// layout.
pub fn riemann(
    system: &PdeSystem,
    solver: RiemannSolver,
    q_l: &[f64],
    q_r: &[f64],
    out: &mut [f64],
) {
    let n_f = system.n_fields();
    for ((l, r), o) in q_l
        .chunks_exact(n_f)
        .zip(q_r.chunks_exact(n_f))
        .zip(out.chunks_exact_mut(n_f))
    {
        system.numerical_flux(solver, l, r, o);
    }
}

/// Largest characteristic speed over a row of element states.
///
/// A NaN speed (e.g. from a negative pressure) is returned as NaN.
pub fn max_wave_speed(system: &PdeSystem, states: &[f64]) -> f64 {
    let mut max = 0.0_f64;
    for q in states.chunks_exact(system.n_fields()) {
        let s = system.max_wave_speed(q);
        if s.is_nan() {
            return f64::NAN;
        }
        max = max.max(s);
    }
    max
}
