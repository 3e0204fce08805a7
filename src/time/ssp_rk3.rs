//! Strong Stability Preserving Runge-Kutta time integration.
//!
//! SSP-RK3 (Shu-Osher form) keeps the TVD property of the spatial
//! discretization when each stage is a convex combination of forward
//! Euler steps. The limiter runs after every stage.

use crate::error::Result;
use crate::solver::{DG, Limiter, Solution};
use faer::Mat;

/// Stage weights a_k in u = a_k u0 + (1 - a_k)(u + dt L(u)).
const STAGE_WEIGHTS: [f64; 3] = [0.0, 0.75, 1.0 / 3.0];

/// Three-stage SSP Runge-Kutta integrator.
///
/// Owns a copy of the state at the start of the step; the stage states
/// live in the solution itself.
#[derive(Clone, Debug)]
pub struct SspRk3 {
    u0: Mat<f64>,
}

impl SspRk3 {
    pub fn new(solution: &Solution) -> Self {
        let u = solution.modes();
        Self {
            u0: Mat::zeros(u.nrows(), u.ncols()),
        }
    }

    /// Advance `solution` by `dt`.
    ///
    /// u1 = u + dt L(u)
    /// u2 = 3/4 u + 1/4 (u1 + dt L(u1))
    /// u_new = 1/3 u + 2/3 (u2 + dt L(u2))
    pub fn step(
        &mut self,
        solution: &mut Solution,
        dg: &mut DG,
        limiter: &Limiter,
        dt: f64,
    ) -> Result<()> {
        self.u0.copy_from(solution.modes().as_ref());

        for a in STAGE_WEIGHTS {
            let rhs = dg.residual(solution)?;
            let u = solution.modes_mut();
            for c in 0..u.ncols() {
                for m in 0..u.nrows() {
                    let stage = u[(m, c)] + dt * rhs[(m, c)];
                    u[(m, c)] = a * self.u0[(m, c)] + (1.0 - a) * stage;
                }
            }
            limiter.limit(solution);
        }

        Ok(())
    }
}

/// CFL-limited time step: dt = cfl dx / ((2p + 1) max|λ|).
///
/// The (2p + 1) factor accounts for the eigenvalue growth of the DG
/// operator with polynomial order. Returns infinity when nothing moves.
pub fn compute_dt(solution: &Solution, cfl: f64) -> f64 {
    let speed = solution.max_wave_speed();
    if speed < 1e-14 {
        return f64::INFINITY;
    }
    let order = solution.basis().order;
    cfl * solution.mesh().dx / ((2 * order + 1) as f64 * speed)
}
