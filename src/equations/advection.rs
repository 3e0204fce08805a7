//! Scalar advection equation.
//!
//! ∂u/∂t + a ∂u/∂x = 0
//!
//! where a is the constant advection velocity.

use super::ConservationLaw;
use crate::flux::{RiemannSolver, lax_friedrichs_flux, upwind_flux};

/// 1D linear advection.
#[derive(Clone, Debug)]
pub struct Advection1D {
    /// Advection velocity (positive = rightward)
    pub velocity: f64,
}

impl Advection1D {
    pub fn new(velocity: f64) -> Self {
        Self { velocity }
    }
}

impl Default for Advection1D {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ConservationLaw for Advection1D {
    const N_VARS: usize = 1;

    fn name(&self) -> &'static str {
        "advection"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["u"]
    }

    #[inline]
    fn flux(&self, q: &[f64], out: &mut [f64]) {
        out[0] = self.velocity * q[0];
    }

    fn max_wave_speed(&self, _q: &[f64]) -> f64 {
        self.velocity.abs()
    }

    fn supports(&self, _solver: RiemannSolver) -> bool {
        true
    }

    /// For a linear flux the exact and the Roe solution of the Riemann
    /// problem are both the upwind state, so only Rusanov differs.
    #[inline]
    fn numerical_flux(&self, solver: RiemannSolver, q_l: &[f64], q_r: &[f64], out: &mut [f64]) {
        out[0] = match solver {
            RiemannSolver::Rusanov => lax_friedrichs_flux(q_l[0], q_r[0], self.velocity),
            RiemannSolver::Upwind | RiemannSolver::Roe | RiemannSolver::Godunov => {
                upwind_flux(q_l[0], q_r[0], self.velocity)
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advection_flux() {
        let mut out = [0.0];
        Advection1D::new(2.0).flux(&[3.0], &mut out);
        assert!((out[0] - 6.0).abs() < 1e-14);

        Advection1D::new(-1.5).flux(&[2.0], &mut out);
        assert!((out[0] + 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_advection_wave_speed() {
        assert_eq!(Advection1D::new(2.0).max_wave_speed(&[1.0]), 2.0);
        assert_eq!(Advection1D::new(-3.0).max_wave_speed(&[1.0]), 3.0);
    }

    #[test]
    fn test_exact_solvers_reduce_to_upwind() {
        let adv = Advection1D::new(-0.5);
        let mut upw = [0.0];
        adv.numerical_flux(RiemannSolver::Upwind, &[1.0], &[4.0], &mut upw);
        assert!((upw[0] + 2.0).abs() < 1e-14);
        for solver in [RiemannSolver::Roe, RiemannSolver::Godunov] {
            let mut out = [0.0];
            adv.numerical_flux(solver, &[1.0], &[4.0], &mut out);
            assert_eq!(out[0], upw[0]);
        }
    }

    #[test]
    fn test_consistency() {
        let adv = Advection1D::new(1.3);
        let mut f = [0.0];
        adv.flux(&[0.7], &mut f);
        for solver in RiemannSolver::ALL {
            let mut out = [0.0];
            adv.numerical_flux(solver, &[0.7], &[0.7], &mut out);
            assert!((out[0] - f[0]).abs() < 1e-15);
        }
    }
}
