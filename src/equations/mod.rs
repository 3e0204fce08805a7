//! Conservation law abstractions.
//!
//! Provides a trait-based interface for 1D hyperbolic conservation laws:
//!
//! ∂q/∂t + ∂f(q)/∂x = 0
//!
//! together with [`PdeSystem`], the runtime selection between the laws the
//! solver ships with.

mod advection;
mod euler;

pub use advection::Advection1D;
pub use euler::{Euler1D, GAMMA_AIR, Primitive, Sensor, SensorThresholds};

use crate::error::{DgError, Result};
use crate::flux::RiemannSolver;
use std::str::FromStr;

/// Largest number of fields carried by any supported law.
pub const MAX_FIELDS: usize = 3;

/// A hyperbolic conservation law in 1D.
///
/// States are passed as slices of length [`ConservationLaw::N_VARS`] in
/// field order; fluxes are written into caller-provided slices so that
/// vectorised sweeps over the mesh do not allocate.
pub trait ConservationLaw: Clone + Send + Sync {
    /// Number of conserved variables.
    ///
    /// - 1 for scalar advection
    /// - 3 for Euler (ρ, ρv, E)
    const N_VARS: usize;

    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Names of the conserved fields, in storage order.
    fn field_names(&self) -> &'static [&'static str];

    /// Physical flux f(q).
    fn flux(&self, q: &[f64], out: &mut [f64]);

    /// Maximum absolute characteristic speed at state `q`.
    fn max_wave_speed(&self, q: &[f64]) -> f64;

    /// Whether `solver` is defined for this law.
    fn supports(&self, solver: RiemannSolver) -> bool;

    /// Numerical flux between left state `q_l` and right state `q_r`.
    fn numerical_flux(&self, solver: RiemannSolver, q_l: &[f64], q_r: &[f64], out: &mut [f64]);

    /// Fields whose sign flips under reflection at a wall.
    fn reflected_fields(&self) -> &'static [usize] {
        &[]
    }
}

/// The PDE systems the solver can be configured with.
#[derive(Clone, Debug)]
pub enum PdeSystem {
    Advection(Advection1D),
    Euler(Euler1D),
}

impl PdeSystem {
    pub fn n_fields(&self) -> usize {
        match self {
            Self::Advection(_) => Advection1D::N_VARS,
            Self::Euler(_) => Euler1D::N_VARS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Advection(law) => law.name(),
            Self::Euler(law) => law.name(),
        }
    }

    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::Advection(law) => law.field_names(),
            Self::Euler(law) => law.field_names(),
        }
    }

    #[inline]
    pub fn flux(&self, q: &[f64], out: &mut [f64]) {
        match self {
            Self::Advection(law) => law.flux(q, out),
            Self::Euler(law) => law.flux(q, out),
        }
    }

    #[inline]
    pub fn max_wave_speed(&self, q: &[f64]) -> f64 {
        match self {
            Self::Advection(law) => law.max_wave_speed(q),
            Self::Euler(law) => law.max_wave_speed(q),
        }
    }

    pub fn supports(&self, solver: RiemannSolver) -> bool {
        match self {
            Self::Advection(law) => law.supports(solver),
            Self::Euler(law) => law.supports(solver),
        }
    }

    #[inline]
    pub fn numerical_flux(&self, solver: RiemannSolver, q_l: &[f64], q_r: &[f64], out: &mut [f64]) {
        match self {
            Self::Advection(law) => law.numerical_flux(solver, q_l, q_r, out),
            Self::Euler(law) => law.numerical_flux(solver, q_l, q_r, out),
        }
    }

    pub fn reflected_fields(&self) -> &'static [usize] {
        match self {
            Self::Advection(law) => law.reflected_fields(),
            Self::Euler(law) => law.reflected_fields(),
        }
    }

    /// Resolve a Riemann solver for this system, failing if it is undefined.
    pub fn check_solver(&self, solver: RiemannSolver) -> Result<RiemannSolver> {
        if self.supports(solver) {
            Ok(solver)
        } else {
            Err(DgError::UnsupportedRiemannSolver {
                solver: solver.name().to_string(),
                system: self.name().to_string(),
            })
        }
    }

    /// Solver used when none is configured.
    pub fn default_solver(&self) -> RiemannSolver {
        match self {
            Self::Advection(_) => RiemannSolver::Upwind,
            Self::Euler(_) => RiemannSolver::Roe,
        }
    }
}

/// Kind of system, as named in an input deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemKind {
    Advection,
    Euler,
}

impl FromStr for SystemKind {
    type Err = DgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "advection" => Ok(Self::Advection),
            "euler" => Ok(Self::Euler),
            other => Err(DgError::UnknownSystem(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_kind_parsing() {
        assert_eq!("Euler".parse::<SystemKind>().unwrap(), SystemKind::Euler);
        assert_eq!(
            "advection".parse::<SystemKind>().unwrap(),
            SystemKind::Advection
        );
        assert!(matches!(
            "mhd".parse::<SystemKind>(),
            Err(DgError::UnknownSystem(_))
        ));
    }

    #[test]
    fn test_solver_support() {
        let euler = PdeSystem::Euler(Euler1D::new(1.4));
        assert!(euler.check_solver(RiemannSolver::Godunov).is_ok());
        assert!(matches!(
            euler.check_solver(RiemannSolver::Upwind),
            Err(DgError::UnsupportedRiemannSolver { .. })
        ));

        let adv = PdeSystem::Advection(Advection1D::new(1.0));
        for solver in RiemannSolver::ALL {
            assert!(adv.check_solver(solver).is_ok());
        }
    }

    #[test]
    fn test_field_counts() {
        assert_eq!(PdeSystem::Advection(Advection1D::new(1.0)).n_fields(), 1);
        assert_eq!(PdeSystem::Euler(Euler1D::default()).n_fields(), 3);
        assert_eq!(PdeSystem::Euler(Euler1D::default()).reflected_fields(), &[1]);
    }
}
