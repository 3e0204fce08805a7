//! Initial conditions and their exact solutions.
//!
//! Advection problems are pure translations of the initial profile. The
//! Euler Riemann problems follow Toro's standard test suite and carry the
//! exact solution through the exact Riemann solver.

use super::boundary::BoundaryCondition;
use crate::equations::{Euler1D, MAX_FIELDS, SystemKind};
use crate::error::{DgError, Result};
use crate::flux::{sample, star_region};
use std::f64::consts::PI;
use std::str::FromStr;

/// Left and right primitive states (ρ, v, p) separated at `x0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RiemannProblem {
    pub left: [f64; 3],
    pub right: [f64; 3],
    pub x0: f64,
    /// Customary end time for the test
    pub final_time: f64,
}

impl RiemannProblem {
    /// Sod's shock tube.
    pub const SOD: Self = Self {
        left: [1.0, 0.0, 1.0],
        right: [0.125, 0.0, 0.1],
        x0: 0.5,
        final_time: 0.2,
    };

    /// Sod's problem with a left inflow velocity (sonic rarefaction).
    pub const SOD_MODIFIED: Self = Self {
        left: [1.0, 0.75, 1.0],
        right: [0.125, 0.0, 0.1],
        x0: 0.3,
        final_time: 0.2,
    };

    /// Two symmetric rarefactions leaving a near-vacuum.
    pub const DOUBLE_RAREFACTION: Self = Self {
        left: [1.0, -2.0, 0.4],
        right: [1.0, 2.0, 0.4],
        x0: 0.5,
        final_time: 0.15,
    };

    /// Left half of the Woodward-Colella blast wave.
    pub const BLAST_WAVE: Self = Self {
        left: [1.0, 0.0, 1000.0],
        right: [1.0, 0.0, 0.01],
        x0: 0.5,
        final_time: 0.012,
    };

    /// Collision of two strong shocks.
    pub const STRONG_SHOCKS: Self = Self {
        left: [5.99924, 19.5975, 460.894],
        right: [5.99242, -6.19633, 46.0950],
        x0: 0.4,
        final_time: 0.035,
    };

    /// Isolated stationary contact.
    pub const STATIONARY_CONTACT: Self = Self {
        left: [1.4, 0.0, 1.0],
        right: [1.0, 0.0, 1.0],
        x0: 0.5,
        final_time: 2.0,
    };

    /// Primitive state (ρ, v, p) of the exact solution at (x, t).
    pub fn exact_primitive(&self, law: &Euler1D, x: f64, t: f64) -> [f64; 3] {
        if t <= 0.0 {
            return if x < self.x0 { self.left } else { self.right };
        }
        let l = law.primitive(&law.conserved(self.left[0], self.left[1], self.left[2]));
        let r = law.primitive(&law.conserved(self.right[0], self.right[1], self.right[2]));
        let star = star_region(law.gamma, &l, &r);
        let (rho, v, p) = sample(law.gamma, &star, &l, &r, (x - self.x0) / t);
        [rho, v, p]
    }
}

/// Named initial condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InitialCondition {
    /// u = sin(2πx) on [-1, 1]
    Sinewave,
    /// u = 1 on |x| < 1/3, 0 elsewhere, on [-1, 1]
    Tophat,
    /// ρ = 1 + 0.2 sin(πx), v = 1, p = 1 on [-1, 1]
    EntropyWave,
    /// Euler shock tube on [0, 1]
    Riemann(RiemannProblem),
}

impl InitialCondition {
    pub fn system(&self) -> SystemKind {
        match self {
            Self::Sinewave | Self::Tophat => SystemKind::Advection,
            Self::EntropyWave | Self::Riemann(_) => SystemKind::Euler,
        }
    }

    pub fn default_domain(&self) -> (f64, f64) {
        match self {
            Self::Riemann(_) => (0.0, 1.0),
            _ => (-1.0, 1.0),
        }
    }

    pub fn default_boundary(&self) -> BoundaryCondition {
        match self {
            Self::Riemann(_) => BoundaryCondition::Transmissive,
            _ => BoundaryCondition::Periodic,
        }
    }

    /// Customary final time: one period for the periodic problems.
    pub fn default_final_time(&self) -> f64 {
        match self {
            Self::Riemann(rp) => rp.final_time,
            _ => 2.0,
        }
    }

    /// Conserved state at x, t = 0.
    pub fn evaluate(&self, euler: &Euler1D, x: f64) -> [f64; MAX_FIELDS] {
        match self {
            Self::Sinewave => [(2.0 * PI * x).sin(), 0.0, 0.0],
            Self::Tophat => [if x.abs() < 1.0 / 3.0 { 1.0 } else { 0.0 }, 0.0, 0.0],
            Self::EntropyWave => euler.conserved(1.0 + 0.2 * (PI * x).sin(), 1.0, 1.0),
            Self::Riemann(rp) => {
                let [rho, v, p] = if x < rp.x0 { rp.left } else { rp.right };
                euler.conserved(rho, v, p)
            }
        }
    }

    /// Exact conserved state at (x, t).
    ///
    /// Periodic problems wrap the characteristic foot back into
    /// [x_min, x_max); `velocity` is the transport speed.
    pub fn exact(&self, euler: &Euler1D, velocity: f64, x: f64, t: f64) -> [f64; MAX_FIELDS] {
        match self {
            Self::Sinewave | Self::Tophat => {
                self.evaluate(euler, self.wrap(x - velocity * t))
            }
            Self::EntropyWave => self.evaluate(euler, self.wrap(x - t)),
            Self::Riemann(rp) => {
                let [rho, v, p] = rp.exact_primitive(euler, x, t);
                euler.conserved(rho, v, p)
            }
        }
    }

    fn wrap(&self, x: f64) -> f64 {
        let (a, b) = self.default_domain();
        a + (x - a).rem_euclid(b - a)
    }
}

impl FromStr for InitialCondition {
    type Err = DgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sinewave" => Ok(Self::Sinewave),
            "tophat" => Ok(Self::Tophat),
            "entropywave" | "entropy_wave" => Ok(Self::EntropyWave),
            "sodtube" | "sod" => Ok(Self::Riemann(RiemannProblem::SOD)),
            "sodtube_modified" => Ok(Self::Riemann(RiemannProblem::SOD_MODIFIED)),
            "123_problem" | "123" => Ok(Self::Riemann(RiemannProblem::DOUBLE_RAREFACTION)),
            "blast_wave" => Ok(Self::Riemann(RiemannProblem::BLAST_WAVE)),
            "strong_shocks" => Ok(Self::Riemann(RiemannProblem::STRONG_SHOCKS)),
            "stationary_contact" => Ok(Self::Riemann(RiemannProblem::STATIONARY_CONTACT)),
            other => Err(DgError::UnknownInitialCondition(other.to_string())),
        }
    }
}
