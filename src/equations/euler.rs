//! Compressible Euler equations for an ideal gas.
//!
//! Conserved state q = (ρ, ρv, E) with pressure closing the system through
//! p = (γ-1)(E - ½ρv²).

use super::ConservationLaw;
use crate::flux::{RiemannSolver, godunov_flux_euler, roe_flux_euler, rusanov_flux};

/// Default ratio of specific heats (diatomic gas).
pub const GAMMA_AIR: f64 = 1.4;

/// 1D Euler equations with a fixed ratio of specific heats.
///
/// γ is carried by value so that independent solvers never share it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Euler1D {
    pub gamma: f64,
}

/// Primitive variables derived from a conserved state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Primitive {
    pub rho: f64,
    pub v: f64,
    pub p: f64,
    /// Sound speed √(γp/ρ)
    pub a: f64,
    /// Total specific enthalpy (E+p)/ρ
    pub h: f64,
}

impl Euler1D {
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    #[inline]
    pub fn pressure(&self, q: &[f64]) -> f64 {
        let v = q[1] / q[0];
        (self.gamma - 1.0) * (q[2] - 0.5 * q[0] * v * v)
    }

    #[inline]
    pub fn sound_speed(&self, rho: f64, p: f64) -> f64 {
        (self.gamma * p / rho).sqrt()
    }

    /// Primitive variables; no clamping, vacuum states yield NaN.
    #[inline]
    pub fn primitive(&self, q: &[f64]) -> Primitive {
        let rho = q[0];
        let v = q[1] / rho;
        let p = self.pressure(q);
        Primitive {
            rho,
            v,
            p,
            a: self.sound_speed(rho, p),
            h: (q[2] + p) / rho,
        }
    }

    /// Conserved state from density, velocity and pressure.
    pub fn conserved(&self, rho: f64, v: f64, p: f64) -> [f64; 3] {
        [rho, rho * v, p / (self.gamma - 1.0) + 0.5 * rho * v * v]
    }

    /// Discontinuity sensors per element from the cell means.
    ///
    /// `means` holds the mode-0 coefficients of every element (ghosts
    /// included) with three fields per element. Each interface is examined
    /// with Roe-averaged quantities and indicators mapped through the
    /// saturating function 2x/(1+x)². Both elements touching a flagged
    /// interface are marked; shocks take precedence over contacts.
    pub fn sensing(&self, thresholds: SensorThresholds, means: &[f64]) -> Vec<Sensor> {
        let n_elements = means.len() / Self::N_VARS;
        let mut sensors = vec![Sensor::Smooth; n_elements];
        if n_elements < 2 {
            return sensors;
        }

        let saturate = |x: f64| 2.0 * x / ((1.0 + x) * (1.0 + x));
        let mut shocks = Vec::new();

        for i in 0..n_elements - 1 {
            let l = self.primitive(&means[i * 3..i * 3 + 3]);
            let r = self.primitive(&means[(i + 1) * 3..(i + 1) * 3 + 3]);

            let rt = (r.rho / l.rho).sqrt();
            let v = (l.v + rt * r.v) / (1.0 + rt);
            let h = (l.h + rt * r.h) / (1.0 + rt);
            let a = ((self.gamma - 1.0) * (h - 0.5 * v * v)).sqrt();

            let drho = r.rho - l.rho;
            let dp = r.p - l.p;

            let xsi = (drho - dp / (a * a)).abs() / (l.rho + r.rho);
            if saturate(xsi) > thresholds.contact {
                sensors[i] = Sensor::Contact;
                sensors[i + 1] = Sensor::Contact;
            }

            let phi = dp.abs() / (l.p + r.p);
            let compressive = l.v - l.a > v - a && v - a > r.v - r.a;
            if saturate(phi) > thresholds.shock && compressive {
                shocks.push(i);
            }
        }

        for i in shocks {
            sensors[i] = Sensor::Shock;
            sensors[i + 1] = Sensor::Shock;
        }

        sensors
    }
}

impl Default for Euler1D {
    fn default() -> Self {
        Self::new(GAMMA_AIR)
    }
}

impl ConservationLaw for Euler1D {
    const N_VARS: usize = 3;

    fn name(&self) -> &'static str {
        "euler"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["rho", "rho*v", "E"]
    }

    #[inline]
    fn flux(&self, q: &[f64], out: &mut [f64]) {
        let v = q[1] / q[0];
        let p = self.pressure(q);
        out[0] = q[1];
        out[1] = q[1] * v + p;
        out[2] = (q[2] + p) * v;
    }

    #[inline]
    fn max_wave_speed(&self, q: &[f64]) -> f64 {
        let w = self.primitive(q);
        w.v.abs() + w.a
    }

    fn supports(&self, solver: RiemannSolver) -> bool {
        !matches!(solver, RiemannSolver::Upwind)
    }

    #[inline]
    fn numerical_flux(&self, solver: RiemannSolver, q_l: &[f64], q_r: &[f64], out: &mut [f64]) {
        match solver {
            RiemannSolver::Rusanov => rusanov_flux(self, q_l, q_r, out),
            RiemannSolver::Roe => roe_flux_euler(self, q_l, q_r, out),
            RiemannSolver::Godunov => godunov_flux_euler(self, q_l, q_r, out),
            // Rejected at configuration time; fall back to the most robust flux
            RiemannSolver::Upwind => rusanov_flux(self, q_l, q_r, out),
        }
    }

    fn reflected_fields(&self) -> &'static [usize] {
        &[1]
    }
}

/// Per-element sensor flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Sensor {
    #[default]
    Smooth,
    Contact,
    Shock,
}

impl Sensor {
    /// Integer code: 0 smooth, 1 contact, 2 shock.
    pub fn code(&self) -> u8 {
        match self {
            Self::Smooth => 0,
            Self::Contact => 1,
            Self::Shock => 2,
        }
    }
}

/// Thresholds applied to the saturated contact and shock indicators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorThresholds {
    pub contact: f64,
    pub shock: f64,
}

impl Default for SensorThresholds {
    fn default() -> Self {
        Self {
            contact: 0.01,
            shock: 0.01,
        }
    }
}
