//! Hierarchical minmod limiting of modal coefficients.
//!
//! The Biswas-Devine-Flaherty limiter compares each mode with the scaled
//! forward and backward differences of the next lower mode:
//!
//! ũ_k = minmod(u_k, (u_{k-1}^{e+1} - u_{k-1}^e)/(2k-1), (u_{k-1}^e - u_{k-1}^{e-1})/(2k-1))
//!
//! Limiting starts at the highest mode and stops, per element and field, at
//! the first mode the minmod leaves unchanged; all lower modes are then kept
//! as they are. The cell mean is never modified.
//!
//! # References
//! - Biswas, Devine & Flaherty (1994), "Parallel, adaptive finite element
//!   methods for conservation laws"

use super::solution::Solution;
use crate::basis::Basis;
use faer::Mat;
use std::fmt;

/// Difference below which a limited mode counts as unchanged.
pub const STOP_TOL: f64 = 1e-14;

/// Minmod of three arguments.
///
/// Returns the smallest value if all three are positive, the largest if all
/// three are negative, and 0 otherwise.
#[inline]
pub fn minmod3(a: f64, b: f64, c: f64) -> f64 {
    if a > 0.0 && b > 0.0 && c > 0.0 {
        a.min(b).min(c)
    } else if a < 0.0 && b < 0.0 && c < 0.0 {
        a.max(b).max(c)
    } else {
        0.0
    }
}

/// Limiting strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LimiterKind {
    /// No limiting
    #[default]
    None,
    /// Hierarchical minmod on every element
    FullBiswas,
    /// Sensor-driven hierarchical reconstruction; accepted but not yet
    /// implemented, behaves as [`LimiterKind::None`]
    AdaptiveHr,
}

impl LimiterKind {
    /// Resolve a limiter name.
    ///
    /// Unrecognised names fall back to no limiting with a warning.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "0" | "off" => Self::None,
            "full_biswas" | "biswas" => Self::FullBiswas,
            "adaptive_hr" => Self::AdaptiveHr,
            other => {
                log::warn!("Unknown limiter '{}'; no limiting will be applied", other);
                Self::None
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FullBiswas => "full_biswas",
            Self::AdaptiveHr => "adaptive_hr",
        }
    }
}

impl fmt::Display for LimiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Limiter configured for one basis order.
#[derive(Clone, Debug)]
pub struct Limiter {
    kind: LimiterKind,
    /// c[k] = 1/(2k+1), k = 0..p-1
    c: Vec<f64>,
}

impl Limiter {
    pub fn new(kind: LimiterKind, basis: &Basis) -> Self {
        let c = (0..basis.order).map(|k| 1.0 / (2 * k + 1) as f64).collect();

        match kind {
            LimiterKind::AdaptiveHr => {
                log::warn!("Limiter 'adaptive_hr' is not implemented; no limiting will be applied")
            }
            _ => log::info!("Limiter: {}", kind),
        }

        Self { kind, c }
    }

    pub fn from_name(name: &str, basis: &Basis) -> Self {
        Self::new(LimiterKind::from_name(name), basis)
    }

    pub fn kind(&self) -> LimiterKind {
        self.kind
    }

    /// Normalisation coefficients 1/(2k+1).
    pub fn coefficients(&self) -> &[f64] {
        &self.c
    }

    /// Limit `solution` in place.
    pub fn limit(&self, solution: &mut Solution) {
        match self.kind {
            LimiterKind::None | LimiterKind::AdaptiveHr => {}
            LimiterKind::FullBiswas => self.full_biswas(solution),
        }
    }

    fn full_biswas(&self, solution: &mut Solution) {
        let p = self.c.len();
        if p == 0 {
            return;
        }

        // Ghost neighbours must reflect the current interior state
        solution.apply_bc();

        let n_f = solution.n_fields();
        let elements = solution.interior_elements();
        let first_col = solution.column(elements.start, 0);
        let n_cols = elements.len() * n_f;

        // Every candidate is built from the unlimited state
        let mut candidates = Mat::<f64>::zeros(p, n_cols);
        {
            let u = solution.modes();
            for j in 0..n_cols {
                let col = first_col + j;
                for k in 0..p {
                    let deltam = (u[(k, col)] - u[(k, col - n_f)]) * self.c[k];
                    let deltap = (u[(k, col + n_f)] - u[(k, col)]) * self.c[k];
                    candidates[(k, j)] = minmod3(deltam, deltap, u[(k + 1, col)]);
                }
            }
        }

        let u = solution.modes_mut();
        for j in 0..n_cols {
            let col = first_col + j;
            let mut stop = false;
            for k in (1..=p).rev() {
                let limited = candidates[(k - 1, j)];
                if stop || (u[(k, col)] - limited).abs() < STOP_TOL {
                    stop = true;
                } else {
                    u[(k, col)] = limited;
                }
            }
        }
    }
}
