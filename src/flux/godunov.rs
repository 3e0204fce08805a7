//! Exact Riemann solver (Godunov flux) for the Euler equations.
//!
//! The star-region pressure solves f_L(p) + f_R(p) + (v_R - v_L) = 0 where
//! f_K is the shock (Rankine-Hugoniot) branch for p > p_K and the
//! rarefaction (isentropic) branch otherwise. Newton iteration starts from
//! the primitive-variable linearised guess. The self-similar solution is
//! then sampled on the interface x/t = 0 and its physical flux returned.

use crate::equations::{ConservationLaw, Euler1D, Primitive};

const PRESSURE_TOL: f64 = 1e-6;
const MAX_ITER: usize = 100;

/// Pressure and velocity between the two nonlinear waves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarState {
    pub p: f64,
    pub v: f64,
    /// Newton iterations used
    pub iterations: usize,
}

/// Pressure function f_K(p) and its derivative for side K.
fn pressure_function(gamma: f64, p: f64, side: &Primitive) -> (f64, f64) {
    if p > side.p {
        let a_k = 2.0 / ((gamma + 1.0) * side.rho);
        let b_k = (gamma - 1.0) / (gamma + 1.0) * side.p;
        let s = (a_k / (p + b_k)).sqrt();
        let f = (p - side.p) * s;
        let df = s * (1.0 - 0.5 * (p - side.p) / (b_k + p));
        (f, df)
    } else {
        let ratio = p / side.p;
        let f = 2.0 * side.a / (gamma - 1.0) * (ratio.powf((gamma - 1.0) / (2.0 * gamma)) - 1.0);
        let df = ratio.powf(-(gamma + 1.0) / (2.0 * gamma)) / (side.rho * side.a);
        (f, df)
    }
}

/// Solve for the star-region pressure and velocity.
pub fn star_region(gamma: f64, l: &Primitive, r: &Primitive) -> StarState {
    let dv = r.v - l.v;

    let pvrs = 0.5 * (l.p + r.p) - 0.125 * dv * (l.rho + r.rho) * (l.a + r.a);
    let mut p = pvrs.max(PRESSURE_TOL);
    let mut iterations = 0;

    for it in 1..=MAX_ITER {
        iterations = it;
        let (f_l, df_l) = pressure_function(gamma, p, l);
        let (f_r, df_r) = pressure_function(gamma, p, r);
        let mut p_new = p - (f_l + f_r + dv) / (df_l + df_r);
        if p_new < 0.0 {
            p_new = PRESSURE_TOL;
        }
        let change = 2.0 * (p_new - p).abs() / (p_new + p);
        p = p_new;
        if change < PRESSURE_TOL {
            break;
        }
    }

    if iterations == MAX_ITER {
        log::warn!("Exact Riemann solver did not converge in {} iterations", MAX_ITER);
    }

    let (f_l, _) = pressure_function(gamma, p, l);
    let (f_r, _) = pressure_function(gamma, p, r);
    StarState {
        p,
        v: 0.5 * (l.v + r.v) + 0.5 * (f_r - f_l),
        iterations,
    }
}

/// Density, velocity and pressure of the Riemann solution at x/t = `s`.
pub fn sample(gamma: f64, star: &StarState, l: &Primitive, r: &Primitive, s: f64) -> (f64, f64, f64) {
    let g1 = (gamma - 1.0) / (2.0 * gamma);
    let g2 = (gamma + 1.0) / (2.0 * gamma);
    let g3 = 2.0 * gamma / (gamma - 1.0);
    let g4 = 2.0 / (gamma - 1.0);
    let g5 = 2.0 / (gamma + 1.0);
    let g6 = (gamma - 1.0) / (gamma + 1.0);
    let g7 = (gamma - 1.0) / 2.0;
    let (pm, um) = (star.p, star.v);

    if s <= um {
        // Left of the contact
        if pm <= l.p {
            // Left rarefaction
            if s <= l.v - l.a {
                return (l.rho, l.v, l.p);
            }
            let tail = um - l.a * (pm / l.p).powf(g1);
            if s > tail {
                return (l.rho * (pm / l.p).powf(1.0 / gamma), um, pm);
            }
            let u = g5 * (l.a + g7 * l.v + s);
            let c = g5 * (l.a + g7 * (l.v - s));
            (l.rho * (c / l.a).powf(g4), u, l.p * (c / l.a).powf(g3))
        } else {
            // Left shock
            let ratio = pm / l.p;
            let shock = l.v - l.a * (g2 * ratio + g1).sqrt();
            if s <= shock {
                (l.rho, l.v, l.p)
            } else {
                (l.rho * (ratio + g6) / (ratio * g6 + 1.0), um, pm)
            }
        }
    } else if pm > r.p {
        // Right shock
        let ratio = pm / r.p;
        let shock = r.v + r.a * (g2 * ratio + g1).sqrt();
        if s >= shock {
            (r.rho, r.v, r.p)
        } else {
            (r.rho * (ratio + g6) / (ratio * g6 + 1.0), um, pm)
        }
    } else {
        // Right rarefaction
        if s >= r.v + r.a {
            return (r.rho, r.v, r.p);
        }
        let tail = um + r.a * (pm / r.p).powf(g1);
        if s <= tail {
            return (r.rho * (pm / r.p).powf(1.0 / gamma), um, pm);
        }
        let u = g5 * (-r.a + g7 * r.v + s);
        let c = g5 * (r.a - g7 * (r.v - s));
        (r.rho * (c / r.a).powf(g4), u, r.p * (c / r.a).powf(g3))
    }
}

/// Godunov flux: physical flux of the exact solution at the interface.
#[inline]
pub fn godunov_flux_euler(law: &Euler1D, q_l: &[f64], q_r: &[f64], out: &mut [f64]) {
    let l = law.primitive(q_l);
    let r = law.primitive(q_r);
    let star = star_region(law.gamma, &l, &r);
    let (rho, v, p) = sample(law.gamma, &star, &l, &r, 0.0);
    law.flux(&law.conserved(rho, v, p), out);
}
