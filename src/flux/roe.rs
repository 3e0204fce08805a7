//! Roe approximate Riemann solver for the Euler equations.
//!
//! The jump q_R - q_L is decomposed along the eigenvectors of the flux
//! Jacobian evaluated at the Roe-averaged state:
//!
//! F* = ½ (f(q_L) + f(q_R)) - ½ Σ_k |λ_k| α_k r_k
//!
//! No entropy fix is applied, so transonic rarefactions produce an
//! expansion shock and near-vacuum states may yield NaN.

use crate::equations::{ConservationLaw, Euler1D};

/// Roe flux between conserved states `q_l` and `q_r`.
#[inline]
pub fn roe_flux_euler(law: &Euler1D, q_l: &[f64], q_r: &[f64], out: &mut [f64]) {
    let gamma = law.gamma;
    let l = law.primitive(q_l);
    let r = law.primitive(q_r);

    // Roe averages
    let rt = (r.rho / l.rho).sqrt();
    let rho = rt * l.rho;
    let v = (l.v + rt * r.v) / (1.0 + rt);
    let h = (l.h + rt * r.h) / (1.0 + rt);
    let a = ((gamma - 1.0) * (h - 0.5 * v * v)).sqrt();

    // Wave strengths
    let drho = r.rho - l.rho;
    let dv = r.v - l.v;
    let dp = r.p - l.p;
    let a2 = a * a;
    let alpha = [
        (dp - rho * a * dv) / (2.0 * a2),
        drho - dp / a2,
        (dp + rho * a * dv) / (2.0 * a2),
    ];

    let lambda = [(v - a).abs(), v.abs(), (v + a).abs()];
    let eigvec = [
        [1.0, v - a, h - v * a],
        [1.0, v, 0.5 * v * v],
        [1.0, v + a, h + v * a],
    ];

    let mut f_l = [0.0; 3];
    let mut f_r = [0.0; 3];
    law.flux(q_l, &mut f_l);
    law.flux(q_r, &mut f_r);

    for i in 0..3 {
        let dissipation: f64 = (0..3).map(|k| lambda[k] * alpha[k] * eigvec[k][i]).sum();
        out[i] = 0.5 * (f_l[i] + f_r[i]) - 0.5 * dissipation;
    }
}
