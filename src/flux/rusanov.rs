//! Rusanov (local Lax-Friedrichs) flux.

use crate::equations::{ConservationLaw, MAX_FIELDS};

/// F* = ½ (f(q_L) + f(q_R)) - ½ λ_max (q_R - q_L)
///
/// where λ_max is the larger of the two states' maximum wave speeds. For
/// Euler this is max(|v_L| + a_L, |v_R| + a_R).
#[inline]
pub fn rusanov_flux<L: ConservationLaw>(law: &L, q_l: &[f64], q_r: &[f64], out: &mut [f64]) {
    let n = L::N_VARS;
    let mut f_l = [0.0; MAX_FIELDS];
    let mut f_r = [0.0; MAX_FIELDS];
    law.flux(q_l, &mut f_l[..n]);
    law.flux(q_r, &mut f_r[..n]);

    let lambda = law.max_wave_speed(q_l).max(law.max_wave_speed(q_r));

    for i in 0..n {
        out[i] = 0.5 * (f_l[i] + f_r[i]) - 0.5 * lambda * (q_r[i] - q_l[i]);
    }
}
