//! Upwind numerical flux for scalar advection.
//!
//! For du/dt + a du/dx = 0 the interface flux takes the upstream state:
//! F* = a u_L if a > 0 (information flows right)
//! F* = a u_R otherwise

/// Upwind flux at an interface with left state `u_l` and right state `u_r`.
#[inline]
pub fn upwind_flux(u_l: f64, u_r: f64, a: f64) -> f64 {
    if a > 0.0 { a * u_l } else { a * u_r }
}

/// Lax-Friedrichs flux for scalar advection.
///
/// F* = ½ a (u_L + u_R) - ½ |a| (u_R - u_L)
///
/// For a constant velocity this coincides with upwinding; it is kept as a
/// separate entry point so that the scalar and system Rusanov paths share
/// the same algebra.
#[inline]
pub fn lax_friedrichs_flux(u_l: f64, u_r: f64, a: f64) -> f64 {
    0.5 * a * (u_l + u_r) - 0.5 * a.abs() * (u_r - u_l)
}
