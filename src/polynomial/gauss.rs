//! Gauss-Legendre quadrature.
//!
//! The n-point rule uses the roots of P_n as nodes and integrates
//! polynomials of degree 2n - 1 exactly on [-1, 1]. None of the nodes
//! coincide with the endpoints, so face values are always evaluated
//! separately from the interior quadrature.

use super::legendre::{legendre, legendre_and_derivative};
use std::f64::consts::PI;

const NEWTON_TOL: f64 = 1e-15;
const NEWTON_MAX_ITER: usize = 100;

/// Nodes (ascending) and weights of the n-point Gauss-Legendre rule.
///
/// Roots are refined by Newton iteration from the asymptotic guess
/// x_i ≈ -cos(π (i + 3/4) / (n + 1/2)); the weights follow from
/// w_i = 2 / ((1 - x_i²) P'_n(x_i)²).
pub fn gauss_legendre(n: usize) -> (Vec<f64>, Vec<f64>) {
    if n == 0 {
        return (Vec::new(), Vec::new());
    }

    let mut nodes = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    let nf = n as f64;

    for i in 0..n {
        let mut x = -(PI * (i as f64 + 0.75) / (nf + 0.5)).cos();
        for _ in 0..NEWTON_MAX_ITER {
            let (p, dp) = legendre_and_derivative(n, x);
            let update = p / dp;
            x -= update;
            if update.abs() < NEWTON_TOL {
                break;
            }
        }
        let dp = legendre_and_derivative(n, x).1;
        nodes.push(x);
        weights.push(2.0 / ((1.0 - x * x) * dp * dp));
    }

    (nodes, weights)
}

/// Integrate `f` over [-1, 1] with the n-point rule.
pub fn integrate<F: Fn(f64) -> f64>(n: usize, f: F) -> f64 {
    let (nodes, weights) = gauss_legendre(n);
    nodes.iter().zip(&weights).map(|(&x, &w)| w * f(x)).sum()
}

/// ∫_{-1}^{1} P_m(x) P_j(x + shift) dx, exact for polynomial integrands.
///
/// With `shift = ±2` the second factor is the basis of the neighbouring
/// reference element expressed in the local coordinate.
pub fn legendre_inner_product(m: usize, j: usize, shift: f64) -> f64 {
    let n = (m + j) / 2 + 1;
    integrate(n, |x| legendre(m, x) * legendre(j, x + shift))
}
