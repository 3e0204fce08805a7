//! Polynomial evaluation and quadrature.
//!
//! This module provides:
//! - 1D Legendre polynomials and their derivatives
//! - Gauss-Legendre nodes and weights
//! - Exact inner products between (shifted) Legendre polynomials

mod gauss;
mod legendre;

pub use gauss::{gauss_legendre, integrate, legendre_inner_product};
pub use legendre::{
    legendre, legendre_and_derivative, legendre_derivative, legendre_norm_squared,
    legendre_values,
};
