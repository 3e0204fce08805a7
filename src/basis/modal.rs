//! Modal Legendre basis on the reference element [-1, 1].
//!
//! The solution on each element is u(ξ) = Σ_m u_m P_m(ξ). Because the
//! Legendre family is orthogonal, the element mass matrix is diagonal with
//! entries 2/(2m+1) · dx/2, so its inverse is a per-mode scaling.

use crate::error::{DgError, Result};
use crate::polynomial::{gauss_legendre, legendre_and_derivative, legendre_values};
use faer::Mat;

/// Precomputed quadrature and evaluation data for a modal basis of order p.
///
/// The interior quadrature uses `p + 1` Gauss-Legendre points, one per mode.
#[derive(Clone, Debug)]
pub struct Basis {
    /// Highest polynomial degree retained
    pub order: usize,
    /// Number of modes (order + 1)
    pub n_modes: usize,
    /// Gauss-Legendre nodes on [-1, 1]
    pub nodes: Vec<f64>,
    /// Gauss-Legendre weights
    pub weights: Vec<f64>,
    /// phi[(g, m)] = P_m(x_g), shape (n_nodes, n_modes)
    pub phi: Mat<f64>,
    /// psi[(0, m)] = P_m(-1), psi[(1, m)] = P_m(+1), shape (2, n_modes)
    pub psi: Mat<f64>,
    /// dphi_w[(m, g)] = w_g P'_m(x_g), shape (n_modes, n_nodes)
    pub dphi_w: Mat<f64>,
    /// Inverse reference mass matrix diagonal, (2m+1)/2
    pub minv: Vec<f64>,
    proj_weights: Vec<f64>,
    proj_nodes: Vec<f64>,
    proj_phi: Mat<f64>,
}

impl Basis {
    /// Build the basis for polynomial order `order`.
    pub fn new(order: usize) -> Result<Self> {
        let n_modes = order + 1;
        let (nodes, weights) = gauss_legendre(n_modes);

        let mut phi = Mat::zeros(n_modes, n_modes);
        let mut dphi_w = Mat::zeros(n_modes, n_modes);
        for (g, (&x, &w)) in nodes.iter().zip(&weights).enumerate() {
            for m in 0..n_modes {
                let (p, dp) = legendre_and_derivative(m, x);
                phi[(g, m)] = p;
                dphi_w[(m, g)] = w * dp;
            }
        }

        let mut psi = Mat::zeros(2, n_modes);
        for m in 0..n_modes {
            psi[(0, m)] = if m % 2 == 0 { 1.0 } else { -1.0 };
            psi[(1, m)] = 1.0;
        }

        let minv = (0..n_modes).map(|m| (2 * m + 1) as f64 / 2.0).collect();

        // Initial data is generally not polynomial; project with a richer rule
        let (proj_nodes, proj_weights) = gauss_legendre(2 * n_modes + 2);
        let mut proj_phi = Mat::zeros(proj_nodes.len(), n_modes);
        for (g, &x) in proj_nodes.iter().enumerate() {
            for (m, v) in legendre_values(order, x).into_iter().enumerate() {
                proj_phi[(g, m)] = v;
            }
        }

        log::debug!("Built modal Legendre basis of order {}", order);

        Ok(Self {
            order,
            n_modes,
            nodes,
            weights,
            phi,
            psi,
            dphi_w,
            minv,
            proj_weights,
            proj_nodes,
            proj_phi,
        })
    }

    /// Build from a signed order as read from an input deck.
    pub fn from_order(order: i64) -> Result<Self> {
        if order < 0 {
            return Err(DgError::InvalidOrder(order));
        }
        Self::new(order as usize)
    }

    /// Number of interior quadrature nodes.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Inverse mass diagonal for elements of width `dx`: (2m+1)/dx.
    pub fn scaled_minv(&self, dx: f64) -> Vec<f64> {
        self.minv.iter().map(|&m| m * 2.0 / dx).collect()
    }

    /// Evaluate the modal expansion `coeffs` at reference coordinate `xi`.
    pub fn evaluate(&self, coeffs: &[f64], xi: f64) -> f64 {
        legendre_values(self.order, xi)
            .iter()
            .zip(coeffs)
            .map(|(p, c)| p * c)
            .sum()
    }

    /// L² projection of `f(ξ)` onto the basis.
    ///
    /// u_m = (2m+1)/2 ∫ f(ξ) P_m(ξ) dξ
    pub fn project<F: Fn(f64) -> f64>(&self, f: F) -> Vec<f64> {
        let samples: Vec<f64> = self
            .proj_nodes
            .iter()
            .zip(&self.proj_weights)
            .map(|(&x, &w)| w * f(x))
            .collect();

        (0..self.n_modes)
            .map(|m| {
                let integral: f64 = samples
                    .iter()
                    .enumerate()
                    .map(|(g, s)| s * self.proj_phi[(g, m)])
                    .sum();
                self.minv[m] * integral
            })
            .collect()
    }
}
