//! Modal solution storage and the per-solution helpers used by the
//! residual assembly.
//!
//! The modal coefficients live in a single matrix of shape
//! `(n_modes, (n_elements + 2) * n_fields)`. Column `element * n_fields +
//! field` holds the modes of one field on one element; padded element 0 and
//! `n_elements + 1` are ghosts filled by the boundary condition.

use super::boundary::BoundaryCondition;
use crate::basis::Basis;
use crate::enhance::Enhancer;
use crate::equations::{MAX_FIELDS, PdeSystem, Sensor, SensorThresholds};
use crate::error::{DgError, Result};
use crate::flux::{self, RiemannSolver};
use crate::mesh::Mesh1D;
use crate::polynomial::gauss_legendre;
use faer::linalg::matmul::matmul;
use faer::{Accum, Mat, Par};
use std::ops::Range;

/// Ghost elements padded on each side of the mesh.
pub const N_GHOST: usize = 1;

/// DG solution: modal state plus everything needed to interpret it.
#[derive(Clone, Debug)]
pub struct Solution {
    mesh: Mesh1D,
    basis: Basis,
    system: PdeSystem,
    riemann: RiemannSolver,
    boundary: BoundaryCondition,
    enhancer: Option<Enhancer>,
    scaled_minv: Vec<f64>,
    u: Mat<f64>,
}

impl Solution {
    /// Zero-initialised solution.
    ///
    /// Fails if `riemann` is not defined for `system`.
    pub fn new(
        mesh: Mesh1D,
        basis: Basis,
        system: PdeSystem,
        riemann: RiemannSolver,
        boundary: BoundaryCondition,
    ) -> Result<Self> {
        let riemann = system.check_solver(riemann)?;
        let n_cols = (mesh.n_elements + 2 * N_GHOST) * system.n_fields();
        let u = Mat::zeros(basis.n_modes, n_cols);
        let scaled_minv = basis.scaled_minv(mesh.dx);

        log::info!(
            "Solution: {} elements, order {}, {} system, {} flux, {} boundaries",
            mesh.n_elements,
            basis.order,
            system.name(),
            riemann,
            boundary
        );

        Ok(Self {
            mesh,
            basis,
            system,
            riemann,
            boundary,
            enhancer: None,
            scaled_minv,
            u,
        })
    }

    /// Attach an enhanced face reconstruction.
    pub fn with_enhancer(mut self, enhancer: Enhancer) -> Result<Self> {
        if enhancer.alpha_l.len() != self.basis.n_modes {
            return Err(DgError::dimension_mismatch(
                format!("enhancer for order {}", self.basis.order),
                format!("enhancer with {} modes", enhancer.alpha_l.len()),
            ));
        }
        self.enhancer = Some(enhancer);
        Ok(self)
    }

    pub fn mesh(&self) -> &Mesh1D {
        &self.mesh
    }

    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    pub fn system(&self) -> &PdeSystem {
        &self.system
    }

    pub fn riemann_solver(&self) -> RiemannSolver {
        self.riemann
    }

    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    pub fn enhancer(&self) -> Option<&Enhancer> {
        self.enhancer.as_ref()
    }

    /// Number of physical elements (N_E).
    pub fn n_elements(&self) -> usize {
        self.mesh.n_elements
    }

    /// Number of fields per element (N_F).
    pub fn n_fields(&self) -> usize {
        self.system.n_fields()
    }

    pub fn n_modes(&self) -> usize {
        self.basis.n_modes
    }

    /// Width of the padded modal array.
    pub fn n_cols(&self) -> usize {
        self.u.ncols()
    }

    /// Interfaces between consecutive padded elements that touch the mesh.
    pub fn n_interfaces(&self) -> usize {
        self.mesh.n_elements + 1
    }

    /// Padded indices of the physical elements.
    pub fn interior_elements(&self) -> Range<usize> {
        N_GHOST..self.mesh.n_elements + N_GHOST
    }

    /// Column of `field` on padded element `element`.
    #[inline]
    pub fn column(&self, element: usize, field: usize) -> usize {
        element * self.n_fields() + field
    }

    /// Interface on the left of padded element `element`.
    #[inline]
    pub fn left_interface(&self, element: usize) -> usize {
        element - 1
    }

    /// Interface on the right of padded element `element`.
    #[inline]
    pub fn right_interface(&self, element: usize) -> usize {
        element
    }

    /// Modal coefficients, ghosts included.
    pub fn modes(&self) -> &Mat<f64> {
        &self.u
    }

    pub fn modes_mut(&mut self) -> &mut Mat<f64> {
        &mut self.u
    }

    /// Modes of one field on one padded element.
    pub fn element_modes(&self, element: usize, field: usize) -> Vec<f64> {
        let col = self.column(element, field);
        (0..self.n_modes()).map(|m| self.u[(m, col)]).collect()
    }

    pub fn set_element_modes(&mut self, element: usize, field: usize, modes: &[f64]) {
        let col = self.column(element, field);
        for (m, &v) in modes.iter().enumerate().take(self.n_modes()) {
            self.u[(m, col)] = v;
        }
    }

    /// Inverse mass diagonal (2m+1)/dx.
    pub fn scaled_minv(&self) -> &[f64] {
        &self.scaled_minv
    }

    /// Fill ghost elements according to the boundary condition.
    pub fn apply_bc(&mut self) {
        let n_e = self.mesh.n_elements;
        let n_f = self.system.n_fields();
        self.boundary
            .apply(&mut self.u, n_e, n_f, self.system.reflected_fields());
    }

    /// Values at the interior quadrature nodes, shape (n_nodes, n_cols).
    pub fn collocate(&self) -> Mat<f64> {
        let mut ug = Mat::zeros(self.basis.n_nodes(), self.n_cols());
        self.collocate_into(&mut ug);
        ug
    }

    pub fn collocate_into(&self, ug: &mut Mat<f64>) {
        matmul(
            ug.as_mut(),
            Accum::Replace,
            self.basis.phi.as_ref(),
            self.u.as_ref(),
            1.0,
            Par::Seq,
        );
    }

    /// Values at the left (row 0) and right (row 1) face of every element.
    pub fn collocate_faces(&self) -> Mat<f64> {
        let mut uf = Mat::zeros(2, self.n_cols());
        self.collocate_faces_into(&mut uf);
        uf
    }

    /// Plain endpoint evaluation everywhere, replaced by the enhanced
    /// reconstruction on faces shared by two padded elements when an
    /// enhancer is attached.
    pub fn collocate_faces_into(&self, uf: &mut Mat<f64>) {
        matmul(
            uf.as_mut(),
            Accum::Replace,
            self.basis.psi.as_ref(),
            self.u.as_ref(),
            1.0,
            Par::Seq,
        );
        if let Some(enhancer) = &self.enhancer {
            enhancer.face_values_into(&self.u, self.n_fields(), uf);
        }
    }

    /// Physical flux of collocated values.
    pub fn interior_flux(&self, ug: &Mat<f64>, out: &mut Mat<f64>) {
        flux::interior_flux(&self.system, ug, out);
    }

    /// Interface fluxes from left/right states laid out per interface.
    pub fn riemann(&self, q_l: &[f64], q_r: &[f64], out: &mut [f64]) {
        flux::riemann(&self.system, self.riemann, q_l, q_r, out);
    }

    /// Largest wave speed over the cell means of the physical elements.
    pub fn max_wave_speed(&self) -> f64 {
        let cols = self.column(N_GHOST, 0)..self.column(self.mesh.n_elements + N_GHOST, 0);
        let means: Vec<f64> = cols.map(|c| self.u[(0, c)]).collect();
        flux::max_wave_speed(&self.system, &means)
    }

    /// Mode-0 row over all padded elements.
    pub fn mean_row(&self) -> Vec<f64> {
        (0..self.n_cols()).map(|c| self.u[(0, c)]).collect()
    }

    /// Discontinuity flags per padded element from the current cell means.
    ///
    /// Only the Euler equations carry a sensor; advection returns `None`.
    pub fn sensors(&self, thresholds: SensorThresholds) -> Option<Vec<Sensor>> {
        match &self.system {
            PdeSystem::Euler(euler) => Some(euler.sensing(thresholds, &self.mean_row())),
            PdeSystem::Advection(_) => None,
        }
    }

    /// L² projection of `f(x)` onto every physical element, then ghosts.
    ///
    /// `f` returns the conserved state at x; only the first `n_fields`
    /// entries are read.
    pub fn project<F>(&mut self, f: F)
    where
        F: Fn(f64) -> [f64; MAX_FIELDS],
    {
        let n_f = self.n_fields();
        for k in 0..self.mesh.n_elements {
            let element = k + N_GHOST;
            for field in 0..n_f {
                let modes = self
                    .basis
                    .project(|xi| f(self.mesh.reference_to_physical(k, xi))[field]);
                let col = element * n_f + field;
                for (m, v) in modes.into_iter().enumerate() {
                    self.u[(m, col)] = v;
                }
            }
        }
        self.apply_bc();
    }

    /// Cell means of `field` on the physical elements.
    pub fn cell_means(&self, field: usize) -> Vec<f64> {
        self.interior_elements()
            .map(|e| self.u[(0, self.column(e, field))])
            .collect()
    }

    /// ∫ u_field dx over the domain.
    pub fn integral(&self, field: usize) -> f64 {
        self.cell_means(field).iter().sum::<f64>() * self.mesh.dx
    }

    /// Point value of `field` at physical x.
    pub fn evaluate(&self, x: f64, field: usize) -> f64 {
        let k = self.mesh.locate(x);
        let xi = self.mesh.physical_to_reference(k, x);
        self.basis
            .evaluate(&self.element_modes(k + N_GHOST, field), xi)
    }

    /// L² error of `field` against `exact(x)`.
    pub fn l2_error<F: Fn(f64) -> f64>(&self, field: usize, exact: F) -> f64 {
        let (nodes, weights) = gauss_legendre(self.n_modes() + 3);
        let jac = self.mesh.jacobian();
        let mut error_sq = 0.0;

        for k in 0..self.mesh.n_elements {
            let modes = self.element_modes(k + N_GHOST, field);
            for (&xi, &w) in nodes.iter().zip(&weights) {
                let x = self.mesh.reference_to_physical(k, xi);
                let diff = self.basis.evaluate(&modes, xi) - exact(x);
                error_sq += w * diff * diff * jac;
            }
        }

        error_sq.sqrt()
    }

    /// Whether every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        (0..self.u.ncols()).all(|c| (0..self.u.nrows()).all(|m| self.u[(m, c)].is_finite()))
    }
}
