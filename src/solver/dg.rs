//! DG residual assembly.
//!
//! For each field the semi-discrete modal equations read
//!
//! du_m/dt = (2m+1)/dx [ Σ_g w_g P'_m(x_g) f(u(x_g)) - (F*_{R} - (-1)^m F*_{L}) ]
//!
//! The volume term is the weighted-derivative matrix applied to the flux at
//! the quadrature nodes; the surface term uses the Riemann flux at the two
//! interfaces of the element, with P_m(-1) = (-1)^m producing a difference
//! for even modes and a sum for odd modes.

use super::solution::{N_GHOST, Solution};
use crate::error::{DgError, Result};
use faer::linalg::matmul::matmul;
use faer::{Accum, Mat, Par};

/// Residual assembler owning the per-call work buffers.
///
/// The buffers are sized once from the solution layout and overwritten on
/// every call. The residual returned by [`DG::residual`] borrows from this
/// workspace and is invalidated by the next call.
#[derive(Clone, Debug)]
pub struct DG {
    n_elements: usize,
    n_fields: usize,
    n_modes: usize,
    /// Solution at quadrature nodes
    ug: Mat<f64>,
    /// Physical flux at quadrature nodes
    fg: Mat<f64>,
    /// Face values, row 0 left face, row 1 right face
    uf: Mat<f64>,
    /// Interface states and fluxes, n_fields per interface
    q_l: Vec<f64>,
    q_r: Vec<f64>,
    q: Vec<f64>,
    /// Assembled residual
    rhs: Mat<f64>,
}

impl DG {
    /// Allocate a workspace matching `solution`'s layout.
    pub fn new(solution: &Solution) -> Self {
        let n_cols = solution.n_cols();
        let n_nodes = solution.basis().n_nodes();
        let n_modes = solution.n_modes();
        let n_face_values = solution.n_interfaces() * solution.n_fields();

        log::info!(
            "Initializing the DG solver ({} elements x {} fields, {} modes)",
            solution.n_elements(),
            solution.n_fields(),
            n_modes
        );

        Self {
            n_elements: solution.n_elements(),
            n_fields: solution.n_fields(),
            n_modes,
            ug: Mat::zeros(n_nodes, n_cols),
            fg: Mat::zeros(n_nodes, n_cols),
            uf: Mat::zeros(2, n_cols),
            q_l: vec![0.0; n_face_values],
            q_r: vec![0.0; n_face_values],
            q: vec![0.0; n_face_values],
            rhs: Mat::zeros(n_modes, n_cols),
        }
    }

    /// Right-hand side du/dt for the current state of `solution`.
    ///
    /// Applies the boundary conditions to `solution` (ghost modes only).
    /// Ghost columns of the returned residual are zero.
    pub fn residual(&mut self, solution: &mut Solution) -> Result<&Mat<f64>> {
        self.check_layout(solution)?;
        let n_f = self.n_fields;

        solution.apply_bc();

        solution.collocate_into(&mut self.ug);
        solution.collocate_faces_into(&mut self.uf);

        solution.interior_flux(&self.ug, &mut self.fg);

        // Volume integral against the basis derivatives
        matmul(
            self.rhs.as_mut(),
            Accum::Replace,
            solution.basis().dphi_w.as_ref(),
            self.fg.as_ref(),
            1.0,
            Par::Seq,
        );

        // Interface i separates padded elements i and i + 1
        for i in 0..=self.n_elements {
            for f in 0..n_f {
                self.q_l[i * n_f + f] = self.uf[(1, i * n_f + f)];
                self.q_r[i * n_f + f] = self.uf[(0, (i + 1) * n_f + f)];
            }
        }
        solution.riemann(&self.q_l, &self.q_r, &mut self.q);

        let scaled_minv = solution.scaled_minv();
        for e in solution.interior_elements() {
            let (left, right) = (solution.left_interface(e), solution.right_interface(e));
            for f in 0..n_f {
                let col = solution.column(e, f);
                let q_left = self.q[left * n_f + f];
                let q_right = self.q[right * n_f + f];
                for m in 0..self.n_modes {
                    let surface = if m % 2 == 0 {
                        q_right - q_left
                    } else {
                        q_right + q_left
                    };
                    self.rhs[(m, col)] = (self.rhs[(m, col)] - surface) * scaled_minv[m];
                }
            }
        }

        let last_ghost = self.n_elements + N_GHOST;
        for f in 0..n_f {
            for col in [f, last_ghost * n_f + f] {
                for m in 0..self.n_modes {
                    self.rhs[(m, col)] = 0.0;
                }
            }
        }

        Ok(&self.rhs)
    }

    fn check_layout(&self, solution: &Solution) -> Result<()> {
        let expected = (self.n_modes, (self.n_elements + 2 * N_GHOST) * self.n_fields);
        let u = solution.modes();
        let actual = (u.nrows(), u.ncols());
        if actual != expected || solution.n_fields() != self.n_fields {
            return Err(DgError::dimension_mismatch(
                format!("{}x{} modal array", expected.0, expected.1),
                format!("{}x{}", actual.0, actual.1),
            ));
        }
        Ok(())
    }
}
