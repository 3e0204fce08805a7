//! Enhanced interface reconstruction.
//!
//! At each interface the own element's p+1 modes are combined with a
//! selection of the neighbour's modes into a single polynomial of degree
//! p + |modes| spanning both elements. Evaluating that polynomial at the
//! shared face gives a higher-order face value. All of this collapses to
//! four fixed vectors applied to the two modal columns.

use super::method::EnhancementSpec;
use crate::error::{DgError, Result};
use crate::polynomial::{legendre_inner_product, legendre_norm_squared};
use faer::{Mat, linalg::solvers::Solve};

/// Bound on ‖A·A⁻¹ - I‖ / (‖A‖ ‖A⁻¹‖) in the infinity norm.
///
/// The neighbour rows grow geometrically with the enhanced degree, so the
/// residual is only meaningful relative to the scale of the system.
const INVERSE_RESIDUAL_TOL: f64 = 1e-12;

/// Linear enhancement operators for one (solution order, mode selection).
#[derive(Clone, Debug)]
pub struct Enhancer {
    spec: EnhancementSpec,
    /// Degree of the enhanced polynomial
    pub order: usize,
    /// Right-face value of the left element: weights on the left element
    pub alpha_l: Vec<f64>,
    /// Right-face value of the left element: weights on the right element
    pub alpha_r: Vec<f64>,
    /// Left-face value of the right element: weights on the left element
    pub beta_l: Vec<f64>,
    /// Left-face value of the right element: weights on the right element
    pub beta_r: Vec<f64>,
}

impl Enhancer {
    /// Build the enhancement vectors for a solution of order `solution_order`.
    pub fn new(solution_order: usize, spec: EnhancementSpec) -> Result<Self> {
        spec.validate(solution_order)?;

        let n_own = solution_order + 1;
        let order = solution_order + spec.modes.len();
        let n = order + 1;

        // A maps enhanced modes to [own modes; selected modes of the right
        // neighbour], B the same with the left neighbour.
        let mut a = Mat::<f64>::zeros(n, n);
        let mut b = Mat::<f64>::zeros(n, n);
        for i in 0..n_own {
            a[(i, i)] = 1.0;
            b[(i, i)] = 1.0;
        }
        for (i, &mode) in spec.modes.iter().enumerate() {
            let norm = legendre_norm_squared(mode);
            for j in 0..n {
                a[(n_own + i, j)] = legendre_inner_product(mode, j, 2.0) / norm;
                b[(n_own + i, j)] = legendre_inner_product(mode, j, -2.0) / norm;
            }
        }

        let a_inv = invert(&a, "left enhancement matrix")?;
        let b_inv = invert(&b, "right enhancement matrix")?;

        // Enhanced basis at +1 is all ones, at -1 alternates in sign
        let ve: Vec<f64> = (0..n).map(|c| (0..n).map(|r| a_inv[(r, c)]).sum()).collect();
        let vs: Vec<f64> = (0..n)
            .map(|c| {
                (0..n)
                    .map(|r| if r % 2 == 0 { b_inv[(r, c)] } else { -b_inv[(r, c)] })
                    .sum()
            })
            .collect();

        let alpha_l = ve[..n_own].to_vec();
        let beta_r = vs[..n_own].to_vec();
        let mut alpha_r = vec![0.0; n_own];
        let mut beta_l = vec![0.0; n_own];
        for (i, &mode) in spec.modes.iter().enumerate() {
            alpha_r[mode] = ve[n_own + i];
            beta_l[mode] = vs[n_own + i];
        }

        log::info!(
            "Generated enhancement procedure '{}' (enhanced order {})",
            spec,
            order
        );

        Ok(Self {
            spec,
            order,
            alpha_l,
            alpha_r,
            beta_l,
            beta_r,
        })
    }

    /// Parse `"<policy> <mode>..."` and build.
    pub fn from_spec_str(solution_order: usize, spec: &str) -> Result<Self> {
        Self::new(solution_order, spec.parse()?)
    }

    pub fn spec(&self) -> &EnhancementSpec {
        &self.spec
    }

    /// Enhanced face values for a padded modal array with `n_f` fields.
    ///
    /// Row 0 holds the left-face value of each element, row 1 the
    /// right-face value. Faces on the outer side of the first and last
    /// element have no neighbour and are left at zero.
    pub fn face_value(&self, u: &Mat<f64>, n_f: usize) -> Mat<f64> {
        let mut uf = Mat::zeros(2, u.ncols());
        self.face_values_into(u, n_f, &mut uf);
        uf
    }

    /// In-place form of [`Enhancer::face_value`]; outer faces are untouched.
    pub fn face_values_into(&self, u: &Mat<f64>, n_f: usize, uf: &mut Mat<f64>) {
        let n_modes = self.alpha_l.len();
        debug_assert_eq!(u.nrows(), n_modes);
        debug_assert_eq!(uf.ncols(), u.ncols());

        for left in 0..u.ncols().saturating_sub(n_f) {
            let right = left + n_f;
            let mut face_r = 0.0;
            let mut face_l = 0.0;
            for m in 0..n_modes {
                let (ul, ur) = (u[(m, left)], u[(m, right)]);
                face_r += self.alpha_l[m] * ul + self.alpha_r[m] * ur;
                face_l += self.beta_l[m] * ul + self.beta_r[m] * ur;
            }
            uf[(1, left)] = face_r;
            uf[(0, right)] = face_l;
        }
    }
}

/// Invert a small dense matrix with full-pivoting LU.
///
/// An exactly singular system produces a zero pivot and a non-finite
/// inverse; anything else is accepted as long as the relative residual
/// stays at rounding level.
fn invert(a: &Mat<f64>, what: &str) -> Result<Mat<f64>> {
    let n = a.nrows();
    let lu = a.as_ref().full_piv_lu();
    let mut inv = Mat::zeros(n, n);

    for j in 0..n {
        let mut rhs = Mat::zeros(n, 1);
        rhs[(j, 0)] = 1.0;
        let col = lu.solve(&rhs);
        for i in 0..n {
            inv[(i, j)] = col[(i, 0)];
        }
    }

    let singular = || DgError::SingularSystem(format!("{} ({}x{}) is not invertible", what, n, n));

    let scale = inf_norm(a) * inf_norm(&inv);
    if !scale.is_finite() || scale == 0.0 {
        return Err(singular());
    }

    let mut residual = a * &inv;
    for i in 0..n {
        residual[(i, i)] -= 1.0;
    }
    let relative = inf_norm(&residual) / scale;
    if !relative.is_finite() || relative > INVERSE_RESIDUAL_TOL {
        return Err(singular());
    }

    Ok(inv)
}

/// Largest absolute row sum.
fn inf_norm(m: &Mat<f64>) -> f64 {
    (0..m.nrows())
        .map(|i| (0..m.ncols()).map(|j| m[(i, j)].abs()).sum::<f64>())
        .fold(0.0, |acc, row| if row.is_nan() { f64::NAN } else { acc.max(row) })
}
