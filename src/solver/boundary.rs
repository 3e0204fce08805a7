//! Ghost-element boundary conditions.
//!
//! The modal array carries one ghost element on each side of the mesh.
//! Boundary conditions overwrite the ghost modes so that face values at the
//! domain ends are well defined before any flux is computed.

use crate::error::{DgError, Result};
use faer::Mat;
use std::fmt;
use std::str::FromStr;

/// Boundary treatment at both ends of the domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryCondition {
    /// Ghosts copy the opposite end element.
    #[default]
    Periodic,
    /// Ghosts mirror the adjacent element, giving equal face states and
    /// zero-gradient outflow.
    Transmissive,
    /// As transmissive, with the law's reflected fields (momentum) negated.
    Reflective,
}

impl BoundaryCondition {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Periodic => "periodic",
            Self::Transmissive => "transmissive",
            Self::Reflective => "reflective",
        }
    }

    /// Fill the ghost columns of `u`.
    ///
    /// `u` has shape (n_modes, (n_elements + 2) * n_fields); padded element
    /// 0 and n_elements + 1 are the ghosts.
    pub fn apply(&self, u: &mut Mat<f64>, n_elements: usize, n_fields: usize, reflected: &[usize]) {
        let left_ghost = 0;
        let right_ghost = n_elements + 1;

        match self {
            Self::Periodic => {
                copy_element(u, n_elements, left_ghost, n_fields, false);
                copy_element(u, 1, right_ghost, n_fields, false);
            }
            Self::Transmissive | Self::Reflective => {
                copy_element(u, 1, left_ghost, n_fields, true);
                copy_element(u, n_elements, right_ghost, n_fields, true);
                if *self == Self::Reflective {
                    for &field in reflected {
                        for ghost in [left_ghost, right_ghost] {
                            let col = ghost * n_fields + field;
                            for m in 0..u.nrows() {
                                u[(m, col)] = -u[(m, col)];
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Copy all modes of element `src` into element `dst`, optionally mirrored
/// about the element centre (mode m picks up a factor (-1)^m).
fn copy_element(u: &mut Mat<f64>, src: usize, dst: usize, n_fields: usize, mirror: bool) {
    for field in 0..n_fields {
        let (s, d) = (src * n_fields + field, dst * n_fields + field);
        for m in 0..u.nrows() {
            let sign = if mirror && m % 2 == 1 { -1.0 } else { 1.0 };
            u[(m, d)] = sign * u[(m, s)];
        }
    }
}

impl FromStr for BoundaryCondition {
    type Err = DgError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "periodic" => Ok(Self::Periodic),
            "transmissive" | "outflow" | "zerograd" => Ok(Self::Transmissive),
            "reflective" | "wall" => Ok(Self::Reflective),
            other => Err(DgError::UnknownBoundaryCondition(other.to_string())),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
