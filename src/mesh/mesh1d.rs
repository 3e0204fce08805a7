//! 1D mesh representation.
//!
//! A uniform partition of [x_min, x_max] into elements of equal width.
//! Ghost elements used for boundary conditions live in the solution
//! layout, not here.

use crate::error::{DgError, Result};

/// Uniform 1D mesh of an interval.
#[derive(Clone, Debug)]
pub struct Mesh1D {
    /// Left endpoint of domain
    pub x_min: f64,
    /// Right endpoint of domain
    pub x_max: f64,
    /// Number of elements
    pub n_elements: usize,
    /// Element vertices; vertices[k] is the left endpoint of element k
    pub vertices: Vec<f64>,
    /// Element width
    pub dx: f64,
}

impl Mesh1D {
    /// Create a uniform mesh of [x_min, x_max] with n_elements elements.
    pub fn uniform(x_min: f64, x_max: f64, n_elements: usize) -> Result<Self> {
        if n_elements == 0 {
            return Err(DgError::InvalidMesh("need at least one element".into()));
        }
        if !(x_max > x_min) || !x_min.is_finite() || !x_max.is_finite() {
            return Err(DgError::InvalidMesh(format!(
                "domain [{}, {}] is empty or not finite",
                x_min, x_max
            )));
        }

        let dx = (x_max - x_min) / n_elements as f64;
        let vertices = (0..=n_elements).map(|i| x_min + i as f64 * dx).collect();

        Ok(Self {
            x_min,
            x_max,
            n_elements,
            vertices,
            dx,
        })
    }

    pub fn length(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Midpoint of element k.
    pub fn center(&self, k: usize) -> f64 {
        self.vertices[k] + 0.5 * self.dx
    }

    /// Midpoints of all elements.
    pub fn centers(&self) -> Vec<f64> {
        (0..self.n_elements).map(|k| self.center(k)).collect()
    }

    /// Map reference coordinate r in [-1, 1] to physical x in element k.
    ///
    /// x = x_k + (1 + r) h / 2
    pub fn reference_to_physical(&self, k: usize, r: f64) -> f64 {
        self.vertices[k] + (1.0 + r) * self.dx / 2.0
    }

    /// Map physical x to reference coordinate r in element k.
    pub fn physical_to_reference(&self, k: usize, x: f64) -> f64 {
        2.0 * (x - self.vertices[k]) / self.dx - 1.0
    }

    /// Jacobian dx/dr = h/2.
    pub fn jacobian(&self) -> f64 {
        self.dx / 2.0
    }

    /// Element containing x; points outside the domain map to the nearest
    /// end element.
    pub fn locate(&self, x: f64) -> usize {
        let k = ((x - self.x_min) / self.dx).floor();
        if k <= 0.0 {
            0
        } else {
            (k as usize).min(self.n_elements - 1)
        }
    }
}
