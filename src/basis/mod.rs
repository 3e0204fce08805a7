//! Modal polynomial basis.
//!
//! Legendre modes on the reference interval together with the quadrature,
//! face evaluation, weighted derivative and inverse mass data that the
//! residual assembly needs.

mod modal;

pub use modal::Basis;
