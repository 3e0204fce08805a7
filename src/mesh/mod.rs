//! Mesh representation.

mod mesh1d;

pub use mesh1d::Mesh1D;
