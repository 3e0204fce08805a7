//! Time integration methods.

mod ssp_rk3;

pub use ssp_rk3::{SspRk3, compute_dt};
