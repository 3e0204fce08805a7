//! High-order interface reconstruction from neighbouring modes.

mod enhancer;
mod method;

pub use enhancer::Enhancer;
pub use method::{EnhancementMethod, EnhancementSpec};
