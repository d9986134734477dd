//! Rotating arrows and the chain that sums them.

mod arrow;
mod chain;

pub use arrow::{stroke_width, Arrow};
pub use chain::ArrowChain;
