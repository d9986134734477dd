//! Spectral decomposition of sampled curves.
//!
//! Turns a closed curve's complex samples into DFT components, keeps the
//! strongest ones and converts them into arrow parameters with exact
//! rational frequencies.

mod rational;
mod spectrum;

// Re-export public types
pub use rational::Frequency;
pub use spectrum::{
    build_vectors, top_components, transform, transform_direct, ArrowSpec, Component,
};
