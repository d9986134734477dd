//! Epicycles library - Fourier decomposition of closed curves into rotating arrows

pub mod cli;
pub mod driver;
pub mod epicycle;
pub mod error;
pub mod fourier;
pub mod params;
pub mod render;
pub mod sampling;
