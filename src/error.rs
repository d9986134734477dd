//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the epicycle engine and its collaborators
#[derive(Debug, Error)]
pub enum EpicycleError {
    /// Operation called on a chain in the wrong lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// No sample points were supplied for a curve
    #[error("Cannot build epicycles from an empty sample sequence")]
    EmptySamples,

    /// A configuration value failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Malformed point line in a points file
    #[error("{}:{}: cannot parse point '{}'", path.display(), line, content)]
    ParsePoint {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, EpicycleError>;
