//! Parameter definitions with units and documented semantics.
//!
//! All tunable numbers are extracted here with:
//! - Units (curve units, pixels, sample steps)
//! - Documented ranges and meanings
//! - A `validate` check per config group

mod analysis;
mod render;

// Re-export all types
pub use analysis::{AnalysisConfig, SamplingConfig, MIN_SPACING_PX};
pub use render::{RecordingConfig, RenderConfig};
