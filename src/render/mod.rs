//! Drawable scene primitives and the PNG frame renderer.

mod raster;
mod scene;

// Re-export public types
pub use raster::{Canvas, FrameRecorder};
pub use scene::{Circle, Color, Scene, Segment, Triangle};
