//! Rendering and recording configuration.

use std::path::PathBuf;

use glam::DVec2;

use crate::render::Color;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Pixels per curve unit (1.0 on the complex plane)
    pub unit_px: f64,

    pub background_color: Color,
    pub arrow_color: Color,
    pub path_color: Color,
    pub circle_color: Color,

    /// Color of raw sample dots
    pub sample_color: Color,

    /// Traced path stroke width (pixels)
    pub path_width: u32,

    /// Orbit circles below this radius (pixels) are not drawn
    pub min_circle_radius_px: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 900,
            unit_px: 100.0,
            background_color: [0, 0, 0],
            arrow_color: [180, 40, 40],
            path_color: [40, 100, 100],
            circle_color: [60, 60, 60],
            sample_color: [255, 255, 255],
            path_width: 3,
            min_circle_radius_px: 2.0,
        }
    }
}

impl RenderConfig {
    /// Pixel position of the curve origin (window center)
    pub fn screen_origin(&self) -> DVec2 {
        DVec2::new(
            self.window_width as f64 / 2.0,
            self.window_height as f64 / 2.0,
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(format!(
                "Window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            ));
        }
        if !(self.unit_px.is_finite() && self.unit_px > 0.0) {
            return Err(format!("Unit scale must be > 0, got {}", self.unit_px));
        }
        Ok(())
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Simulation steps to run (None = exactly one fundamental period)
    pub step_count: Option<usize>,

    /// Save every n-th step as a frame
    pub frame_stride: usize,
}

impl RecordingConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            step_count: None,
            frame_stride: 1,
        }
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// Path of the n-th saved frame
    pub fn frame_path(&self, frame: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.frame_stride == 0 {
            return Err("Frame stride must be > 0".to_string());
        }
        Ok(())
    }
}
