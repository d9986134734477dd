//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::{info, warn};

use crate::params::{AnalysisConfig, RecordingConfig, RenderConfig, SamplingConfig};
use crate::sampling::ShapePreset;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Epicycles")]
#[command(about = "Fourier epicycle animation of closed curves", long_about = None)]
pub struct Args {
    /// Built-in curve: circle, square, star, heart (default), figure-eight
    #[arg(long, value_name = "SHAPE", default_value = "heart")]
    pub shape: String,

    /// Read the curve from a file of `x,y` lines (curve units) instead of a preset
    #[arg(long, value_name = "FILE")]
    pub points: Option<PathBuf>,

    /// Number of arrows to keep
    #[arg(long, value_name = "COUNT", default_value = "50")]
    pub arrows: usize,

    /// Pixels per curve unit
    #[arg(long, value_name = "PIXELS", default_value = "100")]
    pub unit: f64,

    /// Max distance between neighbouring samples (pixels)
    #[arg(long, value_name = "PIXELS", default_value = "2")]
    pub spacing: f64,

    /// Simulation steps to render (default: one full period)
    #[arg(long, value_name = "STEPS")]
    pub steps: Option<usize>,

    /// Save every n-th step as a frame
    #[arg(long, value_name = "N", default_value = "1")]
    pub stride: usize,

    /// Output directory for recorded frames
    #[arg(long, value_name = "DIR", default_value = "recording")]
    pub output: PathBuf,
}

impl Args {
    /// Parse shape preset from command-line arguments
    pub fn parse_shape(&self) -> ShapePreset {
        match ShapePreset::from_name(&self.shape) {
            Some(preset) => {
                info!("Shape: {}", preset.name());
                preset
            }
            None => {
                warn!("Unknown shape '{}', using heart", self.shape);
                ShapePreset::Heart
            }
        }
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            arrow_count: self.arrows,
            ..AnalysisConfig::default()
        }
    }

    pub fn sampling_config(&self) -> SamplingConfig {
        SamplingConfig {
            spacing_px: self.spacing,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            unit_px: self.unit,
            ..RenderConfig::default()
        }
    }

    pub fn recording_config(&self) -> RecordingConfig {
        RecordingConfig {
            step_count: self.steps,
            frame_stride: self.stride,
            ..RecordingConfig::new(&self.output)
        }
    }
}
