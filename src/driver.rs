//! High-level epicycle system: samples in, animated scenes out.

use log::{info, warn};
use rustfft::num_complex::Complex64;

use crate::epicycle::ArrowChain;
use crate::error::{EpicycleError, Result};
use crate::fourier::{build_vectors, top_components, transform};
use crate::params::{AnalysisConfig, RenderConfig};
use crate::render::Scene;

/// Owns the arrow chain for the current curve and steps it per frame
pub struct EpicycleSystem {
    chain: ArrowChain,
    analysis: AnalysisConfig,
    paused: bool,
    /// Frames advanced since the chain was built
    steps: usize,
}

impl EpicycleSystem {
    /// Decompose a sampled curve and build its arrow chain
    ///
    /// `analysis` is validated first; an invalid config yields `InvalidConfig`.
    pub fn from_samples(samples: &[Complex64], analysis: AnalysisConfig) -> Result<Self> {
        let chain = build_chain(samples, &analysis)?;
        Ok(Self {
            chain,
            analysis,
            paused: false,
            steps: 0,
        })
    }

    /// Replace the current curve with a freshly sampled one
    ///
    /// On error the previous chain is kept.
    pub fn reset(&mut self, samples: &[Complex64]) -> Result<()> {
        self.chain = build_chain(samples, &self.analysis)?;
        self.paused = false;
        self.steps = 0;
        Ok(())
    }

    /// Advance the animation by one frame unless paused
    pub fn update(&mut self) {
        if self.paused {
            return;
        }
        self.chain.advance(self.analysis.time_step);
        self.steps += 1;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn chain(&self) -> &ArrowChain {
        &self.chain
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Frames needed to trace one full period (None for a static curve)
    pub fn steps_per_period(&self) -> Option<usize> {
        self.chain
            .period()
            .map(|period| (period / self.analysis.time_step).ceil() as usize)
    }

    /// Drawable primitives for the current frame
    pub fn scene(&self, render: &RenderConfig) -> Scene {
        let (segments, triangles) = self.chain.emit_vectors(render.arrow_color);
        Scene {
            path: self.chain.emit_path(render.path_color, render.path_width),
            circles: self.chain.emit_circles(
                render.circle_color,
                render.unit_px,
                render.min_circle_radius_px,
            ),
            segments,
            triangles,
        }
    }
}

fn build_chain(samples: &[Complex64], analysis: &AnalysisConfig) -> Result<ArrowChain> {
    analysis.validate().map_err(EpicycleError::InvalidConfig)?;
    if samples.is_empty() {
        warn!("No sample points supplied, nothing to decompose");
        return Err(EpicycleError::EmptySamples);
    }

    let spectrum = transform(samples);
    let top = top_components(&spectrum, analysis.arrow_count);

    let mut chain = ArrowChain::new();
    for spec in build_vectors(&top, samples.len())? {
        chain.insert(spec.length, spec.frequency, spec.phase);
    }

    // Fails on an empty chain
    let fundamental = chain.fundamental_frequency()?;
    info!(
        "Built {} arrows from {} samples (fundamental {}, period {:?})",
        chain.len(),
        samples.len(),
        fundamental,
        chain.period()
    );
    Ok(chain)
}
