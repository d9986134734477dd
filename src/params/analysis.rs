//! Spectral analysis, animation and sampling parameters.

/// Fourier decomposition and animation settings
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Number of arrows kept (strongest components by magnitude)
    pub arrow_count: usize,

    /// Simulated time per frame (sample steps; 1.0 = one sample per frame)
    pub time_step: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            arrow_count: 50,
            time_step: 1.0,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.arrow_count == 0 {
            return Err("Arrow count must be > 0".to_string());
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(format!("Time step must be > 0, got {}", self.time_step));
        }
        Ok(())
    }
}

/// Smallest nonzero sample spacing (pixels); finer spacing explodes the sample count
pub const MIN_SPACING_PX: f64 = 0.1;

/// Input sampling settings
#[derive(Debug, Clone)]
pub struct SamplingConfig {
    /// Max distance between two neighbouring sample points (pixels)
    ///
    /// Zero disables interpolation; otherwise at least `MIN_SPACING_PX`.
    pub spacing_px: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self { spacing_px: 2.0 }
    }
}

impl SamplingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.spacing_px.is_finite() && self.spacing_px >= 0.0) {
            return Err(format!(
                "Sample spacing must be >= 0, got {}",
                self.spacing_px
            ));
        }
        if self.spacing_px > 0.0 && self.spacing_px < MIN_SPACING_PX {
            return Err(format!(
                "Sample spacing must be 0 or >= {} px, got {}",
                MIN_SPACING_PX, self.spacing_px
            ));
        }
        Ok(())
    }
}
