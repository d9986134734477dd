//! Chain of rotating arrows whose last tip traces the curve.

use glam::DVec2;
use log::debug;

use super::arrow::Arrow;
use crate::error::{EpicycleError, Result};
use crate::fourier::Frequency;
use crate::render::{Circle, Color, Segment, Triangle};

/// Relative slack on the period bound, absorbs rounding in the summed clock
const PERIOD_TOLERANCE: f64 = 1e-9;

/// Ordered sum of arrows, longest first, each starting at the previous tip
///
/// Records the traced path during the first fundamental period only.
#[derive(Debug, Clone, Default)]
pub struct ArrowChain {
    arrows: Vec<Arrow>,
    /// Tip of the last arrow
    tip: DVec2,
    path: Vec<DVec2>,
    /// GCD of all arrow frequencies (None while empty)
    fundamental: Option<Frequency>,
    /// Simulated time since the chain was built
    clock: f64,
}

impl ArrowChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arrow and rebuild the chain
    ///
    /// Arrows are re-sorted by descending length (stable), then every origin
    /// is recomputed as the sum of all preceding arrows at their current
    /// phases.
    pub fn insert(&mut self, length: f64, frequency: Frequency, phase: f64) {
        self.arrows.push(Arrow::new(length, frequency, phase, DVec2::ZERO));
        self.arrows.sort_by(|a, b| b.length().total_cmp(&a.length()));

        for i in 0..self.arrows.len() {
            let origin = sum_offsets(&self.arrows[..i]);
            self.arrows[i].set_origin(origin);
        }

        self.tip = self.last_tip();
        self.fundamental = Frequency::gcd_all(self.arrows.iter().map(Arrow::frequency));
        debug!(
            "Inserted arrow |{:.4}| @ {} (chain of {}, fundamental {:?})",
            length,
            frequency,
            self.arrows.len(),
            self.fundamental.map(|f| f.to_string())
        );
    }

    /// GCD of every arrow frequency
    pub fn fundamental_frequency(&self) -> Result<Frequency> {
        self.fundamental.ok_or_else(|| {
            EpicycleError::InvalidState("fundamental frequency of an empty chain".to_string())
        })
    }

    /// Length of one full traversal, `None` while empty or when nothing rotates
    pub fn period(&self) -> Option<f64> {
        self.fundamental.and_then(|f| f.period())
    }

    /// Rotate every arrow by `dt` and propagate tips down the chain
    pub fn advance(&mut self, dt: f64) {
        if self.arrows.is_empty() {
            return;
        }

        self.clock += dt;
        for i in 0..self.arrows.len() {
            self.arrows[i].rotate(dt);
            if i + 1 < self.arrows.len() {
                let tip = self.arrows[i].tip();
                self.arrows[i + 1].set_origin(tip);
            }
        }

        self.tip = self.last_tip();
        if self.is_recording() {
            self.path.push(self.tip);
        }
    }

    /// Whether the next `advance` still belongs to the first period
    ///
    /// The clock is a float sum of `dt`, so a fractional step can land a few
    /// ulps past the period on the step that closes the curve.
    fn is_recording(&self) -> bool {
        match self.period() {
            Some(period) => self.clock <= period_bound(period),
            // Static chain: a single point is the whole curve
            None => self.path.is_empty(),
        }
    }

    /// True once the first period has been traced and the path is frozen
    pub fn is_path_complete(&self) -> bool {
        match self.period() {
            Some(period) => self.clock > period_bound(period),
            None => !self.path.is_empty(),
        }
    }

    fn last_tip(&self) -> DVec2 {
        self.arrows.last().map(Arrow::tip).unwrap_or(DVec2::ZERO)
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    pub fn len(&self) -> usize {
        self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrows.is_empty()
    }

    pub fn tip(&self) -> DVec2 {
        self.tip
    }

    pub fn path(&self) -> &[DVec2] {
        &self.path
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Shafts and arrowheads for every arrow
    pub fn emit_vectors(&self, color: Color) -> (Vec<Segment>, Vec<Triangle>) {
        let segments = self
            .arrows
            .iter()
            .map(|arrow| Segment {
                start: arrow.origin(),
                end: arrow.tip(),
                color,
                width: arrow.stroke_width(),
            })
            .collect();

        let triangles = self
            .arrows
            .iter()
            .filter_map(Arrow::pointer_shape)
            .map(|points| Triangle { points, color })
            .collect();

        (segments, triangles)
    }

    /// Orbit circles centered on each origin
    ///
    /// Circles smaller than `min_radius_px` once scaled by `unit_px` are left out.
    pub fn emit_circles(&self, color: Color, unit_px: f64, min_radius_px: f64) -> Vec<Circle> {
        self.arrows
            .iter()
            .filter(|arrow| arrow.length() * unit_px >= min_radius_px)
            .map(|arrow| Circle {
                center: arrow.origin(),
                radius: arrow.length(),
                color,
            })
            .collect()
    }

    /// Recorded path as consecutive segments
    pub fn emit_path(&self, color: Color, width: u32) -> Vec<Segment> {
        self.path
            .windows(2)
            .map(|pair| Segment {
                start: pair[0],
                end: pair[1],
                color,
                width,
            })
            .collect()
    }
}

/// Vector sum of arrows at their current phases
fn period_bound(period: f64) -> f64 {
    period * (1.0 + PERIOD_TOLERANCE)
}

fn sum_offsets(arrows: &[Arrow]) -> DVec2 {
    arrows
        .iter()
        .fold(DVec2::ZERO, |acc, arrow| acc + arrow.offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::num_complex::Complex64;
    use std::f64::consts::PI;

    use crate::fourier::{build_vectors, top_components, transform};

    fn freq(numer: i64, denom: i64) -> Frequency {
        Frequency::new(numer, denom).unwrap()
    }

    fn assert_chained(chain: &ArrowChain) {
        for pair in chain.arrows().windows(2) {
            assert_eq!(pair[1].origin(), pair[0].tip());
        }
        assert_eq!(chain.arrows()[0].origin(), DVec2::ZERO);
        assert_eq!(chain.tip(), chain.arrows().last().unwrap().tip());
    }

    fn mixed_chain() -> ArrowChain {
        let mut chain = ArrowChain::new();
        chain.insert(0.5, freq(1, 12), 0.3);
        chain.insert(2.0, freq(-1, 12), 1.1);
        chain.insert(1.0, freq(3, 12), -2.0);
        chain.insert(0.25, freq(5, 12), 2.7);
        chain
    }

    #[test]
    fn test_empty_chain() {
        let mut chain = ArrowChain::new();
        assert!(chain.is_empty());
        assert!(matches!(
            chain.fundamental_frequency(),
            Err(EpicycleError::InvalidState(_))
        ));

        chain.advance(1.0);
        assert_eq!(chain.clock(), 0.0);
        assert!(chain.path().is_empty());
    }

    #[test]
    fn test_insert_sorts_by_length() {
        let chain = mixed_chain();
        let lengths: Vec<f64> = chain.arrows().iter().map(Arrow::length).collect();
        assert_eq!(lengths, vec![2.0, 1.0, 0.5, 0.25]);
    }

    #[test]
    fn test_insert_sort_is_stable() {
        let mut chain = ArrowChain::new();
        chain.insert(1.0, freq(1, 5), 0.0);
        chain.insert(1.0, freq(2, 5), 0.0);
        chain.insert(1.0, freq(3, 5), 0.0);

        let freqs: Vec<Frequency> = chain.arrows().iter().map(Arrow::frequency).collect();
        assert_eq!(freqs, vec![freq(1, 5), freq(2, 5), freq(3, 5)]);
    }

    #[test]
    fn test_chaining_after_insert_and_advance() {
        let mut chain = mixed_chain();
        assert_chained(&chain);

        for _ in 0..37 {
            chain.advance(0.37);
            assert_chained(&chain);
        }
    }

    #[test]
    fn test_insert_uses_current_phases() {
        let mut chain = ArrowChain::new();
        chain.insert(2.0, freq(1, 4), 0.0);
        chain.advance(1.0);

        // The first arrow now points straight up
        chain.insert(1.0, freq(1, 2), 0.0);
        let second = &chain.arrows()[1];
        assert!((second.origin() - DVec2::new(0.0, 2.0)).length() < 1e-12);
        assert!((chain.tip() - DVec2::new(1.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn test_fundamental_of_quarters() {
        let mut chain = ArrowChain::new();
        chain.insert(1.0, freq(1, 4), 0.0);
        chain.insert(0.5, freq(2, 4), 0.0);
        chain.insert(0.25, freq(1, 4), 0.0);

        assert_eq!(chain.fundamental_frequency().unwrap(), freq(1, 4));
        assert_eq!(chain.period(), Some(4.0));
    }

    #[test]
    fn test_path_frozen_after_one_period() {
        let mut chain = ArrowChain::new();
        chain.insert(1.0, freq(1, 4), 0.0);
        chain.insert(0.5, freq(2, 4), 0.0);
        chain.insert(0.25, freq(1, 4), 0.0);

        for _ in 0..4 {
            chain.advance(1.0);
        }
        assert_eq!(chain.clock(), 4.0);
        assert_eq!(chain.path().len(), 4);
        assert!(!chain.is_path_complete());

        for _ in 0..10 {
            chain.advance(1.0);
        }
        assert_eq!(chain.path().len(), 4);
        assert!(chain.is_path_complete());
    }

    #[test]
    fn test_fractional_step_closes_curve() {
        let mut chain = ArrowChain::new();
        chain.insert(1.0, freq(1, 4), 0.0);

        // 40 steps of 0.1 sum to slightly more than 4.0
        for _ in 0..40 {
            chain.advance(0.1);
        }
        assert!(chain.clock() > 4.0);
        assert_eq!(chain.path().len(), 40);
        assert!(!chain.is_path_complete());

        // Last recorded point is back at the start of the circle
        let last = chain.path()[39];
        assert!((last - DVec2::new(1.0, 0.0)).length() < 1e-9);

        chain.advance(0.1);
        assert_eq!(chain.path().len(), 40);
        assert!(chain.is_path_complete());
    }

    #[test]
    fn test_single_arrow_traces_circle() {
        let f = freq(1, 50);
        let mut chain = ArrowChain::new();
        chain.insert(1.5, f, 0.4);
        assert_eq!(chain.fundamental_frequency().unwrap(), f);

        for _ in 0..80 {
            chain.advance(1.0);
        }
        assert_eq!(chain.path().len(), 50);
        for point in chain.path() {
            assert!((point.length() - 1.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_static_chain_records_single_point() {
        let mut chain = ArrowChain::new();
        chain.insert(0.75, Frequency::ZERO, PI);
        assert_eq!(chain.period(), None);

        chain.advance(1.0);
        chain.advance(1.0);
        assert_eq!(chain.path().len(), 1);
        assert!((chain.path()[0] - DVec2::new(-0.75, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_square_corners_reproduced() {
        let corners = [
            Complex64::new(1.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, -1.0),
        ];
        let spectrum = transform(&corners);
        let top = top_components(&spectrum, 4);

        let mut chain = ArrowChain::new();
        for spec in build_vectors(&top, corners.len()).unwrap() {
            chain.insert(spec.length, spec.frequency, spec.phase);
        }
        assert_eq!(chain.period(), Some(4.0));

        for _ in 0..8 {
            chain.advance(1.0);
        }
        assert_eq!(chain.path().len(), 4);

        // Point n of the path is sample (n + 1) mod 4
        for (n, point) in chain.path().iter().enumerate() {
            let expected = corners[(n + 1) % 4];
            assert!((point.x - expected.re).abs() < 1e-9);
            assert!((point.y - expected.im).abs() < 1e-9);
        }
    }

    #[test]
    fn test_emit_projections() {
        let mut chain = ArrowChain::new();
        chain.insert(1.0, freq(1, 4), 0.0);
        chain.insert(0.01, freq(1, 2), 0.0);
        chain.insert(0.0, freq(3, 4), 0.0);

        let red = [180, 40, 40];
        let (segments, triangles) = chain.emit_vectors(red);
        assert_eq!(segments.len(), 3);
        assert_eq!(triangles.len(), 2);
        assert_eq!(segments[0].width, 3);
        assert_eq!(segments[1].start, segments[0].end);

        // 0.01 * 100 px is below the 2 px minimum
        let circles = chain.emit_circles([60, 60, 60], 100.0, 2.0);
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].radius, 1.0);

        assert!(chain.emit_path(red, 3).is_empty());
        chain.advance(1.0);
        chain.advance(1.0);
        let path = chain.emit_path(red, 3);
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].start, chain.path()[0]);
        assert_eq!(path[0].end, chain.path()[1]);
    }
}
