//! A single rotating arrow.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::fourier::Frequency;

/// Rotating vector with a fixed length and exact rational frequency
///
/// The origin is positioned by the owning chain; the arrow keeps its own tip
/// consistent whenever origin or phase change.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    length: f64,
    frequency: Frequency,
    /// Current angle (radians)
    phase: f64,
    origin: DVec2,
    tip: DVec2,
}

impl Arrow {
    pub fn new(length: f64, frequency: Frequency, phase: f64, origin: DVec2) -> Self {
        let mut arrow = Self {
            length,
            frequency,
            phase,
            origin,
            tip: origin,
        };
        arrow.update_tip();
        arrow
    }

    /// Advance the phase by `2 pi f dt`
    pub fn rotate(&mut self, dt: f64) {
        self.phase += TAU * self.frequency.to_f64() * dt;
        self.update_tip();
    }

    pub fn set_origin(&mut self, origin: DVec2) {
        self.origin = origin;
        self.update_tip();
    }

    fn update_tip(&mut self) {
        self.tip = self.origin + self.offset();
    }

    /// Arrow as a free vector at its current phase
    pub fn offset(&self) -> DVec2 {
        self.length * DVec2::from_angle(self.phase)
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn tip(&self) -> DVec2 {
        self.tip
    }

    /// Arrowhead triangle `[apex, left, right]` with side `length / 10`
    ///
    /// The apex sits on the tip and the base is centered on the shaft.
    /// Zero-length arrows have no direction and get no arrowhead.
    pub fn pointer_shape(&self) -> Option<[DVec2; 3]> {
        if self.length <= 0.0 {
            return None;
        }

        let side = self.length / 10.0;
        let height = (side * side - (side / 2.0).powi(2)).sqrt();
        let direction = DVec2::from_angle(self.phase);
        let normal = direction.perp();

        let base = self.tip - height * direction;
        Some([
            self.tip,
            base + side / 2.0 * normal,
            base - side / 2.0 * normal,
        ])
    }

    pub fn stroke_width(&self) -> u32 {
        stroke_width(self.length)
    }
}

/// Shaft width (pixels) for an arrow of the given length (curve units)
pub fn stroke_width(length: f64) -> u32 {
    if length > 1.0 {
        4
    } else if length > 0.7 {
        3
    } else if length > 0.1 {
        2
    } else {
        1
    }
}
