//! Curve input: spacing-based resampling, preset shapes and points files.
//!
//! Input arrives as screen-space points (pixels, y pointing down), the way a
//! mouse drag would deliver them. The `Resampler` fills gaps wider than the
//! sample spacing so the curve is evenly parametrized in time, then
//! `to_samples` maps everything onto the complex plane.

use std::f64::consts::{PI, TAU};
use std::fs;
use std::path::Path;

use glam::DVec2;
use rustfft::num_complex::Complex64;

use crate::error::{EpicycleError, Result};

/// Evenly spaced points strictly between `p1` and `p2`
///
/// Neighbouring points (including the endpoints) end up at most `spacing`
/// apart. A spacing of zero disables interpolation.
pub fn points_on_line(p1: DVec2, p2: DVec2, spacing: f64) -> Vec<DVec2> {
    if spacing <= 0.0 {
        return Vec::new();
    }
    let segments = (p1.distance(p2) / spacing).ceil() as usize;
    (1..segments)
        .map(|i| p1.lerp(p2, i as f64 / segments as f64))
        .collect()
}

/// Accumulates a freehand stroke, keeping neighbouring points within spacing
#[derive(Debug, Clone)]
pub struct Resampler {
    spacing: f64,
    points: Vec<DVec2>,
}

impl Resampler {
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing,
            points: Vec::new(),
        }
    }

    /// Append a stroke point, bridging a long jump from the previous one
    pub fn push(&mut self, point: DVec2) {
        if let Some(&last) = self.points.last() {
            if last.distance(point) > self.spacing {
                self.points.extend(points_on_line(last, point, self.spacing));
            }
        }
        self.points.push(point);
    }

    pub fn extend(&mut self, points: impl IntoIterator<Item = DVec2>) {
        for point in points {
            self.push(point);
        }
    }

    /// Bridge the gap from the last point back to the first
    pub fn close(&mut self) {
        if self.points.len() < 2 {
            return;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if last.distance(first) > self.spacing {
            self.points.extend(points_on_line(last, first, self.spacing));
        }
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Screen points to complex curve samples: `(x - ox)/unit - i (y - oy)/unit`
pub fn to_samples(points: &[DVec2], screen_origin: DVec2, unit_px: f64) -> Vec<Complex64> {
    points
        .iter()
        .map(|p| {
            Complex64::new(
                (p.x - screen_origin.x) / unit_px,
                -(p.y - screen_origin.y) / unit_px,
            )
        })
        .collect()
}

/// Curve coordinates (y up) to screen coordinates (y down)
pub fn curve_to_screen(point: DVec2, screen_origin: DVec2, unit_px: f64) -> DVec2 {
    DVec2::new(
        screen_origin.x + point.x * unit_px,
        screen_origin.y - point.y * unit_px,
    )
}

/// Read `x,y` lines (curve units) from a points file
///
/// Blank lines and lines starting with `#` are skipped. Coordinates may be
/// separated by commas or whitespace.
pub fn load_points(path: &Path) -> Result<Vec<DVec2>> {
    let content = fs::read_to_string(path)?;
    let mut points = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parse_error = || EpicycleError::ParsePoint {
            path: path.to_path_buf(),
            line: idx + 1,
            content: line.to_string(),
        };

        let coords = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse::<f64>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| parse_error())?;

        match coords.as_slice() {
            [x, y] => points.push(DVec2::new(*x, *y)),
            _ => return Err(parse_error()),
        }
    }

    Ok(points)
}

/// Built-in curves standing in for a hand-drawn stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapePreset {
    Circle,
    Square,
    Star,
    Heart,
    FigureEight,
}

impl ShapePreset {
    pub const ALL: [ShapePreset; 5] = [
        ShapePreset::Circle,
        ShapePreset::Square,
        ShapePreset::Star,
        ShapePreset::Heart,
        ShapePreset::FigureEight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapePreset::Circle => "circle",
            ShapePreset::Square => "square",
            ShapePreset::Star => "star",
            ShapePreset::Heart => "heart",
            ShapePreset::FigureEight => "figure-eight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    /// Coarse stroke vertices in screen space (y down), `size_px` = outer radius
    ///
    /// Not closed and not evenly spaced; run through a `Resampler`.
    pub fn drag_path(&self, center: DVec2, size_px: f64) -> Vec<DVec2> {
        // Math coordinates (y up) relative to the center, flipped at the end
        let outline: Vec<DVec2> = match self {
            ShapePreset::Circle => (0..24)
                .map(|i| size_px * DVec2::from_angle(TAU * i as f64 / 24.0))
                .collect(),
            ShapePreset::Square => vec![
                DVec2::new(size_px, size_px),
                DVec2::new(-size_px, size_px),
                DVec2::new(-size_px, -size_px),
                DVec2::new(size_px, -size_px),
            ],
            ShapePreset::Star => (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { size_px } else { 0.45 * size_px };
                    radius * DVec2::from_angle(PI / 2.0 + i as f64 * PI / 5.0)
                })
                .collect(),
            ShapePreset::Heart => (0..48)
                .map(|i| {
                    let t = TAU * i as f64 / 48.0;
                    let x = 16.0 * t.sin().powi(3);
                    let y = 13.0 * t.cos()
                        - 5.0 * (2.0 * t).cos()
                        - 2.0 * (3.0 * t).cos()
                        - (4.0 * t).cos();
                    DVec2::new(x, y) * (size_px / 17.0)
                })
                .collect(),
            ShapePreset::FigureEight => (0..48)
                .map(|i| {
                    let t = TAU * i as f64 / 48.0;
                    let denom = 1.0 + t.sin().powi(2);
                    DVec2::new(t.cos() / denom, t.sin() * t.cos() / denom) * size_px
                })
                .collect(),
        };

        outline
            .into_iter()
            .map(|p| DVec2::new(center.x + p.x, center.y - p.y))
            .collect()
    }
}
