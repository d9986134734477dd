//! Drawable primitives handed to a renderer, in curve units.

use glam::DVec2;

/// RGB color
pub type Color = [u8; 3];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
    pub color: Color,
    /// Stroke width (pixels)
    pub width: u32,
}

/// Circle outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    pub color: Color,
}

/// Filled triangle (arrowheads)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub points: [DVec2; 3],
    pub color: Color,
}

/// Everything drawn for one frame
///
/// Renderers paint the layers back to front: path, circles, arrow shafts,
/// arrowheads.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub path: Vec<Segment>,
    pub circles: Vec<Circle>,
    pub segments: Vec<Segment>,
    pub triangles: Vec<Triangle>,
}
