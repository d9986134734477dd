//! Software rasterizer for scenes, used by recording mode.

use std::f64::consts::TAU;
use std::fs;
use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};

use super::scene::{Circle, Color, Scene, Segment, Triangle};
use crate::error::Result;
use crate::params::{RecordingConfig, RenderConfig};

/// Frame buffer mapping curve units onto pixels
///
/// The curve origin sits at the image center and y points up.
pub struct Canvas {
    image: RgbImage,
    unit_px: f64,
    center: DVec2,
}

impl Canvas {
    pub fn new(config: &RenderConfig) -> Self {
        let mut canvas = Self {
            image: RgbImage::new(config.window_width, config.window_height),
            unit_px: config.unit_px,
            center: config.screen_origin(),
        };
        canvas.clear(config.background_color);
        canvas
    }

    pub fn clear(&mut self, color: Color) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgb(color);
        }
    }

    /// Curve coordinates to pixel coordinates
    pub fn to_pixel(&self, point: DVec2) -> DVec2 {
        DVec2::new(
            self.center.x + point.x * self.unit_px,
            self.center.y - point.y * self.unit_px,
        )
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Paint a whole scene back to front
    pub fn draw_scene(&mut self, scene: &Scene) {
        for segment in &scene.path {
            self.draw_segment(segment);
        }
        for circle in &scene.circles {
            self.draw_circle(circle);
        }
        for segment in &scene.segments {
            self.draw_segment(segment);
        }
        for triangle in &scene.triangles {
            self.fill_triangle(triangle);
        }
    }

    /// Thick line, stamped as squares of the stroke width
    pub fn draw_segment(&mut self, segment: &Segment) {
        let start = self.to_pixel(segment.start);
        let end = self.to_pixel(segment.end);
        let steps = (end - start).length().ceil().max(1.0) as usize;
        let size = segment.width.max(1) as i64;
        let half = (size - 1) as f64 / 2.0;

        for step in 0..=steps {
            let p = start.lerp(end, step as f64 / steps as f64);
            let x0 = (p.x - half).round() as i64;
            let y0 = (p.y - half).round() as i64;
            for y in y0..y0 + size {
                for x in x0..x0 + size {
                    self.put(x, y, segment.color);
                }
            }
        }
    }

    /// One pixel wide circle outline
    pub fn draw_circle(&mut self, circle: &Circle) {
        let center = self.to_pixel(circle.center);
        let radius = circle.radius * self.unit_px;
        // Enough samples to leave no gaps along the circumference
        let steps = (TAU * radius).ceil().max(8.0) as usize;

        for step in 0..steps {
            let angle = TAU * step as f64 / steps as f64;
            let p = center + radius * DVec2::from_angle(angle);
            self.put(p.x.round() as i64, p.y.round() as i64, circle.color);
        }
    }

    /// Filled triangle via edge functions over its bounding box
    pub fn fill_triangle(&mut self, triangle: &Triangle) {
        let [a, b, c] = triangle.points.map(|p| self.to_pixel(p));

        let area = edge(a, b, c);
        if area == 0.0 {
            return;
        }

        let min = a.min(b).min(c).floor();
        let max = a.max(b).max(c).ceil();
        for y in min.y as i64..=max.y as i64 {
            for x in min.x as i64..=max.x as i64 {
                let p = DVec2::new(x as f64 + 0.5, y as f64 + 0.5);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.put(x, y, triangle.color);
                }
            }
        }
    }

    /// Small filled dot, used to mark raw sample points
    pub fn draw_dot(&mut self, point: DVec2, radius_px: i64, color: Color) {
        let p = self.to_pixel(point);
        let (cx, cy) = (p.x.round() as i64, p.y.round() as i64);
        for dy in -radius_px..=radius_px {
            for dx in -radius_px..=radius_px {
                if dx * dx + dy * dy <= radius_px * radius_px {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, Rgb(color));
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }
}

fn edge(a: DVec2, b: DVec2, p: DVec2) -> f64 {
    (b - a).perp_dot(p - a)
}

/// Writes numbered PNG frames into the recording directory
pub struct FrameRecorder {
    config: RecordingConfig,
    frames_written: usize,
}

impl FrameRecorder {
    /// Create the frames directory if needed
    pub fn new(config: RecordingConfig) -> Result<Self> {
        fs::create_dir_all(config.frames_dir())?;
        Ok(Self {
            config,
            frames_written: 0,
        })
    }

    pub fn write(&mut self, canvas: &Canvas) -> Result<()> {
        canvas.save(self.config.frame_path(self.frames_written))?;
        self.frames_written += 1;
        Ok(())
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }
}
