//! The explicit mapping from the normalized viewport to pixel space.
//!
//! Generators work in a fixed 100×100 unit square; raster exports can be any
//! size. The mapping is a non-uniform scale so the square always fills the
//! target rectangle exactly.

use backdrop_core::{Point, VIEWPORT_SIZE};
use glam::DVec2;
use resvg::tiny_skia;

/// Non-uniform scale from source units to target pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ViewportTransform {
    /// Maps the normalized 100×100 viewport onto `width`×`height` pixels.
    pub fn fit(width: u32, height: u32) -> Self {
        Self::fit_size(VIEWPORT_SIZE, VIEWPORT_SIZE, width, height)
    }

    /// Maps a `source_width`×`source_height` box onto `width`×`height` pixels.
    pub fn fit_size(source_width: f64, source_height: f64, width: u32, height: u32) -> Self {
        Self {
            scale_x: f64::from(width) / source_width,
            scale_y: f64::from(height) / source_height,
        }
    }

    /// Maps a point from source units to pixels.
    pub fn apply(&self, point: Point) -> Point {
        point * DVec2::new(self.scale_x, self.scale_y)
    }

    /// The same mapping as a rasterizer transform.
    pub fn to_skia(self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_scale(self.scale_x as f32, self.scale_y as f32)
    }
}
