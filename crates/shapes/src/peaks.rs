//! Jagged mountain silhouettes, each layer lower and more detailed.

use crate::filled_silhouette;
use backdrop_core::params::{param_f64_in, param_usize_in};
use backdrop_core::{Generator, Lcg, Palette, Point, Shape, VIEWPORT_SIZE};
use glam::DVec2;
use serde_json::{json, Value};

pub const DEFAULT_LAYERS: usize = 4;
pub const MIN_LAYERS: usize = 1;
pub const MAX_LAYERS: usize = 6;
pub const DEFAULT_JAGGEDNESS: f64 = 50.0;
pub const DEFAULT_PEAK_HEIGHT: f64 = 40.0;
pub const MIN_PEAK_HEIGHT: f64 = 10.0;
pub const MAX_PEAK_HEIGHT: f64 = 80.0;

/// Segments of the back layer.
const BASE_SEGMENTS: usize = 5;
/// Extra segments per layer towards the front.
const SEGMENT_GROWTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peaks {
    pub layers: usize,
    /// Vertical jitter as a percentage of the peak height.
    pub jaggedness: f64,
    /// Height of the back ridge above the bottom edge, in viewport units.
    pub peak_height: f64,
}

impl Default for Peaks {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS,
            jaggedness: DEFAULT_JAGGEDNESS,
            peak_height: DEFAULT_PEAK_HEIGHT,
        }
    }
}

impl Peaks {
    /// Extracts parameters from a JSON object, clamped to their ranges.
    pub fn from_json(params: &Value) -> Self {
        Self {
            layers: param_usize_in(params, "layers", DEFAULT_LAYERS, MIN_LAYERS, MAX_LAYERS),
            jaggedness: param_f64_in(params, "jaggedness", DEFAULT_JAGGEDNESS, 0.0, 100.0),
            peak_height: param_f64_in(
                params,
                "peak_height",
                DEFAULT_PEAK_HEIGHT,
                MIN_PEAK_HEIGHT,
                MAX_PEAK_HEIGHT,
            ),
        }
    }

    /// Baseline `y` of `layer`: the back ridge sits `peak_height` above the
    /// bottom edge and each following layer drops by `peak_height / layers`.
    pub fn baseline(&self, layer: usize) -> f64 {
        VIEWPORT_SIZE - self.peak_height
            + layer as f64 * self.peak_height / self.layers.max(1) as f64
    }
}

impl Generator for Peaks {
    fn generate(&self, rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        let amplitude = self.peak_height * self.jaggedness / 100.0;
        (0..self.layers)
            .map(|layer| {
                let baseline = self.baseline(layer);
                let segments = BASE_SEGMENTS + layer * SEGMENT_GROWTH;
                let ridge: Vec<Point> = (0..=segments)
                    .map(|i| {
                        let x = i as f64 / segments as f64 * VIEWPORT_SIZE;
                        DVec2::new(x, baseline - rng.next_f64() * amplitude)
                    })
                    .collect();
                Shape::path(filled_silhouette(&ridge), palette.cyclic(layer + 1), 1.0)
            })
            .collect()
    }

    fn params(&self) -> Value {
        json!({
            "layers": self.layers,
            "jaggedness": self.jaggedness,
            "peak_height": self.peak_height,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "layers": {
                "type": "integer",
                "default": DEFAULT_LAYERS,
                "min": MIN_LAYERS,
                "max": MAX_LAYERS,
                "description": "Number of mountain ridges"
            },
            "jaggedness": {
                "type": "number",
                "default": DEFAULT_JAGGEDNESS,
                "min": 0.0,
                "max": 100.0,
                "description": "Vertical jitter as a percentage of the peak height"
            },
            "peak_height": {
                "type": "number",
                "default": DEFAULT_PEAK_HEIGHT,
                "min": MIN_PEAK_HEIGHT,
                "max": MAX_PEAK_HEIGHT,
                "description": "Height of the back ridge above the bottom edge"
            }
        })
    }
}
