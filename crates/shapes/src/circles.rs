//! Soft overlapping circles with a shared Gaussian blur.

use backdrop_core::params::{param_f64_in, param_usize_in};
use backdrop_core::{Generator, Lcg, Palette, Shape, VIEWPORT_SIZE};
use glam::DVec2;
use serde_json::{json, Value};

pub const DEFAULT_COUNT: usize = 8;
pub const MIN_COUNT: usize = 3;
pub const MAX_COUNT: usize = 30;
pub const DEFAULT_BLUR: f64 = 20.0;
pub const MAX_BLUR: f64 = 50.0;

const MIN_RADIUS: f64 = 10.0;
const RADIUS_RANGE: f64 = 30.0;
const MIN_OPACITY: f64 = 0.3;
const OPACITY_RANGE: f64 = 0.5;
/// Viewport units of standard deviation per unit of the blur control.
const BLUR_SCALE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circles {
    pub count: usize,
    /// Blur control in [0, 50]; 0 disables the filter.
    pub blur: f64,
}

impl Default for Circles {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            blur: DEFAULT_BLUR,
        }
    }
}

impl Circles {
    /// Extracts parameters from a JSON object, clamped to their ranges.
    pub fn from_json(params: &Value) -> Self {
        Self {
            count: param_usize_in(params, "count", DEFAULT_COUNT, MIN_COUNT, MAX_COUNT),
            blur: param_f64_in(params, "blur", DEFAULT_BLUR, 0.0, MAX_BLUR),
        }
    }

    /// Blur standard deviation in viewport units, if any.
    pub fn std_deviation(&self) -> Option<f64> {
        (self.blur > 0.0).then_some(self.blur * BLUR_SCALE)
    }
}

impl Generator for Circles {
    fn generate(&self, rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        let blur = self.std_deviation();
        (0..self.count)
            .map(|i| {
                let x = rng.next_f64() * VIEWPORT_SIZE;
                let y = rng.next_f64() * VIEWPORT_SIZE;
                let radius = MIN_RADIUS + rng.next_f64() * RADIUS_RANGE;
                let opacity = MIN_OPACITY + rng.next_f64() * OPACITY_RANGE;
                Shape::Circle {
                    center: DVec2::new(x, y),
                    radius,
                    fill: palette.cyclic(i + 1),
                    opacity,
                    blur,
                }
            })
            .collect()
    }

    fn params(&self) -> Value {
        json!({
            "count": self.count,
            "blur": self.blur,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "count": {
                "type": "integer",
                "default": DEFAULT_COUNT,
                "min": MIN_COUNT,
                "max": MAX_COUNT,
                "description": "Number of circles"
            },
            "blur": {
                "type": "number",
                "default": DEFAULT_BLUR,
                "min": 0.0,
                "max": MAX_BLUR,
                "description": "Gaussian blur strength; 0 draws sharp edges"
            }
        })
    }
}
