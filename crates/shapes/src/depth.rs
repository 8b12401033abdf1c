//! Three stacked blobs simulating background, midground and foreground.

use crate::blob::{blob_path, DEFAULT_SMOOTHNESS};
use backdrop_core::params::param_f64_in;
use backdrop_core::{Generator, Lcg, Palette, Shape, VIEWPORT_CENTER};
use glam::DVec2;
use serde_json::{json, Value};

/// One plane of the depth stack.
struct Plane {
    points: usize,
    scale: f64,
    center: DVec2,
    opacity: f64,
}

/// Back to front: complexity rises, size shrinks, opacity rises.
const PLANES: [Plane; 3] = [
    Plane {
        points: 6,
        scale: 1.2,
        center: DVec2::new(40.0, 45.0),
        opacity: 0.4,
    },
    Plane {
        points: 7,
        scale: 0.9,
        center: DVec2::new(60.0, 55.0),
        opacity: 0.6,
    },
    Plane {
        points: 8,
        scale: 0.6,
        center: DVec2::new(45.0, 70.0),
        opacity: 0.8,
    },
];

/// The "scene" variant: a layered blob composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthScene {
    pub smoothness: f64,
}

impl Default for DepthScene {
    fn default() -> Self {
        Self {
            smoothness: DEFAULT_SMOOTHNESS,
        }
    }
}

impl DepthScene {
    /// Extracts parameters from a JSON object, clamped to their ranges.
    pub fn from_json(params: &Value) -> Self {
        Self {
            smoothness: param_f64_in(params, "smoothness", DEFAULT_SMOOTHNESS, 0.0, 100.0),
        }
    }
}

impl Generator for DepthScene {
    fn generate(&self, rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        PLANES
            .iter()
            .enumerate()
            .map(|(i, plane)| {
                let d = blob_path(rng, plane.points, self.smoothness);
                Shape::group(
                    plane.center - VIEWPORT_CENTER * plane.scale,
                    plane.scale,
                    vec![Shape::path(d, palette.cyclic(i + 1), plane.opacity)],
                )
            })
            .collect()
    }

    fn params(&self) -> Value {
        json!({ "smoothness": self.smoothness })
    }

    fn param_schema(&self) -> Value {
        json!({
            "smoothness": {
                "type": "number",
                "default": DEFAULT_SMOOTHNESS,
                "min": 0.0,
                "max": 100.0,
                "description": "Radius jitter of each plane's blob"
            }
        })
    }
}
