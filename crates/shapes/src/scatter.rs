//! Many small blobs scattered over the viewport.

use crate::blob::{blob_path, DEFAULT_SMOOTHNESS};
use backdrop_core::params::{param_f64_in, param_usize_in};
use backdrop_core::{Generator, Lcg, Palette, Shape, VIEWPORT_CENTER, VIEWPORT_SIZE};
use glam::DVec2;
use serde_json::{json, Value};

pub const DEFAULT_COUNT: usize = 15;
pub const MIN_COUNT: usize = 5;
pub const MAX_COUNT: usize = 50;
pub const DEFAULT_SIZE_VARIANCE: f64 = 50.0;

/// Fewest control points per scattered blob.
const MIN_POINTS: usize = 5;
/// Number of distinct point counts (5 through 8).
const POINT_CHOICES: usize = 4;
const MIN_SCALE: f64 = 0.1;
const SCALE_RANGE: f64 = 0.25;
const MIN_OPACITY: f64 = 0.4;
const OPACITY_RANGE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub count: usize,
    /// Spread of blob sizes in [0, 100].
    pub size_variance: f64,
    pub smoothness: f64,
}

impl Default for Scatter {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            size_variance: DEFAULT_SIZE_VARIANCE,
            smoothness: DEFAULT_SMOOTHNESS,
        }
    }
}

impl Scatter {
    /// Extracts parameters from a JSON object, clamped to their ranges.
    pub fn from_json(params: &Value) -> Self {
        Self {
            count: param_usize_in(params, "count", DEFAULT_COUNT, MIN_COUNT, MAX_COUNT),
            size_variance: param_f64_in(
                params,
                "size_variance",
                DEFAULT_SIZE_VARIANCE,
                0.0,
                100.0,
            ),
            smoothness: param_f64_in(params, "smoothness", DEFAULT_SMOOTHNESS, 0.0, 100.0),
        }
    }
}

impl Generator for Scatter {
    fn generate(&self, rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        (0..self.count)
            .map(|i| {
                let points = MIN_POINTS + rng.next_usize(POINT_CHOICES);
                let center = DVec2::new(
                    rng.next_f64() * VIEWPORT_SIZE,
                    rng.next_f64() * VIEWPORT_SIZE,
                );
                let scale =
                    MIN_SCALE + rng.next_f64() * SCALE_RANGE * self.size_variance / 100.0;
                let opacity = MIN_OPACITY + rng.next_f64() * OPACITY_RANGE;
                let d = blob_path(rng, points, self.smoothness);
                // The blob is built around the viewport center; shift it so
                // the scaled copy is centered on `center`.
                Shape::group(
                    center - VIEWPORT_CENTER * scale,
                    scale,
                    vec![Shape::path(d, palette.cyclic(i + 1), opacity)],
                )
            })
            .collect()
    }

    fn params(&self) -> Value {
        json!({
            "count": self.count,
            "size_variance": self.size_variance,
            "smoothness": self.smoothness,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "count": {
                "type": "integer",
                "default": DEFAULT_COUNT,
                "min": MIN_COUNT,
                "max": MAX_COUNT,
                "description": "Number of scattered blobs"
            },
            "size_variance": {
                "type": "number",
                "default": DEFAULT_SIZE_VARIANCE,
                "min": 0.0,
                "max": 100.0,
                "description": "How much blob sizes differ from the smallest size"
            },
            "smoothness": {
                "type": "number",
                "default": DEFAULT_SMOOTHNESS,
                "min": 0.0,
                "max": 100.0,
                "description": "Radius jitter of each blob"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_group_per_blob_each_with_a_closed_path() {
        let shapes = Scatter::default().generate(&mut Lcg::new(8), &Palette::default());
        assert_eq!(shapes.len(), DEFAULT_COUNT);
        for shape in &shapes {
            let Shape::Group { children, .. } = shape else {
                panic!("expected group, got {shape:?}");
            };
            assert_eq!(children.len(), 1);
            let Shape::Path { d, .. } = &children[0] else {
                panic!("expected path");
            };
            assert!(d.is_closed(), "{d}");
            assert!((5..=8).contains(&d.cubic_count()), "{d}");
        }
    }

    #[test]
    fn zero_variance_uses_minimum_scale() {
        let scatter = Scatter {
            size_variance: 0.0,
            ..Scatter::default()
        };
        for shape in scatter.generate(&mut Lcg::new(2), &Palette::default()) {
            let Shape::Group { scale, .. } = shape else {
                panic!("expected group");
            };
            assert_eq!(scale, MIN_SCALE);
        }
    }

    #[test]
    fn translation_centers_the_scaled_blob() {
        let shapes = Scatter::default().generate(&mut Lcg::new(21), &Palette::default());
        for shape in shapes {
            let Shape::Group {
                translate, scale, ..
            } = shape
            else {
                panic!("expected group");
            };
            let center = translate + VIEWPORT_CENTER * scale;
            assert!((0.0..100.0).contains(&center.x) && (0.0..100.0).contains(&center.y));
        }
    }

    #[test]
    fn same_seed_same_scatter() {
        let palette = Palette::default();
        let a = Scatter::default().generate(&mut Lcg::new(5), &palette);
        let b = Scatter::default().generate(&mut Lcg::new(5), &palette);
        assert_eq!(a, b);
    }
}
