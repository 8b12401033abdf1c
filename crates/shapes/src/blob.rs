//! Single organic blob: a closed spline through points placed evenly
//! around the viewport center with jittered radii.

use backdrop_core::curve::{smooth_path, PathData};
use backdrop_core::geometry::{Point, VIEWPORT_CENTER};
use backdrop_core::params::{param_f64_in, param_usize_in};
use backdrop_core::{Generator, Lcg, Palette, Shape};
use glam::DVec2;
use serde_json::{json, Value};
use std::f64::consts::TAU;

pub const DEFAULT_COMPLEXITY: usize = 6;
pub const MIN_COMPLEXITY: usize = 3;
pub const MAX_COMPLEXITY: usize = 12;
pub const DEFAULT_SMOOTHNESS: f64 = 70.0;

/// Radius every control point starts from, in viewport units.
const BASE_RADIUS: f64 = 40.0;
/// Largest extra radius added at full smoothness.
const RADIUS_JITTER: f64 = 20.0;

/// Places `count` points around the viewport center and closes them into a
/// smooth path.
///
/// Each radius is `40 + rng * 20 * smoothness / 100`; one random draw per
/// point, in angle order. Used by the blob, scatter and depth generators.
pub fn blob_path(rng: &mut Lcg, count: usize, smoothness: f64) -> PathData {
    let step = TAU / count.max(1) as f64;
    let points: Vec<Point> = (0..count)
        .map(|i| {
            let radius = BASE_RADIUS + rng.next_f64() * RADIUS_JITTER * smoothness / 100.0;
            VIEWPORT_CENTER + DVec2::from_angle(i as f64 * step) * radius
        })
        .collect();
    smooth_path(&points, true)
}

/// One filled blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    /// Number of control points.
    pub complexity: usize,
    /// Radius jitter in [0, 100].
    pub smoothness: f64,
}

impl Default for Blob {
    fn default() -> Self {
        Self {
            complexity: DEFAULT_COMPLEXITY,
            smoothness: DEFAULT_SMOOTHNESS,
        }
    }
}

impl Blob {
    /// Extracts parameters from a JSON object, clamped to their ranges.
    pub fn from_json(params: &Value) -> Self {
        Self {
            complexity: param_usize_in(
                params,
                "complexity",
                DEFAULT_COMPLEXITY,
                MIN_COMPLEXITY,
                MAX_COMPLEXITY,
            ),
            smoothness: param_f64_in(params, "smoothness", DEFAULT_SMOOTHNESS, 0.0, 100.0),
        }
    }
}

impl Generator for Blob {
    fn generate(&self, rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        let d = blob_path(rng, self.complexity, self.smoothness);
        vec![Shape::path(d, palette.cyclic(1), 1.0)]
    }

    fn params(&self) -> Value {
        json!({
            "complexity": self.complexity,
            "smoothness": self.smoothness,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "complexity": {
                "type": "integer",
                "default": DEFAULT_COMPLEXITY,
                "min": MIN_COMPLEXITY,
                "max": MAX_COMPLEXITY,
                "description": "Number of control points around the blob"
            },
            "smoothness": {
                "type": "number",
                "default": DEFAULT_SMOOTHNESS,
                "min": 0.0,
                "max": 100.0,
                "description": "Radius jitter as a percentage of the 20-unit maximum"
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(shape: &Shape) -> &PathData {
        match shape {
            Shape::Path { d, .. } => d,
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn seed_zero_complexity_six_is_one_closed_six_segment_path() {
        let blob = Blob {
            complexity: 6,
            smoothness: 70.0,
        };
        let shapes = blob.generate(&mut Lcg::new(0), &Palette::default());
        assert_eq!(shapes.len(), 1);
        let d = path_of(&shapes[0]);
        assert_eq!(d.cubic_count(), 6);
        assert!(d.is_closed());
    }

    #[test]
    fn repeated_generation_is_identical() {
        let blob = Blob::default();
        let palette = Palette::default();
        let a = blob.generate(&mut Lcg::new(0), &palette);
        let b = blob.generate(&mut Lcg::new(0), &palette);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_paths() {
        let blob = Blob::default();
        let palette = Palette::default();
        let a = blob.generate(&mut Lcg::new(1), &palette);
        let b = blob.generate(&mut Lcg::new(2), &palette);
        assert_ne!(a, b);
    }

    #[test]
    fn zero_smoothness_is_a_regular_polygon_spline() {
        let d = blob_path(&mut Lcg::new(5), 4, 0.0);
        // Radius is exactly 40, so the first point sits at (90, 50).
        assert!(d.as_str().starts_with("M 90,50 "), "{d}");
    }

    #[test]
    fn blob_path_draws_one_value_per_point() {
        let mut rng = Lcg::new(11);
        blob_path(&mut rng, 7, 50.0);
        let mut expected = Lcg::new(11);
        for _ in 0..7 {
            expected.next_u32();
        }
        assert_eq!(rng, expected);
    }

    #[test]
    fn fill_is_second_palette_entry() {
        let palette = Palette::default();
        let shapes = Blob::default().generate(&mut Lcg::new(3), &palette);
        match &shapes[0] {
            Shape::Path { fill, opacity, .. } => {
                assert_eq!(*fill, palette.cyclic(1));
                assert_eq!(*opacity, 1.0);
            }
            other => panic!("unexpected shape {other:?}"),
        }
    }

    #[test]
    fn degenerate_complexity_degrades_to_empty_path() {
        let blob = Blob {
            complexity: 1,
            smoothness: 50.0,
        };
        let shapes = blob.generate(&mut Lcg::new(0), &Palette::default());
        assert!(path_of(&shapes[0]).is_empty());
    }

    #[test]
    fn from_json_clamps_to_ranges() {
        let blob = Blob::from_json(&json!({"complexity": 99, "smoothness": -4}));
        assert_eq!(blob.complexity, MAX_COMPLEXITY);
        assert_eq!(blob.smoothness, 0.0);
        assert_eq!(Blob::from_json(&json!({})), Blob::default());
    }

    #[test]
    fn param_schema_describes_every_param() {
        let blob = Blob::default();
        let schema = blob.param_schema();
        for key in blob.params().as_object().unwrap().keys() {
            assert!(schema.get(key).is_some(), "schema missing parameter: {key}");
            assert!(schema[key].get("default").is_some(), "{key} missing default");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn blob_is_closed_with_one_segment_per_point(
                seed in 0u64..233_280,
                complexity in MIN_COMPLEXITY..=MAX_COMPLEXITY,
                smoothness in 0.0f64..=100.0,
            ) {
                let blob = Blob { complexity, smoothness };
                let shapes = blob.generate(&mut Lcg::new(seed), &Palette::default());
                let d = path_of(&shapes[0]);
                prop_assert!(d.is_closed());
                prop_assert_eq!(d.cubic_count(), complexity);
            }
        }
    }
}
