//! Low-poly triangulation of a jittered grid.

use backdrop_core::color::{adjust_color, Rgb};
use backdrop_core::params::param_f64_in;
use backdrop_core::{Generator, Lcg, Palette, Point, Shape, VIEWPORT_SIZE};
use glam::DVec2;
use serde_json::{json, Value};

pub const DEFAULT_CELL_SIZE: f64 = 15.0;
pub const MIN_CELL_SIZE: f64 = 5.0;
pub const MAX_CELL_SIZE: f64 = 50.0;
pub const DEFAULT_VARIANCE: f64 = 50.0;

/// Largest per-triangle shading offset, in channel steps.
const MAX_SHADE: i32 = 25;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPoly {
    /// Grid spacing in viewport units.
    pub cell_size: f64,
    /// Jitter as a percentage of the cell size.
    pub variance: f64,
}

impl Default for LowPoly {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            variance: DEFAULT_VARIANCE,
        }
    }
}

impl LowPoly {
    /// Extracts parameters from a JSON object, clamped to their ranges.
    pub fn from_json(params: &Value) -> Self {
        Self {
            cell_size: param_f64_in(
                params,
                "cell_size",
                DEFAULT_CELL_SIZE,
                MIN_CELL_SIZE,
                MAX_CELL_SIZE,
            ),
            variance: param_f64_in(params, "variance", DEFAULT_VARIANCE, 0.0, 100.0),
        }
    }

    /// Grid points per row (and per column): `ceil(100 / cell_size) + 1`.
    ///
    /// Returns 0 for a non-positive cell size.
    pub fn grid_len(&self) -> usize {
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return 0;
        }
        (VIEWPORT_SIZE / self.cell_size).ceil() as usize + 1
    }

    /// Number of triangles a full generation emits.
    pub fn triangle_count(&self) -> usize {
        let cells = self.grid_len().saturating_sub(1);
        2 * cells * cells
    }

    /// Row-major grid of points; only interior points are jittered so the
    /// outer ring keeps covering the viewport edges.
    fn grid(&self, rng: &mut Lcg) -> Vec<Point> {
        let n = self.grid_len();
        let jitter = self.variance / 100.0 * self.cell_size;
        let mut points = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let offset = DVec2::new(rng.next_f64() - 0.5, rng.next_f64() - 0.5) * jitter;
                let edge = row == 0 || col == 0 || row == n - 1 || col == n - 1;
                let base = DVec2::new(col as f64, row as f64) * self.cell_size;
                points.push(if edge { base } else { base + offset });
            }
        }
        points
    }
}

/// Picks a random palette entry and shades it by a random offset in
/// `[-25, 25]`, clamping after the offset is applied.
fn shade(rng: &mut Lcg, palette: &Palette) -> Rgb {
    let base = palette.cyclic(rng.next_usize(palette.len()));
    let offset = rng.next_usize((2 * MAX_SHADE + 1) as usize) as i32 - MAX_SHADE;
    adjust_color(base, offset)
}

impl Generator for LowPoly {
    fn generate(&self, rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        let n = self.grid_len();
        if n < 2 {
            return Vec::new();
        }
        let grid = self.grid(rng);
        let at = |row: usize, col: usize| grid[row * n + col];

        let mut triangles = Vec::with_capacity(self.triangle_count());
        for row in 0..n - 1 {
            for col in 0..n - 1 {
                let a = at(row, col);
                let b = at(row, col + 1);
                let c = at(row + 1, col);
                let d = at(row + 1, col + 1);
                for points in [vec![a, b, d], vec![a, d, c]] {
                    triangles.push(Shape::Polygon {
                        points,
                        fill: shade(rng, palette),
                    });
                }
            }
        }
        triangles
    }

    fn params(&self) -> Value {
        json!({
            "cell_size": self.cell_size,
            "variance": self.variance,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "cell_size": {
                "type": "number",
                "default": DEFAULT_CELL_SIZE,
                "min": MIN_CELL_SIZE,
                "max": MAX_CELL_SIZE,
                "description": "Grid spacing in viewport units"
            },
            "variance": {
                "type": "number",
                "default": DEFAULT_VARIANCE,
                "min": 0.0,
                "max": 100.0,
                "description": "Point jitter as a percentage of the cell size"
            }
        })
    }
}
