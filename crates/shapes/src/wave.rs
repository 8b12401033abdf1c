//! Sine-wave bands stacked from the top of the viewport downwards.
//!
//! [`Wave`] blends translucent layers; [`LayeredWaves`] always draws four
//! opaque layers.

use crate::filled_silhouette;
use backdrop_core::geometry::{Point, VIEWPORT_SIZE};
use backdrop_core::params::{param_f64_in, param_usize_in};
use backdrop_core::{Generator, Lcg, Palette, Shape};
use glam::DVec2;
use serde_json::{json, Value};
use std::f64::consts::PI;

pub const DEFAULT_LAYERS: usize = 3;
pub const MIN_LAYERS: usize = 1;
pub const MAX_LAYERS: usize = 6;
pub const DEFAULT_AMPLITUDE: f64 = 10.0;
pub const MAX_AMPLITUDE: f64 = 30.0;
pub const DEFAULT_FREQUENCY: f64 = 2.0;
pub const MIN_FREQUENCY: f64 = 0.5;
pub const MAX_FREQUENCY: f64 = 5.0;

/// Fixed layer count of [`LayeredWaves`].
pub const LAYERED_WAVE_COUNT: usize = 4;

/// Baseline of the first layer.
const FIRST_BASELINE: f64 = 40.0;
/// Vertical distance shared out between all layer baselines.
const BASELINE_SPREAD: f64 = 50.0;
/// Horizontal sampling step.
const SAMPLE_STEP: usize = 2;
/// Per-layer amplitude damping and opacity increment.
const LAYER_FALLOFF: f64 = 0.15;
/// Opacity of the first translucent layer.
const BASE_OPACITY: f64 = 0.5;

/// Builds one filled band per layer.
///
/// Layer `l` of `L` sits on baseline `40 + l * 50 / L` and samples
/// `y = baseline - sin(x / 100 * PI * frequency + l) * amplitude * (1 - 0.15 * l)`
/// every two units.
fn wave_bands(
    layers: usize,
    amplitude: f64,
    frequency: f64,
    palette: &Palette,
    opacity: impl Fn(usize) -> f64,
) -> Vec<Shape> {
    (0..layers)
        .map(|layer| {
            let l = layer as f64;
            let baseline = FIRST_BASELINE + l * BASELINE_SPREAD / layers as f64;
            let damping = 1.0 - l * LAYER_FALLOFF;
            let points: Vec<Point> = (0..=VIEWPORT_SIZE as usize)
                .step_by(SAMPLE_STEP)
                .map(|x| {
                    let x = x as f64;
                    let phase = x / VIEWPORT_SIZE * PI * frequency + l;
                    DVec2::new(x, baseline - phase.sin() * amplitude * damping)
                })
                .collect();
            Shape::path(
                filled_silhouette(&points),
                palette.cyclic(layer + 1),
                opacity(layer),
            )
        })
        .collect()
}

/// Translucent stacked waves; opacity grows `0.5 + 0.15 * layer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave {
    pub layers: usize,
    pub amplitude: f64,
    pub frequency: f64,
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS,
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl Wave {
    /// Extracts parameters from a JSON object, clamped to their ranges.
    pub fn from_json(params: &Value) -> Self {
        Self {
            layers: param_usize_in(params, "layers", DEFAULT_LAYERS, MIN_LAYERS, MAX_LAYERS),
            amplitude: param_f64_in(params, "amplitude", DEFAULT_AMPLITUDE, 0.0, MAX_AMPLITUDE),
            frequency: param_f64_in(
                params,
                "frequency",
                DEFAULT_FREQUENCY,
                MIN_FREQUENCY,
                MAX_FREQUENCY,
            ),
        }
    }
}

impl Generator for Wave {
    fn generate(&self, _rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        wave_bands(self.layers, self.amplitude, self.frequency, palette, |layer| {
            (BASE_OPACITY + layer as f64 * LAYER_FALLOFF).min(1.0)
        })
    }

    fn params(&self) -> Value {
        json!({
            "layers": self.layers,
            "amplitude": self.amplitude,
            "frequency": self.frequency,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "layers": {
                "type": "integer",
                "default": DEFAULT_LAYERS,
                "min": MIN_LAYERS,
                "max": MAX_LAYERS,
                "description": "Number of stacked wave bands"
            },
            "amplitude": amplitude_schema(),
            "frequency": frequency_schema(),
        })
    }
}

/// Four opaque stacked waves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayeredWaves {
    pub amplitude: f64,
    pub frequency: f64,
}

impl Default for LayeredWaves {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl LayeredWaves {
    /// Extracts parameters from a JSON object, clamped to their ranges.
    pub fn from_json(params: &Value) -> Self {
        let wave = Wave::from_json(params);
        Self {
            amplitude: wave.amplitude,
            frequency: wave.frequency,
        }
    }
}

impl Generator for LayeredWaves {
    fn generate(&self, _rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        wave_bands(
            LAYERED_WAVE_COUNT,
            self.amplitude,
            self.frequency,
            palette,
            |_| 1.0,
        )
    }

    fn params(&self) -> Value {
        json!({
            "amplitude": self.amplitude,
            "frequency": self.frequency,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "amplitude": amplitude_schema(),
            "frequency": frequency_schema(),
        })
    }
}

fn amplitude_schema() -> Value {
    json!({
        "type": "number",
        "default": DEFAULT_AMPLITUDE,
        "min": 0.0,
        "max": MAX_AMPLITUDE,
        "description": "Peak height of the first band, in viewport units"
    })
}

fn frequency_schema() -> Value {
    json!({
        "type": "number",
        "default": DEFAULT_FREQUENCY,
        "min": MIN_FREQUENCY,
        "max": MAX_FREQUENCY,
        "description": "Half-periods across the viewport width"
    })
}
