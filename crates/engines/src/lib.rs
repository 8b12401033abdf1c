#![deny(unsafe_code)]
//! Generator registry, scene composition, and export.
//!
//! This crate sits between `backdrop-core` (which defines the `Generator`
//! trait and the scene model) and `backdrop-shapes` (the generators). The
//! CLI and any other host depend on this crate so that variant dispatch,
//! markup serialization and rasterization live in one place.

pub mod compose;
pub mod export;
pub mod pixel;
pub mod raster;
pub mod svg;
pub mod viewport;

#[cfg(feature = "png")]
pub mod snapshot;

pub use compose::{compose, compose_named, compose_recipe};
pub use export::{export, ExportRequest, Exported};
pub use raster::RasterImage;
pub use viewport::ViewportTransform;

use backdrop_core::{Generator, Lcg, Palette, Shape};
use backdrop_shapes::{Blob, Circles, DepthScene, LayeredWaves, LowPoly, Peaks, Scatter, Wave};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The generator variants, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Variant {
    Blob,
    Wave,
    Circles,
    Scatter,
    Scene,
    LayeredWaves,
    LowPoly,
    Peaks,
}

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::Blob,
        Variant::Wave,
        Variant::Circles,
        Variant::Scatter,
        Variant::Scene,
        Variant::LayeredWaves,
        Variant::LowPoly,
        Variant::Peaks,
    ];

    /// Canonical (camelCase) name.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Blob => "blob",
            Variant::Wave => "wave",
            Variant::Circles => "circles",
            Variant::Scatter => "scatter",
            Variant::Scene => "scene",
            Variant::LayeredWaves => "layeredWaves",
            Variant::LowPoly => "lowPoly",
            Variant::Peaks => "peaks",
        }
    }

    /// Parses a variant name. Case, `-` and `_` are ignored, so
    /// `layeredWaves`, `layered-waves` and `LAYERED_WAVES` are equivalent.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(&key))
    }

    /// Canonical names of all variants.
    pub fn list_names() -> Vec<&'static str> {
        Variant::ALL.iter().map(|v| v.name()).collect()
    }
}

/// A configured generator of any variant.
///
/// Wraps each generator's params and delegates [`Generator`] methods.
/// Use [`GeneratorKind::from_name`] for string-based construction (CLI,
/// recipes).
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorKind {
    Blob(Blob),
    Wave(Wave),
    Circles(Circles),
    Scatter(Scatter),
    Scene(DepthScene),
    LayeredWaves(LayeredWaves),
    LowPoly(LowPoly),
    Peaks(Peaks),
}

impl GeneratorKind {
    /// Builds the generator for `variant` from a JSON params object, clamping
    /// every value into its documented range.
    pub fn from_variant(variant: Variant, params: &Value) -> Self {
        match variant {
            Variant::Blob => GeneratorKind::Blob(Blob::from_json(params)),
            Variant::Wave => GeneratorKind::Wave(Wave::from_json(params)),
            Variant::Circles => GeneratorKind::Circles(Circles::from_json(params)),
            Variant::Scatter => GeneratorKind::Scatter(Scatter::from_json(params)),
            Variant::Scene => GeneratorKind::Scene(DepthScene::from_json(params)),
            Variant::LayeredWaves => GeneratorKind::LayeredWaves(LayeredWaves::from_json(params)),
            Variant::LowPoly => GeneratorKind::LowPoly(LowPoly::from_json(params)),
            Variant::Peaks => GeneratorKind::Peaks(Peaks::from_json(params)),
        }
    }

    /// Builds a generator by variant name; `None` if the name is unknown.
    pub fn from_name(name: &str, params: &Value) -> Option<Self> {
        Variant::from_name(name).map(|v| Self::from_variant(v, params))
    }

    pub fn variant(&self) -> Variant {
        match self {
            GeneratorKind::Blob(_) => Variant::Blob,
            GeneratorKind::Wave(_) => Variant::Wave,
            GeneratorKind::Circles(_) => Variant::Circles,
            GeneratorKind::Scatter(_) => Variant::Scatter,
            GeneratorKind::Scene(_) => Variant::Scene,
            GeneratorKind::LayeredWaves(_) => Variant::LayeredWaves,
            GeneratorKind::LowPoly(_) => Variant::LowPoly,
            GeneratorKind::Peaks(_) => Variant::Peaks,
        }
    }

    fn inner(&self) -> &dyn Generator {
        match self {
            GeneratorKind::Blob(g) => g,
            GeneratorKind::Wave(g) => g,
            GeneratorKind::Circles(g) => g,
            GeneratorKind::Scatter(g) => g,
            GeneratorKind::Scene(g) => g,
            GeneratorKind::LayeredWaves(g) => g,
            GeneratorKind::LowPoly(g) => g,
            GeneratorKind::Peaks(g) => g,
        }
    }
}

impl Generator for GeneratorKind {
    fn generate(&self, rng: &mut Lcg, palette: &Palette) -> Vec<Shape> {
        self.inner().generate(rng, palette)
    }

    fn params(&self) -> Value {
        self.inner().params()
    }

    fn param_schema(&self) -> Value {
        self.inner().param_schema()
    }
}
