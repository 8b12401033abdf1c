//! Reproducible description of a generated background.
//!
//! A [`Recipe`] captures everything needed to recreate a scene: generator
//! variant name, parameter overrides, PRNG seed, and palette.

use crate::palette::Palette;
use serde::{Deserialize, Serialize};

/// Reproducible generation request.
///
/// Two identical recipes fed to the same engine build produce
/// byte-identical markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub variant: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub seed: u64,
    #[serde(default)]
    pub palette: Palette,
}

impl Recipe {
    /// Creates a recipe with empty params (`{}`) and the default palette.
    pub fn new(variant: &str, seed: u64) -> Self {
        Self {
            variant: variant.to_string(),
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            palette: Palette::default(),
        }
    }

    /// Replaces the params object.
    pub fn with_params(mut self, params: serde_json::Value) -> Self {
        self.params = params;
        self
    }

    /// Replaces the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
