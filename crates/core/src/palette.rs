//! Ordered palette of 2 to 5 colors, plus the built-in preset table.
//!
//! Generators index a palette positionally ([`Palette::get`]) or cyclically
//! ([`Palette::cyclic`]); order therefore matters. The first color doubles as
//! the scene background.
//!
//! Bounds are enforced at the mutation boundary: constructors reject
//! out-of-range inputs, while [`Palette::push`] and [`Palette::remove`] are
//! silent no-ops when they would break the bounds.

use crate::color::Rgb;
use crate::error::BackdropError;
use serde::{Deserialize, Serialize};

/// A named palette preset.
#[derive(Debug, Clone, Copy)]
pub struct PalettePreset {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

/// Built-in presets, in display order.
pub const PRESETS: &[PalettePreset] = &[
    PalettePreset {
        name: "ocean",
        colors: &["#001f3f", "#005f73", "#0a9396", "#94d2bd", "#e9d8a6"],
    },
    PalettePreset {
        name: "sunset",
        colors: &["#2d1b4e", "#9e2a2b", "#e76f51", "#f4a261", "#e9c46a"],
    },
    PalettePreset {
        name: "forest",
        colors: &["#1b2d1f", "#2d6a4f", "#52b788", "#b7e4c7"],
    },
    PalettePreset {
        name: "neon",
        colors: &["#0d0221", "#ff00ff", "#00ff41", "#00ffff"],
    },
    PalettePreset {
        name: "earth",
        colors: &["#5c4033", "#8b6914", "#6b8e23", "#daa520", "#d2b48c"],
    },
    PalettePreset {
        name: "monochrome",
        colors: &["#111111", "#555555", "#999999", "#dddddd"],
    },
    PalettePreset {
        name: "vapor",
        colors: &["#7b2d8e", "#c77dff", "#ff9ebb", "#80ced6", "#a0e7e5"],
    },
    PalettePreset {
        name: "pastel",
        colors: &["#fef6e4", "#f582ae", "#8bd3dd"],
    },
];

/// Ordered palette of [`Palette::MIN_COLORS`]..=[`Palette::MAX_COLORS`] colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub const MIN_COLORS: usize = 2;
    pub const MAX_COLORS: usize = 5;

    /// Creates a palette, rejecting fewer than 2 or more than 5 colors.
    pub fn new(colors: Vec<Rgb>) -> Result<Self, BackdropError> {
        if !(Self::MIN_COLORS..=Self::MAX_COLORS).contains(&colors.len()) {
            return Err(BackdropError::InvalidPalette(format!(
                "palette requires {} to {} colors, got {}",
                Self::MIN_COLORS,
                Self::MAX_COLORS,
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    pub fn from_hex<S: AsRef<str>>(hexes: &[S]) -> Result<Self, BackdropError> {
        let colors = hexes
            .iter()
            .map(|h| Rgb::from_hex(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(colors)
    }

    /// Looks up a built-in preset by name (case insensitive).
    pub fn from_name(name: &str) -> Result<Self, BackdropError> {
        PRESETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| BackdropError::InvalidPalette(format!("unknown palette '{name}'")))
            .and_then(|p| Self::from_hex(p.colors))
    }

    /// Names of all built-in presets.
    pub fn list_names() -> Vec<&'static str> {
        PRESETS.iter().map(|p| p.name).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Color at `index`, if present.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    /// Color at `index` wrapped around the palette length.
    pub fn cyclic(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }

    /// Background color (the first entry).
    pub fn background(&self) -> Rgb {
        self.colors[0]
    }

    /// Appends a color. Returns `false` and leaves the palette unchanged
    /// when it already holds the maximum number of colors.
    pub fn push(&mut self, color: Rgb) -> bool {
        if self.colors.len() >= Self::MAX_COLORS {
            return false;
        }
        self.colors.push(color);
        true
    }

    /// Removes the color at `index`. Returns `None` and leaves the palette
    /// unchanged when it holds the minimum number of colors or `index` is
    /// out of range.
    pub fn remove(&mut self, index: usize) -> Option<Rgb> {
        if self.colors.len() <= Self::MIN_COLORS || index >= self.colors.len() {
            return None;
        }
        Some(self.colors.remove(index))
    }

    /// Hex strings of all colors, in order.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Rgb::new(0x00, 0x1f, 0x3f),
                Rgb::new(0x00, 0x5f, 0x73),
                Rgb::new(0x0a, 0x93, 0x96),
                Rgb::new(0x94, 0xd2, 0xbd),
                Rgb::new(0xe9, 0xd8, 0xa6),
            ],
        }
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = BackdropError;

    fn try_from(colors: Vec<Rgb>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Rgb> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
