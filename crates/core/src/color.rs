//! 8-bit RGB color type and per-channel shading helpers.
//!
//! All color math here is plain integer arithmetic on the sRGB channels.
//! There is deliberately no perceptual color science: shading a color means
//! adding an offset to each channel and saturating at the byte range.

use crate::error::BackdropError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 24-bit RGB color.
///
/// Serializes as a lowercase hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#ff00aa", "ff00aa" or "#f0a"
    /// (case insensitive).
    ///
    /// Returns `BackdropError::InvalidColor` for anything else.
    pub fn from_hex(hex: &str) -> Result<Rgb, BackdropError> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(BackdropError::InvalidColor(format!(
                "'{hex}' contains non-hex characters"
            )));
        }
        let channel = |s: &str| {
            u8::from_str_radix(s, 16)
                .map_err(|e| BackdropError::InvalidColor(format!("'{hex}': {e}")))
        };
        match digits.len() {
            6 => Ok(Rgb {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Rgb {
                    r: short(0)?,
                    g: short(1)?,
                    b: short(2)?,
                })
            }
            n => Err(BackdropError::InvalidColor(format!(
                "expected 3 or 6 hex digits, got {n}"
            ))),
        }
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Packs the color into a 24-bit integer `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Adds `amount` to every channel, clamping each result to [0, 255].
///
/// The offset is applied first and the sum is clamped afterwards, so a
/// saturated channel stays saturated instead of wrapping.
pub fn adjust_color(color: Rgb, amount: i32) -> Rgb {
    let shift = |c: u8| (i32::from(c) + amount).clamp(0, 255) as u8;
    Rgb {
        r: shift(color.r),
        g: shift(color.g),
        b: shift(color.b),
    }
}

/// String form of [`adjust_color`].
///
/// Returns `None` when `hex` is not a parseable color.
pub fn adjust_hex(hex: &str, amount: i32) -> Option<String> {
    Rgb::from_hex(hex)
        .ok()
        .map(|c| adjust_color(c, amount).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Parsing --

    #[test]
    fn from_hex_parses_six_digits_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ff00aa").unwrap(), Rgb::new(255, 0, 170));
        assert_eq!(Rgb::from_hex("FF00AA").unwrap(), Rgb::new(255, 0, 170));
    }

    #[test]
    fn from_hex_expands_three_digit_shorthand() {
        assert_eq!(Rgb::from_hex("#f0a").unwrap(), Rgb::new(255, 0, 170));
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            Rgb::from_hex("#ff00"),
            Err(BackdropError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_characters() {
        assert!(Rgb::from_hex("#zzzzzz").is_err());
        assert!(Rgb::from_hex("#+1+1+1").is_err());
    }

    #[test]
    fn to_hex_is_lowercase_and_zero_padded() {
        assert_eq!(Rgb::new(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn to_u32_packs_channels() {
        assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_u32(), 0x123456);
    }

    #[test]
    fn parse_via_from_str() {
        let c: Rgb = "#0a9396".parse().unwrap();
        assert_eq!(c, Rgb::new(0x0a, 0x93, 0x96));
    }

    #[test]
    fn serde_uses_hex_string() {
        let c = Rgb::new(0, 95, 115);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#005f73\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        assert!(serde_json::from_str::<Rgb>("\"#nothex\"").is_err());
    }

    // -- Shading --

    #[test]
    fn adjust_color_saturates_instead_of_wrapping() {
        let c = adjust_color(Rgb::from_hex("#FF0000").unwrap(), 100);
        assert_eq!(c.r, 255, "red must clamp at 255, not wrap");
        assert_eq!(c.g, 0x64);
        assert_eq!(c.b, 0x64);
        assert!(c.to_hex().eq_ignore_ascii_case("#FF6464"));
    }

    #[test]
    fn adjust_color_clamps_at_zero() {
        let c = adjust_color(Rgb::BLACK, -100);
        assert_eq!(c, Rgb::BLACK);
    }

    #[test]
    fn adjust_color_zero_is_identity() {
        let c = Rgb::new(12, 200, 99);
        assert_eq!(adjust_color(c, 0), c);
    }

    #[test]
    fn adjust_color_offset_is_applied_before_clamping() {
        // 250 + 25 clamps to 255; clamping first would also give 255, but
        // 5 - 25 must give 0 and 240 - 25 must give 215 in the same call.
        let c = adjust_color(Rgb::new(250, 5, 240), -25);
        assert_eq!(c, Rgb::new(225, 0, 215));
        let c = adjust_color(Rgb::new(250, 5, 240), 25);
        assert_eq!(c, Rgb::new(255, 30, 255));
    }

    #[test]
    fn adjust_hex_degrades_to_none_on_bad_input() {
        assert_eq!(adjust_hex("not a color", 10), None);
        assert_eq!(adjust_hex("#101010", 16).as_deref(), Some("#202020"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn adjust_color_is_monotonic_per_channel(
                r: u8, g: u8, b: u8,
                amount in -300_i32..300,
            ) {
                let base = Rgb::new(r, g, b);
                let out = adjust_color(base, amount);
                if amount >= 0 {
                    prop_assert!(out.r >= base.r && out.g >= base.g && out.b >= base.b);
                } else {
                    prop_assert!(out.r <= base.r && out.g <= base.g && out.b <= base.b);
                }
            }

            #[test]
            fn hex_round_trip(r: u8, g: u8, b: u8) {
                let c = Rgb::new(r, g, b);
                prop_assert_eq!(Rgb::from_hex(&c.to_hex()).unwrap(), c);
            }
        }
    }
}
