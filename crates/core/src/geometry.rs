//! The normalized viewport and number formatting shared by path builders
//! and the markup serializer.

use glam::DVec2;

/// A point in the normalized viewport.
pub type Point = DVec2;

/// Side length of the normalized square viewport, in units.
pub const VIEWPORT_SIZE: f64 = 100.0;

/// Center of the normalized viewport.
pub const VIEWPORT_CENTER: Point = DVec2::new(VIEWPORT_SIZE / 2.0, VIEWPORT_SIZE / 2.0);

/// Formats a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    fmt_fixed(value, 2)
}

/// Formats `value` with at most `decimals` decimals and no trailing zeros.
///
/// `-0` is normalized to `0` so that tiny negative jitter does not change
/// the emitted markup.
pub fn fmt_fixed(value: f64, decimals: usize) -> String {
    let mut s = format!("{value:.decimals$}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Formats a point as `x,y`.
pub fn fmt_point(p: Point) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}
