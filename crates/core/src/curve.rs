//! Catmull-Rom interpolation of control points into cubic Bézier path data.

use crate::geometry::{fmt_point, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SVG path data (the value of a `d` attribute).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathData(String);

impl PathData {
    pub fn new(d: impl Into<String>) -> Self {
        Self(d.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the path ends with an explicit close-path command.
    pub fn is_closed(&self) -> bool {
        self.0.trim_end().ends_with('Z')
    }

    /// Number of cubic segments in the path.
    pub fn cubic_count(&self) -> usize {
        self.0.matches('C').count()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a smooth path through every point with a cardinal spline.
///
/// For each point `p1` with neighbours `p0`, `p2`, `p3` the cubic segment
/// from `p1` to `p2` uses control points `p1 + (p2 - p0) / 6` and
/// `p2 - (p3 - p1) / 6`. Closed paths wrap neighbours around and end with
/// `Z`; open paths duplicate the end points. Fewer than two points yield an
/// empty path.
pub fn smooth_path(points: &[Point], closed: bool) -> PathData {
    let n = points.len();
    if n < 2 {
        return PathData::default();
    }

    let at = |i: isize| -> Point {
        if closed {
            points[i.rem_euclid(n as isize) as usize]
        } else {
            points[i.clamp(0, n as isize - 1) as usize]
        }
    };

    let segments = if closed { n } else { n - 1 };
    let mut d = format!("M {}", fmt_point(points[0]));
    for i in 0..segments as isize {
        let (p0, p1, p2, p3) = (at(i - 1), at(i), at(i + 1), at(i + 2));
        let cp1 = p1 + (p2 - p0) / 6.0;
        let cp2 = p2 - (p3 - p1) / 6.0;
        d.push_str(&format!(
            " C {} {} {}",
            fmt_point(cp1),
            fmt_point(cp2),
            fmt_point(p2)
        ));
    }
    if closed {
        d.push_str(" Z");
    }
    PathData(d)
}
