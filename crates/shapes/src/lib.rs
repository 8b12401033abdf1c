#![deny(unsafe_code)]
//! The eight background generators.
//!
//! Every generator is a plain params struct implementing
//! [`backdrop_core::Generator`]: a pure function of its params, a seeded
//! [`backdrop_core::Lcg`] and a [`backdrop_core::Palette`]. Generators never
//! share state; the only common pieces are the random source, the curve
//! interpolator and the blob helper in [`blob`].

pub mod blob;
pub mod circles;
pub mod depth;
pub mod low_poly;
pub mod peaks;
pub mod scatter;
pub mod wave;

pub use blob::Blob;
pub use circles::Circles;
pub use depth::DepthScene;
pub use low_poly::LowPoly;
pub use peaks::Peaks;
pub use scatter::Scatter;
pub use wave::{LayeredWaves, Wave};

use backdrop_core::geometry::fmt_point;
use backdrop_core::{PathData, Point};

/// Polyline through `ridge`, closed down the right edge, along the bottom
/// and back up the left edge of the viewport.
pub(crate) fn filled_silhouette(ridge: &[Point]) -> PathData {
    let mut d = String::new();
    for (i, p) in ridge.iter().enumerate() {
        d.push_str(if i == 0 { "M " } else { " L " });
        d.push_str(&fmt_point(*p));
    }
    d.push_str(" L 100,100 L 0,100 Z");
    PathData::new(d)
}
