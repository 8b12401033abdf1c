//! Geometric primitives produced by the generators.

use crate::color::Rgb;
use crate::curve::PathData;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A drawable primitive in the normalized viewport.
///
/// Opacities are in [0, 1]. A circle's `blur` is a Gaussian standard
/// deviation in viewport units; `None` means sharp edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Path {
        d: PathData,
        fill: Rgb,
        opacity: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgb,
        opacity: f64,
        blur: Option<f64>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Rgb,
    },
    /// Children are scaled about the origin, then translated.
    Group {
        translate: Point,
        scale: f64,
        children: Vec<Shape>,
    },
}

impl Shape {
    /// Convenience constructor for a filled path.
    pub fn path(d: PathData, fill: Rgb, opacity: f64) -> Self {
        Shape::Path { d, fill, opacity }
    }

    /// Wraps `children` in a group placed at `translate` with uniform `scale`.
    pub fn group(translate: Point, scale: f64, children: Vec<Shape>) -> Self {
        Shape::Group {
            translate,
            scale,
            children,
        }
    }

    /// Visits this shape and every nested child, depth first, in paint order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Shape)) {
        visit(self);
        if let Shape::Group { children, .. } = self {
            for child in children {
                child.walk(visit);
            }
        }
    }
}
