//! A composed scene: shapes in paint order plus the palette they came from.

use crate::palette::Palette;
use crate::shape::Shape;
use serde::{Deserialize, Serialize};

/// An ordered list of shapes plus the palette used to build them.
///
/// Later shapes paint over earlier ones. Scenes are pure derived data and
/// are never mutated after composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    shapes: Vec<Shape>,
    palette: Palette,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>, palette: Palette) -> Self {
        Self { shapes, palette }
    }

    /// A scene with no shapes; only the palette background is drawn.
    pub fn empty(palette: Palette) -> Self {
        Self::new(Vec::new(), palette)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of top-level shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Distinct blur deviations used by any circle, in first-use order.
    pub fn blur_levels(&self) -> Vec<f64> {
        let mut levels: Vec<f64> = Vec::new();
        for shape in &self.shapes {
            shape.walk(&mut |s| {
                if let Shape::Circle {
                    blur: Some(std_dev),
                    ..
                } = s
                {
                    if !levels.iter().any(|l| l.to_bits() == std_dev.to_bits()) {
                        levels.push(*std_dev);
                    }
                }
            });
        }
        levels
    }
}
