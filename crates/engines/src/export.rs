//! Export requests: vector markup directly, or a raster buffer at an exact
//! pixel size.

use crate::raster::{rasterize_async, RasterImage};
use crate::svg::to_svg;
use backdrop_core::{BackdropError, Scene};
use serde::{Deserialize, Serialize};

/// What the caller wants back from a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum ExportRequest {
    Vector,
    Raster { width: u32, height: u32 },
}

impl ExportRequest {
    /// Rejects raster requests with a zero dimension.
    pub fn validate(&self) -> Result<(), BackdropError> {
        match *self {
            ExportRequest::Raster { width, height } if width == 0 || height == 0 => {
                Err(BackdropError::InvalidDimensions { width, height })
            }
            _ => Ok(()),
        }
    }
}

/// The result of an export.
#[derive(Debug, Clone, PartialEq)]
pub enum Exported {
    Vector(String),
    Raster(RasterImage),
}

/// Serializes `scene` and, for raster requests, rasterizes the markup.
pub async fn export(scene: &Scene, request: ExportRequest) -> Result<Exported, BackdropError> {
    request.validate()?;
    let svg = to_svg(scene);
    match request {
        ExportRequest::Vector => Ok(Exported::Vector(svg)),
        ExportRequest::Raster { width, height } => rasterize_async(svg, width, height)
            .await
            .map(Exported::Raster),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_named;
    use backdrop_core::Palette;
    use serde_json::json;

    fn scene() -> Scene {
        compose_named("wave", 0, &json!({"layers": 3}), &Palette::default())
    }

    #[test]
    fn validate_rejects_zero_height() {
        let request = ExportRequest::Raster {
            width: 10,
            height: 0,
        };
        assert!(request.validate().is_err());
        assert!(ExportRequest::Vector.validate().is_ok());
    }

    #[test]
    fn request_serializes_with_format_tag() {
        let json = serde_json::to_value(ExportRequest::Raster {
            width: 1920,
            height: 1080,
        })
        .unwrap();
        assert_eq!(json, json!({"format": "raster", "width": 1920, "height": 1080}));
    }

    #[tokio::test]
    async fn vector_export_is_the_markup() {
        let scene = scene();
        let exported = export(&scene, ExportRequest::Vector).await.unwrap();
        assert_eq!(exported, Exported::Vector(to_svg(&scene)));
    }

    #[tokio::test]
    async fn raster_export_matches_requested_size() {
        let exported = export(
            &scene(),
            ExportRequest::Raster {
                width: 1920,
                height: 1080,
            },
        )
        .await
        .unwrap();
        let Exported::Raster(image) = exported else {
            panic!("expected raster");
        };
        assert_eq!((image.width(), image.height()), (1920, 1080));
    }

    #[tokio::test]
    async fn invalid_raster_request_fails_before_rendering() {
        let result = export(
            &scene(),
            ExportRequest::Raster {
                width: 0,
                height: 0,
            },
        )
        .await;
        assert!(matches!(
            result,
            Err(BackdropError::InvalidDimensions { .. })
        ));
    }
}
