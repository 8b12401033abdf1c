//! Rasterization of vector markup into a pixel buffer of exact size.
//!
//! Two steps: [`decode`] parses markup into a drawable tree, [`draw`] renders
//! that tree into a buffer of the requested dimensions. [`rasterize_async`]
//! runs both on a blocking task and completes once, with its own buffer;
//! concurrent exports never share state.

use crate::pixel::pixmap_to_rgba;
use crate::viewport::ViewportTransform;
use backdrop_core::BackdropError;
use resvg::{tiny_skia, usvg};
use tracing::debug;

/// A straight-alpha RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RasterImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major `R, G, B, A` bytes.
    pub fn data(&self) -> &[u8] {
        &self.rgba
    }

    pub fn into_data(self) -> Vec<u8> {
        self.rgba
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba.get(i..i + 4).and_then(|p| p.try_into().ok())
    }
}

/// Step one: parses markup into a drawable tree.
pub fn decode(svg: &str) -> Result<usvg::Tree, BackdropError> {
    let options = usvg::Options::default();
    usvg::Tree::from_str(svg, &options).map_err(|e| BackdropError::Decode(e.to_string()))
}

/// Step two: renders `tree` into a `width`×`height` buffer, stretching the
/// tree's own size to fill it.
pub fn draw(tree: &usvg::Tree, width: u32, height: u32) -> Result<RasterImage, BackdropError> {
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or(BackdropError::InvalidDimensions { width, height })?;
    let size = tree.size();
    let transform = ViewportTransform::fit_size(
        f64::from(size.width()),
        f64::from(size.height()),
        width,
        height,
    );
    resvg::render(tree, transform.to_skia(), &mut pixmap.as_mut());
    debug!(width, height, "rasterized scene");
    Ok(RasterImage {
        width,
        height,
        rgba: pixmap_to_rgba(&pixmap),
    })
}

/// Decodes and draws in one synchronous call.
pub fn rasterize(svg: &str, width: u32, height: u32) -> Result<RasterImage, BackdropError> {
    if width == 0 || height == 0 {
        return Err(BackdropError::InvalidDimensions { width, height });
    }
    let tree = decode(svg)?;
    draw(&tree, width, height)
}

/// Decodes and draws on a blocking task; resolves once with the buffer or
/// the failure of this request alone.
pub async fn rasterize_async(
    svg: String,
    width: u32,
    height: u32,
) -> Result<RasterImage, BackdropError> {
    tokio::task::spawn_blocking(move || rasterize(&svg, width, height))
        .await
        .map_err(|e| BackdropError::Task(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_named;
    use crate::svg::to_svg;
    use backdrop_core::Palette;
    use serde_json::json;

    fn solid(hex: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="100" height="100" preserveAspectRatio="none"><rect width="100" height="100" fill="{hex}"/></svg>"#
        )
    }

    #[test]
    fn full_hd_request_yields_exact_dimensions() {
        let image = rasterize(&solid("#0a9396"), 1920, 1080).unwrap();
        assert_eq!(image.width(), 1920);
        assert_eq!(image.height(), 1080);
        assert_eq!(image.data().len(), 1920 * 1080 * 4);
    }

    #[test]
    fn background_fills_every_corner_of_non_square_target() {
        let image = rasterize(&solid("#0a9396"), 320, 90).unwrap();
        for (x, y) in [(0, 0), (319, 0), (0, 89), (319, 89), (160, 45)] {
            assert_eq!(image.pixel(x, y), Some([10, 147, 150, 255]), "pixel ({x}, {y})");
        }
    }

    #[test]
    fn left_half_rect_scales_with_target_width() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" width="100" height="100" preserveAspectRatio="none"><rect width="50" height="100" fill="#ff0000"/></svg>"##;
        let image = rasterize(svg, 400, 100).unwrap();
        assert_eq!(image.pixel(10, 50), Some([255, 0, 0, 255]));
        assert_eq!(image.pixel(390, 50).map(|p| p[3]), Some(0));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = rasterize(&solid("#000000"), 0, 10).unwrap_err();
        assert!(matches!(
            err,
            BackdropError::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn malformed_markup_fails_to_decode() {
        assert!(matches!(
            rasterize("<svg", 10, 10),
            Err(BackdropError::Decode(_))
        ));
    }

    #[test]
    fn pixel_outside_image_is_none() {
        let image = rasterize(&solid("#000000"), 4, 4).unwrap();
        assert_eq!(image.pixel(4, 0), None);
    }

    #[test]
    fn every_variant_rasterizes() {
        let palette = Palette::default();
        for variant in crate::Variant::ALL {
            let scene = compose_named(variant.name(), 5, &json!({}), &palette);
            let image = rasterize(&to_svg(&scene), 64, 48).unwrap();
            assert_eq!((image.width(), image.height()), (64, 48), "{}", variant.name());
        }
    }

    #[tokio::test]
    async fn async_rasterization_completes_with_exact_size() {
        let image = rasterize_async(solid("#94d2bd"), 1920, 1080).await.unwrap();
        assert_eq!((image.width(), image.height()), (1920, 1080));
    }

    #[tokio::test]
    async fn async_decode_failure_only_fails_that_request() {
        let bad = rasterize_async("not markup".to_string(), 8, 8);
        let good = rasterize_async(solid("#000000"), 8, 8);
        let (bad, good) = tokio::join!(bad, good);
        assert!(bad.is_err());
        assert!(good.is_ok());
    }
}
