//! PNG encoding of a [`RasterImage`].
//!
//! This module is feature-gated behind `png` (default on) so that hosts that
//! only need vector markup or raw buffers do not pull in the `image` crate.
//! The pixel conversion itself lives in [`crate::pixel`] (always available).

use crate::raster::RasterImage;
use backdrop_core::BackdropError;
use std::io::Cursor;
use std::path::Path;

fn to_rgba_image(image: &RasterImage) -> Result<image::RgbaImage, BackdropError> {
    image::RgbaImage::from_raw(image.width(), image.height(), image.data().to_vec())
        .ok_or_else(|| BackdropError::Encode("RGBA buffer size mismatch".into()))
}

/// Encodes the image as PNG bytes.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, BackdropError> {
    let mut bytes = Vec::new();
    to_rgba_image(image)?
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| BackdropError::Encode(e.to_string()))?;
    Ok(bytes)
}

impl RasterImage {
    /// Encodes this image as PNG bytes. See [`encode_png`].
    pub fn to_png(&self) -> Result<Vec<u8>, BackdropError> {
        encode_png(self)
    }
}

/// Writes the image as a PNG file.
///
/// Returns `BackdropError::Io` on write failure.
pub fn write_png(image: &RasterImage, path: &Path) -> Result<(), BackdropError> {
    to_rgba_image(image)?
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| BackdropError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_named;
    use crate::raster::rasterize;
    use crate::svg::to_svg;
    use backdrop_core::Palette;
    use serde_json::json;

    fn sample() -> RasterImage {
        let scene = compose_named("lowPoly", 3, &json!({}), &Palette::default());
        rasterize(&to_svg(&scene), 48, 27).unwrap()
    }

    #[test]
    fn encode_png_has_png_signature() {
        let image = sample();
        let bytes = encode_png(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(image.to_png().unwrap(), bytes);
    }

    #[test]
    fn write_png_round_trip() {
        let image = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&image, &path).unwrap();

        let read = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read.width(), 48);
        assert_eq!(read.height(), 27);
        assert_eq!(read.as_raw().as_slice(), image.data());
    }

    #[test]
    fn write_png_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        assert!(matches!(
            write_png(&sample(), &path),
            Err(BackdropError::Io(_))
        ));
    }
}
