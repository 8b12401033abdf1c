//! Pure-computation conversion from a rendered pixmap to straight RGBA8.
//!
//! The rasterizer works in premultiplied alpha; exported buffers and PNG
//! files use straight alpha.

use resvg::tiny_skia::Pixmap;

/// Demultiplies every pixel of `pixmap` into an `R, G, B, A` byte buffer of
/// length `width * height * 4`.
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
