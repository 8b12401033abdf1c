//! Error types for the backdrop core.

use thiserror::Error;

/// Errors produced at the engine boundaries (color parsing, palette
/// construction, export).
///
/// Generation itself never fails: invalid generator input degrades to an
/// empty scene rather than surfacing here.
#[derive(Debug, Error)]
pub enum BackdropError {
    /// Width or height was zero (or too large) for a raster export.
    #[error("invalid dimensions {width}x{height}: width and height must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// Vector markup could not be decoded into a drawable tree.
    #[error("failed to decode vector markup: {0}")]
    Decode(String),

    /// A pixel buffer could not be encoded as an image file.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// Writing an export to disk failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// The background rasterization task did not complete.
    #[error("rasterization task failed: {0}")]
    Task(String),
}
