#![deny(unsafe_code)]
//! Core types and traits for the backdrop vector-background engine.
//!
//! Provides the `Generator` trait, the `Shape`/`Scene` data model, the `Rgb`
//! color type with per-channel shading, the bounded `Palette`, the `Lcg`
//! PRNG, Catmull-Rom path interpolation, `Recipe`, and parameter helpers.

pub mod color;
pub mod curve;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod palette;
pub mod params;
pub mod prng;
pub mod recipe;
pub mod scene;
pub mod shape;

pub use color::{adjust_color, Rgb};
pub use curve::{smooth_path, PathData};
pub use error::BackdropError;
pub use generator::Generator;
pub use geometry::{Point, VIEWPORT_CENTER, VIEWPORT_SIZE};
pub use palette::Palette;
pub use prng::Lcg;
pub use recipe::Recipe;
pub use scene::Scene;
pub use shape::Shape;
