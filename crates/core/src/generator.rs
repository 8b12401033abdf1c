//! The core `Generator` trait that every shape generator implements.
//!
//! The trait is object-safe so generators can be used as `dyn Generator`
//! for runtime switching between variants.

use crate::palette::Palette;
use crate::prng::Lcg;
use crate::shape::Shape;
use serde_json::Value;

/// A pure shape generator.
///
/// `generate` must be a function of `(self, rng, palette)` only: the same
/// params, a random source at the same state and the same palette always
/// yield the same shapes in the same order.
pub trait Generator {
    /// Produces shapes in paint order, drawing randomness from `rng`.
    fn generate(&self, rng: &mut Lcg, palette: &Palette) -> Vec<Shape>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}
