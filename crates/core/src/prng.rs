//! Deterministic PRNG based on a small linear congruential generator.
//!
//! The recurrence `state = (state * 9301 + 49297) mod 233280` is the classic
//! "seeded random" used by many generative tools. Every output is an exact
//! ratio of two integers below 2^18, so the produced `f64` sequence is
//! bit-identical on every platform.

use serde::{Deserialize, Serialize};

/// Linear congruential PRNG. Same seed always produces the same sequence.
///
/// The seed is reduced modulo [`Lcg::MODULUS`] on construction, which leaves
/// the sequence unchanged (the recurrence only depends on `state mod m`).
/// Seed 0 is valid and has no fixed point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Multiplier of the recurrence.
    pub const MULTIPLIER: u64 = 9301;
    /// Increment of the recurrence.
    pub const INCREMENT: u64 = 49297;
    /// Modulus of the recurrence; also the divisor producing `[0, 1)` floats.
    pub const MODULUS: u64 = 233_280;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Advances the state and returns it, in `[0, MODULUS)`.
    pub fn next_u32(&mut self) -> u32 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as u32
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::MODULUS as f64
    }

    /// Returns a uniformly distributed f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a usize in [0, max) as `floor(next_f64() * max)`.
    ///
    /// Returns 0 without advancing the state when `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        ((self.next_f64() * max as f64) as usize).min(max - 1)
    }
}
