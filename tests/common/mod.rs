// ============================================================================
// Test Data Generators
// Seeded bounded random scalars for the property tiers
// ============================================================================

#![allow(dead_code)]

use fixq::Q24_8;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed seed so every tier replays the same data.
pub const SEED: u64 = 6554523;

/// Snap a float to the nearest-below multiple of the fixed-point epsilon,
/// so that f32 -> fixed -> f32 round-trips are lossless for the oracles.
pub fn quantize(x: f32) -> f32 {
    Q24_8::EPSILON * (x / Q24_8::EPSILON).floor()
}

/// Uniform f32 values in `[min, max]`, pre-quantized to a multiple of
/// epsilon.
pub struct FloatGen {
    rng: StdRng,
    min: f32,
    max: f32,
}

impl FloatGen {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(SEED),
            min,
            max,
        }
    }

    pub fn next(&mut self) -> f32 {
        quantize(self.rng.gen_range(self.min..=self.max))
    }

    pub fn next_pair(&mut self) -> (f32, f32) {
        (self.next(), self.next())
    }
}

/// Uniform i32 values in `[min, max]`.
pub struct IntGen {
    rng: StdRng,
    min: i32,
    max: i32,
}

impl IntGen {
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(SEED),
            min,
            max,
        }
    }

    pub fn next_pair(&mut self) -> (i32, i32) {
        (
            self.rng.gen_range(self.min..=self.max),
            self.rng.gen_range(self.min..=self.max),
        )
    }
}
