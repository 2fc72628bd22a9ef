//! RNG module - deterministic random draws for fruit placement.
//!
//! A simple LCG keeps the core dependency-free and makes sessions replayable:
//! the same seed reproduces the same fruit sequence. Constants from
//! Numerical Recipes.

/// Simple LCG (Linear Congruential Generator) RNG.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    ///
    /// Uses a widening multiply rather than `%` so the result depends on the
    /// high state bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (for restarting with the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}
