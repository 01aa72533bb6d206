//! RNG module - deterministic random source for scrambles
//!
//! A small LCG so that the same seed always produces the same scramble,
//! which keeps scrambles reproducible in tests and from the command line.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform-ish value in [0, max). `max` must be non-zero.
    pub fn below(&mut self, max: usize) -> usize {
        // High bits of an LCG are better distributed than the low ones.
        ((self.next_u32() >> 8) as usize) % max
    }

    /// Fair coin
    pub fn flip(&mut self) -> bool {
        self.next_u32() & 0x8000_0000 != 0
    }
}
