//! Seeded pseudo-random generator
//!
//! xorshift64* with the upper half of each step returned as the 32-bit
//! draw. Not cryptographically secure; the face only needs reproducible,
//! roughly uniform jitter.

use moodlet_hal::RandomSource;

/// Fallback state for a zero seed (xorshift never leaves zero)
const ZERO_SEED_STATE: u64 = 0x1234_5678_9ABC_DEF0;

/// Deterministic PRNG, seeded once at start-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftRng {
    state: u64,
}

impl XorShiftRng {
    /// Create a generator from a seed
    pub const fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_STATE } else { seed },
        }
    }

    /// xorshift64* step.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl RandomSource for XorShiftRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }
}
