//! Random source abstraction
//!
//! Every randomized re-arm in the animation draws through this trait so a
//! fixed seed yields a reproducible session.

/// Seeded uniform integer generator
pub trait RandomSource {
    /// Next raw 32-bit value
    fn next_u32(&mut self) -> u32;

    /// Uniform integer in `[low, high_exclusive)`
    ///
    /// Returns `low` when the range is empty.
    fn uniform_int(&mut self, low: i32, high_exclusive: i32) -> i32 {
        if high_exclusive <= low {
            return low;
        }
        let span = (high_exclusive as i64 - low as i64) as u64;
        let draw = self.next_u32() as u64 % span;
        (low as i64 + draw as i64) as i32
    }

    /// Uniform index in `[0, len)`
    fn uniform_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32() as usize % len
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// Folds noisy samples (ADC readings, timer jitter) into a PRNG seed
///
/// Each sample is mixed with the splitmix64 finalizer so a handful of
/// low-entropy readings still spread across all 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedMixer {
    state: u64,
    samples: u32,
}

impl SeedMixer {
    pub const fn new() -> Self {
        Self {
            state: 0x9E37_79B9_7F4A_7C15,
            samples: 0,
        }
    }

    /// Mix in one sample
    pub fn push(&mut self, sample: u64) {
        self.state = splitmix64(self.state ^ sample);
        self.samples = self.samples.saturating_add(1);
    }

    /// Number of samples mixed in so far
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Final seed, never zero
    pub fn finish(&self) -> u64 {
        match splitmix64(self.state) {
            0 => 1,
            seed => seed,
        }
    }
}

impl Default for SeedMixer {
    fn default() -> Self {
        Self::new()
    }
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
