//! Seed harvesting
//!
//! A floating ADC pin and the low bits of the boot timer both carry enough
//! noise to give every power-on a different face sequence.

use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Instant, Timer};
use moodlet_hal::SeedMixer;

#[cfg(feature = "defmt")]
use defmt::warn;

/// ADC samples folded into the seed
pub const SEED_SAMPLES: usize = 32;

/// Read `SEED_SAMPLES` conversions from a floating channel and mix them,
/// interleaved with timer readings, into a PRNG seed
///
/// Failed conversions are skipped; the timer jitter alone still varies
/// between boots.
pub async fn harvest_seed(adc: &mut Adc<'_, Async>, channel: &mut Channel<'_>) -> u64 {
    let mut mixer = SeedMixer::new();

    for _ in 0..SEED_SAMPLES {
        match adc.read(channel).await {
            Ok(sample) => mixer.push(sample as u64),
            Err(_e) => {
                #[cfg(feature = "defmt")]
                warn!("seed ADC read failed: {:?}", _e);
            }
        }
        mixer.push(Instant::now().as_ticks());
        Timer::after_micros(50).await;
    }

    mixer.finish()
}
