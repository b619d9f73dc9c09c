//! Sleep bubble lifecycle
//!
//! Three bubbles grow, breathe and shrink on independent lifecycles while
//! the face sleeps. A shared phase drives the Z bob and the mouth breathing.
//! Everything here advances once per drawn sleeping frame, not on a timer.

use core::f32::consts::TAU;

use heapless::Vec;
use moodlet_hal::RandomSource;

use super::events::AnimationEvent;
use crate::config::AnimationConfig;

/// Number of bubbles in the cluster
pub const BUBBLE_COUNT: usize = 3;

/// Lifecycle length in lifecycle units
pub const MAX_LIFECYCLE: f32 = 6.28;

/// Shared phase advance per frame (radians)
pub const PHASE_STEP: f32 = 0.05;

/// Lifecycle advance per frame
pub const LIFECYCLE_STEP: f32 = 0.1;

/// Peak radius of each bubble
pub const BASE_RADII: [i32; BUBBLE_COUNT] = [2, 3, 5];

/// Staggered starting lifecycles so the bubbles do not pulse together
const INITIAL_LIFECYCLES: [f32; BUBBLE_COUNT] = [0.0, 2.1, 4.2];

/// Sleep phase and bubble lifecycles
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SleepBubbles {
    phase: f32,
    lifecycles: [f32; BUBBLE_COUNT],
    active: [bool; BUBBLE_COUNT],
}

impl SleepBubbles {
    pub const fn new() -> Self {
        Self {
            phase: 0.0,
            lifecycles: INITIAL_LIFECYCLES,
            active: [true; BUBBLE_COUNT],
        }
    }

    /// Advance one sleeping frame
    ///
    /// After this returns at least one bubble is active.
    pub fn update<R: RandomSource, const N: usize>(
        &mut self,
        config: &AnimationConfig,
        rng: &mut R,
        events: &mut Vec<AnimationEvent, N>,
    ) {
        self.phase += PHASE_STEP;
        if self.phase >= TAU {
            self.phase -= TAU;
        }

        for (index, (life, active)) in self
            .lifecycles
            .iter_mut()
            .zip(self.active.iter_mut())
            .enumerate()
        {
            *life += LIFECYCLE_STEP;
            if *life >= MAX_LIFECYCLE {
                *life = 0.0;
                *active = rng.uniform_int(0, 100) < config.bubble_respawn_percent as i32;
                let _ = events.push(AnimationEvent::BubbleRespawned {
                    index: index as u8,
                    active: *active,
                });
            }
        }

        if !self.any_active() {
            let index = rng.uniform_index(BUBBLE_COUNT);
            self.active[index] = true;
            let _ = events.push(AnimationEvent::BubbleForced { index: index as u8 });
        }
    }

    /// Shared phase in `[0, 2π)`
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn any_active(&self) -> bool {
        self.active.iter().any(|a| *a)
    }

    /// Lifecycle progress of a bubble in `[0, 1)`
    pub fn progress(&self, index: usize) -> f32 {
        self.lifecycles
            .get(index)
            .map(|life| life / MAX_LIFECYCLE)
            .unwrap_or(0.0)
    }

    /// Radius a bubble would be drawn with this frame, 0 when hidden
    pub fn radius(&self, index: usize) -> i32 {
        if !self.is_active(index) {
            return 0;
        }
        bubble_radius(BASE_RADII[index], self.progress(index))
    }
}

impl Default for SleepBubbles {
    fn default() -> Self {
        Self::new()
    }
}

/// Size multiplier over a bubble's life: grow, breathe, shrink
pub fn size_envelope(progress: f32) -> f32 {
    if progress < 0.2 {
        progress * 5.0
    } else if progress > 0.8 {
        (1.0 - progress) * 5.0
    } else {
        1.0 + libm::sinf((progress - 0.2) * 10.0) * 0.1
    }
}

/// Pixel radius for a base size at `progress`, never negative
pub fn bubble_radius(base: i32, progress: f32) -> i32 {
    ((base as f32 * size_envelope(progress)) as i32).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::XorShiftRng;
    use proptest::prelude::*;

    /// Always returns the same raw value
    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_envelope_shape() {
        assert_eq!(size_envelope(0.0), 0.0);
        assert!((size_envelope(0.1) - 0.5).abs() < 1e-6);
        assert!((size_envelope(0.2) - 1.0).abs() < 1e-6);
        assert!((size_envelope(0.9) - 0.5).abs() < 1e-5);
        for p in [0.3f32, 0.5, 0.7] {
            let e = size_envelope(p);
            assert!((0.9..=1.1).contains(&e));
        }
    }

    #[test]
    fn test_tiny_bubbles_have_no_radius() {
        assert_eq!(bubble_radius(2, 0.0), 0);
        assert_eq!(bubble_radius(2, 0.05), 0);
        assert_eq!(bubble_radius(5, 0.05), 1);
        assert_eq!(bubble_radius(5, 0.5), 5);
    }

    #[test]
    fn test_phase_wraps() {
        let cfg = AnimationConfig::DEFAULT;
        let mut rng = XorShiftRng::new(5);
        let mut bubbles = SleepBubbles::new();
        let mut events: Vec<AnimationEvent, 8> = Vec::new();

        for _ in 0..200 {
            bubbles.update(&cfg, &mut rng, &mut events);
            events.clear();
            assert!(bubbles.phase() >= 0.0 && bubbles.phase() < TAU);
        }
    }

    #[test]
    fn test_lifecycle_reset_rerolls() {
        let cfg = AnimationConfig::DEFAULT;
        // 99 % 100 = 99, never under 80: every respawn rolls inactive
        let mut rng = Fixed(99);
        let mut bubbles = SleepBubbles::new();
        let mut events: Vec<AnimationEvent, 8> = Vec::new();

        // Bubble 2 starts at 4.2 and reaches 6.28 first
        let mut frames = 0;
        while bubbles.is_active(2) {
            bubbles.update(&cfg, &mut rng, &mut events);
            frames += 1;
            assert!(frames < 30);
        }
        assert!(events.contains(&AnimationEvent::BubbleRespawned {
            index: 2,
            active: false
        }));
        assert!(bubbles.progress(2) < 0.05);
    }

    #[test]
    fn test_forces_one_active() {
        let cfg = AnimationConfig::DEFAULT;
        let mut rng = Fixed(99);
        let mut bubbles = SleepBubbles::new();
        let mut events: Vec<AnimationEvent, 8> = Vec::new();

        // Run long enough for every bubble to respawn inactive at least once
        for _ in 0..200 {
            events.clear();
            bubbles.update(&cfg, &mut rng, &mut events);
            assert!(bubbles.any_active());
        }
    }

    proptest! {
        #[test]
        fn prop_always_one_active(seed in any::<u64>(), frames in 1usize..400) {
            let cfg = AnimationConfig::DEFAULT;
            let mut rng = XorShiftRng::new(seed);
            let mut bubbles = SleepBubbles::new();
            let mut events: Vec<AnimationEvent, 8> = Vec::new();

            for _ in 0..frames {
                events.clear();
                bubbles.update(&cfg, &mut rng, &mut events);
                prop_assert!(bubbles.any_active());
                for i in 0..BUBBLE_COUNT {
                    prop_assert!(bubbles.radius(i) >= 0);
                    let p = bubbles.progress(i);
                    prop_assert!((0.0..1.0).contains(&p));
                }
            }
        }

        #[test]
        fn prop_radius_never_negative(progress in 0.0f32..1.0, base in 0i32..10) {
            prop_assert!(bubble_radius(base, progress) >= 0);
        }
    }
}
