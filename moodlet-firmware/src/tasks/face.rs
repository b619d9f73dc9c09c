//! Face task
//!
//! Owns the panel and the frame driver. Every frame it reads the clock
//! once, advances the animation, draws into the frame buffer and flushes
//! it over I2C, then sleeps for the frame pace.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Timer;
use static_cell::StaticCell;

use moodlet_core::{AnimationConfig, AnimationEvent, FrameDriver, XorShiftRng, FRAME_PACE_MS};
use moodlet_display::FrameBuffer;
use moodlet_hal::Clock;
use moodlet_hal_rp2040::EmbassyClock;

use crate::ssd1306::Ssd1306;

/// Panel on the I2C0 bus
pub type Panel = Ssd1306<I2c<'static, I2C0, Async>>;

/// First delay before retrying a failed panel init
const INIT_RETRY_MS: u64 = 100;
/// Longest delay between init retries
const INIT_RETRY_MAX_MS: u64 = 5_000;
/// Consecutive failed flushes before the panel is re-initialized
const MAX_FLUSH_FAILURES: u32 = 10;

static FRAME: StaticCell<FrameBuffer> = StaticCell::new();

/// Face task - runs the animation forever
#[embassy_executor::task]
pub async fn face_task(mut panel: Panel, seed: u64) {
    info!("Face task started, seed {=u64:x}", seed);

    let frame = FRAME.init(FrameBuffer::new());
    let clock = EmbassyClock;
    let mut driver = FrameDriver::new(AnimationConfig::DEFAULT, XorShiftRng::new(seed));
    let mut flush_failures = 0u32;

    loop {
        if !panel.is_initialized() {
            bring_up(&mut panel).await;
            flush_failures = 0;
        }

        let report = driver.advance(clock.now_ms());
        for event in &report.events {
            log_event(event);
        }

        driver.draw(frame);

        match panel.flush(frame).await {
            Ok(()) => {
                trace!("Frame at {} ms", report.now_ms);
                flush_failures = 0;
            }
            Err(e) => {
                flush_failures += 1;
                warn!("Frame flush failed ({}x): {:?}", flush_failures, e);
                if flush_failures >= MAX_FLUSH_FAILURES {
                    error!("Panel unresponsive, re-initializing");
                    bring_up(&mut panel).await;
                    flush_failures = 0;
                }
            }
        }

        Timer::after_millis(FRAME_PACE_MS).await;
    }
}

/// Initialize the panel, retrying with exponential back-off until it answers
async fn bring_up(panel: &mut Panel) {
    let mut delay_ms = INIT_RETRY_MS;
    loop {
        match panel.init().await {
            Ok(()) => {
                info!("Panel initialized");
                return;
            }
            Err(e) => {
                error!("Panel init failed: {:?}, retrying in {} ms", e, delay_ms);
                Timer::after_millis(delay_ms).await;
                delay_ms = (delay_ms * 2).min(INIT_RETRY_MAX_MS);
            }
        }
    }
}

fn log_event(event: &AnimationEvent) {
    match event {
        AnimationEvent::ExpressionChanged { from, to, hold_ms } => {
            info!("Expression {} -> {} for {} ms", from.name(), to.name(), hold_ms);
        }
        other => debug!("{:?}", other),
    }
}
