//! Sampling cadence tasks
//!
//! Two independent periodic tickers, one per sampler. Each body does
//! nothing but post its wake latch: the hardware timer interrupt wakes
//! the ticker and the post is the only work on that path - no blocking,
//! no allocation, no I/O. The periods are independent configuration, not
//! derived from each other.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::{ACCEL_WAKE, RANGE_WAKE};

/// Distance sampling period
pub const RANGE_PERIOD_MS: u64 = 500;

/// Acceleration sampling period (100 Hz)
pub const ACCEL_PERIOD_MS: u64 = 10;

/// Posts the distance sampler's wake latch every ranging period
#[embassy_executor::task]
pub async fn range_cadence_task() {
    info!("Range cadence started ({} ms)", RANGE_PERIOD_MS);

    let mut ticker = Ticker::every(Duration::from_millis(RANGE_PERIOD_MS));
    loop {
        ticker.next().await;
        RANGE_WAKE.signal(());
    }
}

/// Posts the acceleration sampler's wake latch every accel period
#[embassy_executor::task]
pub async fn accel_cadence_task() {
    info!("Accel cadence started ({} ms)", ACCEL_PERIOD_MS);

    let mut ticker = Ticker::every(Duration::from_millis(ACCEL_PERIOD_MS));
    loop {
        ticker.next().await;
        ACCEL_WAKE.signal(());
    }
}
