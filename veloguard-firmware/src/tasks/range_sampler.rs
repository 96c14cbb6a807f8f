//! Distance sampler task
//!
//! Wake-gated HC-SR04 sampling: block on the range wake latch, run one
//! pulse-echo measurement, publish the distance. The echo round trip is
//! the task's own bounded blocking; both echo edges are awaited
//! asynchronously so the 100 Hz acceleration cadence is never starved.
//! A wake posted while a measurement is in flight coalesces, so a slow
//! echo skips a sample rather than queueing one.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{with_timeout, Duration, Instant, Timer};
use portable_atomic::Ordering;

use veloguard_core::range::{
    pulse_to_cm, RangeTracker, SensorError, ECHO_TIMEOUT_MS, TRIGGER_PULSE_US,
};

use crate::channels::{DISTANCE_CM, RANGE_WAKE};

/// Distance sampler task
///
/// The only writer of [`DISTANCE_CM`]. A timed-out echo keeps the last
/// published value (explicit last-value-retained policy in
/// [`RangeTracker`]); no retry is attempted until the next wake.
#[embassy_executor::task]
pub async fn range_sampler_task(mut trigger: Output<'static>, mut echo: Input<'static>) {
    info!("Range sampler started");

    let mut tracker = RangeTracker::new();

    loop {
        RANGE_WAKE.wait().await;

        let reading = measure(&mut trigger, &mut echo).await;
        match reading {
            Ok(cm) => trace!("Distance: {} cm", cm),
            Err(SensorError::Timeout) => warn!("Echo timeout, keeping last distance"),
        }

        let cm = tracker.update(reading);
        DISTANCE_CM.store(cm as u32, Ordering::Relaxed);
    }
}

/// One HC-SR04 pulse-echo measurement
///
/// Sends a 10 us trigger pulse, then times the echo pulse width. Either
/// echo edge missing its wait budget is a timeout.
async fn measure(trigger: &mut Output<'static>, echo: &mut Input<'static>) -> Result<u16, SensorError> {
    let echo_budget = Duration::from_millis(ECHO_TIMEOUT_MS);

    // Trigger pulse
    trigger.set_low();
    Timer::after(Duration::from_micros(2)).await;
    trigger.set_high();
    Timer::after(Duration::from_micros(TRIGGER_PULSE_US)).await;
    trigger.set_low();

    // Echo pulse start
    with_timeout(echo_budget, echo.wait_for_high())
        .await
        .map_err(|_| SensorError::Timeout)?;
    let pulse_start = Instant::now();

    // Echo pulse end
    with_timeout(echo_budget, echo.wait_for_low())
        .await
        .map_err(|_| SensorError::Timeout)?;

    let pulse_us = pulse_start.elapsed().as_micros() as u32;
    Ok(pulse_to_cm(pulse_us))
}
