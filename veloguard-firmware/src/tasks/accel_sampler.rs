//! Acceleration sampler task
//!
//! Wake-gated triaxial sampling at 100 Hz: block on the accel wake latch,
//! read the three analog channels sequentially (x, y, z - single-shot
//! conversions, not a streaming capture), convert to g via the fixed
//! affine calibration, and feed the fall detector. A fall report goes out
//! once per impact; the detector re-arms when the reading settles.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};

use veloguard_core::motion::{adc_counts_to_mv, AccelSample, FallDetector};

use crate::channels::{report, ACCEL_WAKE};

/// Serial phrase emitted when a fall trips
pub const FALL_PHRASE: &str = "Fall detected";

/// Acceleration sampler task
///
/// A failed conversion skips the whole cycle - no partial samples reach
/// the detector - and the next wake retries from scratch.
#[embassy_executor::task]
pub async fn accel_sampler_task(
    mut adc: Adc<'static, Async>,
    mut ch_x: Channel<'static>,
    mut ch_y: Channel<'static>,
    mut ch_z: Channel<'static>,
) {
    info!("Accel sampler started");

    let mut detector = FallDetector::new();

    loop {
        ACCEL_WAKE.wait().await;

        let raw = (
            adc.read(&mut ch_x).await,
            adc.read(&mut ch_y).await,
            adc.read(&mut ch_z).await,
        );
        let (x, y, z) = match raw {
            (Ok(x), Ok(y), Ok(z)) => (x, y, z),
            _ => {
                warn!("ADC read failed, skipping accel cycle");
                continue;
            }
        };

        let sample = AccelSample {
            x_mv: adc_counts_to_mv(x),
            y_mv: adc_counts_to_mv(y),
            z_mv: adc_counts_to_mv(z),
        };
        let g = sample.to_g();
        trace!("Accel sum: {} g", g.axis_sum());

        if detector.update(g) {
            warn!("Fall detected (axis sum {} g)", g.axis_sum());
            report(FALL_PHRASE);
        }
    }
}
