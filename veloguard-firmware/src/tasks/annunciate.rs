//! Annunciator task
//!
//! Free-running consumer of the shared distance: unlike the samplers it
//! is not wake-gated. Every pass re-reads the latest distance, classifies
//! it, re-drives the LED bar, pulses the buzzer at the band's cadence and
//! queues the band's UART phrase on band entry. The buzzer pulse doubles
//! as the loop's pacing delay; in the Safe band a short poll delay keeps
//! the loop yielding to the rest of the executor.
//!
//! The task races the distance sampler by design - the value is a single
//! relaxed atomic word and staleness is bounded by one 500 ms sample.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};
use portable_atomic::Ordering;

use veloguard_core::hazard::BandReporter;
use veloguard_core::range::cm_to_m;

use crate::channels::{report, DISTANCE_CM};

/// Poll delay while Safe (no buzzer pulse to pace the loop)
const SAFE_POLL_MS: u64 = 100;

/// LED and buzzer outputs owned by the annunciator
pub struct AnnunciatorOutputs {
    pub led1: Output<'static>,
    pub led2: Output<'static>,
    pub led3: Output<'static>,
    pub buzzer: Output<'static>,
}

/// Annunciator task
#[embassy_executor::task]
pub async fn annunciate_task(mut out: AnnunciatorOutputs) {
    info!("Annunciator started");

    let mut reporter = BandReporter::new();

    loop {
        let cm = DISTANCE_CM.load(Ordering::Relaxed) as u16;
        let annunciation = reporter.observe(cm_to_m(cm));
        let band = annunciation.band;

        if let Some(phrase) = annunciation.phrase {
            info!("Hazard band changed: {:?} at {} cm", band, cm);
            report(phrase);
        }

        // Monotone LED bar: LEDs 1..=n on, the rest off
        let lit = band.leds_lit();
        set_led(&mut out.led1, lit >= 1);
        set_led(&mut out.led2, lit >= 2);
        set_led(&mut out.led3, lit >= 3);

        match band.buzzer_half_period_ms() {
            Some(half_ms) => {
                let half = Duration::from_millis(half_ms as u64);
                out.buzzer.set_high();
                Timer::after(half).await;
                out.buzzer.set_low();
                Timer::after(half).await;
            }
            None => {
                out.buzzer.set_low();
                Timer::after(Duration::from_millis(SAFE_POLL_MS)).await;
            }
        }
    }
}

fn set_led(led: &mut Output<'static>, on: bool) {
    if on {
        led.set_high();
    } else {
        led.set_low();
    }
}
