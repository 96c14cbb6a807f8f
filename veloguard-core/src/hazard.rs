//! Hazard band classification and annunciation policy
//!
//! The distance to the nearest obstacle maps to one of three bands. The
//! band decides the LED bar, the buzzer cadence and the UART phrase. LED
//! encoding is monotone: each more severe band lights a superset of the
//! LEDs of the milder one.

/// Distances below this are classified as [`HazardBand::Danger`]
pub const DANGER_BELOW_M: f32 = 3.0;

/// Distances below this (and at or above [`DANGER_BELOW_M`]) are
/// [`HazardBand::Caution`]; at or above it, [`HazardBand::Safe`].
///
/// Both exact boundaries belong to the milder band: 3.0 m is Caution,
/// 5.0 m is Safe.
pub const CAUTION_BELOW_M: f32 = 5.0;

/// Buzzer half-period per band, milliseconds (on-time == off-time)
pub const DANGER_PULSE_HALF_MS: u32 = 250;
pub const CAUTION_PULSE_HALF_MS: u32 = 500;

/// UART phrases - the entire wire protocol of the monitor
pub const DANGER_PHRASE: &str = "Danger, vehicle close";
pub const CAUTION_PHRASE: &str = "Caution, vehicle close";

/// Hazard classification of the current distance reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HazardBand {
    /// Nothing within 5 m
    Safe,
    /// Obstacle between 3 m and 5 m
    Caution,
    /// Obstacle closer than 3 m
    Danger,
}

impl HazardBand {
    /// Classify a distance in meters
    ///
    /// Total over non-negative distances; yields exactly one band.
    pub fn classify(distance_m: f32) -> Self {
        if distance_m < DANGER_BELOW_M {
            HazardBand::Danger
        } else if distance_m < CAUTION_BELOW_M {
            HazardBand::Caution
        } else {
            HazardBand::Safe
        }
    }

    /// Number of LEDs lit on the indicator bar
    ///
    /// Monotone encoding: LEDs 1..=n are on, the rest off. Safe lights
    /// one LED (the device is alive), Caution two, Danger all three.
    pub fn leds_lit(self) -> u8 {
        match self {
            HazardBand::Safe => 1,
            HazardBand::Caution => 2,
            HazardBand::Danger => 3,
        }
    }

    /// Buzzer half-period in milliseconds, or None when silent
    pub fn buzzer_half_period_ms(self) -> Option<u32> {
        match self {
            HazardBand::Safe => None,
            HazardBand::Caution => Some(CAUTION_PULSE_HALF_MS),
            HazardBand::Danger => Some(DANGER_PULSE_HALF_MS),
        }
    }

    /// UART phrase for this band, or None when nothing is sent
    pub fn phrase(self) -> Option<&'static str> {
        match self {
            HazardBand::Safe => None,
            HazardBand::Caution => Some(CAUTION_PHRASE),
            HazardBand::Danger => Some(DANGER_PHRASE),
        }
    }
}

/// One annunciator pass: the band to display plus the phrase to emit,
/// if this pass entered a new band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Annunciation {
    pub band: HazardBand,
    /// Set only on band entry; unchanged bands stay quiet on the wire
    pub phrase: Option<&'static str>,
}

/// Tracks band transitions so the UART phrase is emitted once per entry
///
/// LEDs and buzzer are re-driven on every pass regardless; only the
/// serial side is edge-gated. No cool-down between bands: flicker near
/// a boundary re-emits on each crossing.
#[derive(Debug, Default)]
pub struct BandReporter {
    last: Option<HazardBand>,
}

impl BandReporter {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Classify a distance and decide whether its phrase is due
    pub fn observe(&mut self, distance_m: f32) -> Annunciation {
        let band = HazardBand::classify(distance_m);
        let entered = self.last != Some(band);
        self.last = Some(band);
        Annunciation {
            band,
            phrase: if entered { band.phrase() } else { None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_pins() {
        assert_eq!(HazardBand::classify(0.0), HazardBand::Danger);
        assert_eq!(HazardBand::classify(2.9), HazardBand::Danger);
        assert_eq!(HazardBand::classify(4.0), HazardBand::Caution);
        assert_eq!(HazardBand::classify(10.0), HazardBand::Safe);
    }

    #[test]
    fn test_boundaries_belong_to_milder_band() {
        assert_eq!(HazardBand::classify(3.0), HazardBand::Caution);
        assert_eq!(HazardBand::classify(5.0), HazardBand::Safe);
    }

    #[test]
    fn test_led_encoding_monotone() {
        assert!(HazardBand::Danger.leds_lit() >= HazardBand::Caution.leds_lit());
        assert!(HazardBand::Caution.leds_lit() >= HazardBand::Safe.leds_lit());
        assert_eq!(HazardBand::Danger.leds_lit(), 3);
        assert_eq!(HazardBand::Caution.leds_lit(), 2);
        assert_eq!(HazardBand::Safe.leds_lit(), 1);
    }

    #[test]
    fn test_buzzer_cadence() {
        assert_eq!(HazardBand::Safe.buzzer_half_period_ms(), None);
        assert_eq!(HazardBand::Caution.buzzer_half_period_ms(), Some(500));
        assert_eq!(HazardBand::Danger.buzzer_half_period_ms(), Some(250));
    }

    #[test]
    fn test_phrase_emitted_once_per_band_entry() {
        let mut reporter = BandReporter::new();

        // Approaching vehicle: Safe -> Caution -> Danger
        let a = reporter.observe(8.0);
        assert_eq!(a.band, HazardBand::Safe);
        assert_eq!(a.phrase, None);

        let b = reporter.observe(4.0);
        assert_eq!(b.band, HazardBand::Caution);
        assert_eq!(b.phrase, Some(CAUTION_PHRASE));

        // Same band again: LEDs refresh, wire stays quiet
        assert_eq!(reporter.observe(4.2).phrase, None);

        let c = reporter.observe(2.0);
        assert_eq!(c.band, HazardBand::Danger);
        assert_eq!(c.phrase, Some(DANGER_PHRASE));
        assert_eq!(reporter.observe(1.5).phrase, None);
    }

    #[test]
    fn test_first_observation_reports_its_band() {
        // Powering on next to a vehicle must annunciate immediately
        let mut reporter = BandReporter::new();
        assert_eq!(reporter.observe(1.0).phrase, Some(DANGER_PHRASE));
    }

    #[test]
    fn test_boundary_flicker_reemits() {
        let mut reporter = BandReporter::new();
        reporter.observe(4.9);
        assert_eq!(reporter.observe(5.1).phrase, None); // Safe has no phrase
        assert_eq!(reporter.observe(4.9).phrase, Some(CAUTION_PHRASE));
    }
}
