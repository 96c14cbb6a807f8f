//! Ranging pulse math and the distance retention policy
//!
//! The HC-SR04 reports distance as the width of an echo pulse: sound
//! travels at 0.0343 cm/us and the pulse covers the round trip. The
//! firmware times the pulse; the conversion and the failure policy live
//! here so they can be tested on the host.

/// Speed of sound, cm per microsecond
pub const SOUND_CM_PER_US: f32 = 0.0343;

/// Trigger pulse width, microseconds
pub const TRIGGER_PULSE_US: u64 = 10;

/// Echo wait budget, milliseconds
///
/// One full round trip at the sensor's 4 m rated range is well under
/// 25 ms; an echo edge that misses this window is a timeout.
pub const ECHO_TIMEOUT_MS: u64 = 30;

/// Errors from the ranging sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Echo pulse never started or never ended within the wait budget
    Timeout,
}

/// Convert an echo pulse width to whole centimeters
pub fn pulse_to_cm(pulse_us: u32) -> u16 {
    (pulse_us as f32 * SOUND_CM_PER_US / 2.0) as u16
}

/// Convert whole centimeters to meters
pub fn cm_to_m(cm: u16) -> f32 {
    cm as f32 / 100.0
}

/// Last-value-retained distance policy
///
/// A failed read keeps the previous distance instead of propagating an
/// unknown state downstream. This is deliberate: a single missed echo
/// must not drop the annunciator out of a Danger band. Starts at zero,
/// so the monitor boots in Danger until the first successful reading.
#[derive(Debug, Default)]
pub struct RangeTracker {
    last_cm: u16,
}

impl RangeTracker {
    pub fn new() -> Self {
        Self { last_cm: 0 }
    }

    /// Fold one reading; returns the distance to publish
    pub fn update(&mut self, reading: Result<u16, SensorError>) -> u16 {
        if let Ok(cm) = reading {
            self.last_cm = cm;
        }
        self.last_cm
    }

    /// Latest published distance in centimeters
    pub fn last_cm(&self) -> u16 {
        self.last_cm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_conversion() {
        assert_eq!(pulse_to_cm(0), 0);
        // 1000 us round trip -> 17.15 cm one way
        assert_eq!(pulse_to_cm(1000), 17);
        // ~4 m, the sensor's rated limit
        assert_eq!(pulse_to_cm(23_324), 400);
    }

    #[test]
    fn test_cm_to_m() {
        assert!((cm_to_m(450) - 4.5).abs() < 1e-6);
        assert_eq!(cm_to_m(0), 0.0);
    }

    #[test]
    fn test_failed_read_retains_last_value() {
        let mut tracker = RangeTracker::new();
        assert_eq!(tracker.update(Ok(420)), 420);
        assert_eq!(tracker.update(Err(SensorError::Timeout)), 420);
        assert_eq!(tracker.last_cm(), 420);
    }

    #[test]
    fn test_starts_at_zero() {
        let mut tracker = RangeTracker::new();
        assert_eq!(tracker.last_cm(), 0);
        assert_eq!(tracker.update(Err(SensorError::Timeout)), 0);
    }
}
