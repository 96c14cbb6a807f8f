//! Inter-task communication channels
//!
//! Defines the static signals, channels and shared state used between
//! Embassy tasks. Uses embassy-sync primitives for safe async
//! communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use defmt::warn;
use heapless::String;
use portable_atomic::AtomicU32;

/// Channel capacity for outbound serial report lines
const REPORT_CHANNEL_SIZE: usize = 8;

/// Maximum length of one report line (without CRLF)
pub const REPORT_LINE_LEN: usize = 64;

/// One outbound serial line
pub type ReportLine = String<REPORT_LINE_LEN>;

/// Wake latch for the distance sampler, posted by the range cadence task.
/// Single-slot: a post while one is already pending coalesces.
pub static RANGE_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Wake latch for the acceleration sampler, posted by the accel cadence task
pub static ACCEL_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Latest obstacle distance in whole centimeters.
///
/// Written only by the distance sampler, read by the annunciator with
/// relaxed ordering. Kept as a single machine word on purpose - the
/// original design shares this value without a lock, and a width-matched
/// atomic preserves that behavior exactly. Widening it into a composite
/// struct requires adding a mutex.
pub static DISTANCE_CM: AtomicU32 = AtomicU32::new(0);

/// Outbound serial report lines (hazard phrases, fall reports)
pub static REPORT_CHANNEL: Channel<CriticalSectionRawMutex, ReportLine, REPORT_CHANNEL_SIZE> =
    Channel::new();

/// Queue a line for the serial reporter without blocking the caller
///
/// A full channel drops the line - the serial side offers no delivery
/// guarantee beyond what the transport provides.
pub fn report(phrase: &str) {
    let mut line = ReportLine::new();
    // Every phrase in the protocol fits a report line
    let _ = line.push_str(phrase);
    if REPORT_CHANNEL.try_send(line).is_err() {
        warn!("Report channel full, dropping line");
    }
}
