//! Pins the wake-signal semantics the sampler cadence relies on
//!
//! Each sampler task is woken by a single-slot `embassy_sync` Signal. The
//! firmware depends on two properties of that latch: a post made while the
//! task is busy is not lost, and a second post before the first consume
//! coalesces into one wake (a slow sampler skips samples instead of
//! catching up). These tests keep an embassy-sync upgrade from silently
//! changing either.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

#[test]
fn test_post_before_wait_is_latched() {
    let wake: Signal<CriticalSectionRawMutex, ()> = Signal::new();
    wake.signal(());
    assert!(wake.try_take().is_some());
}

#[test]
fn test_double_post_coalesces_to_one_wake() {
    let wake: Signal<CriticalSectionRawMutex, ()> = Signal::new();
    wake.signal(());
    wake.signal(());
    assert!(wake.try_take().is_some());
    assert!(wake.try_take().is_none());
}

#[test]
fn test_consumed_latch_is_empty() {
    let wake: Signal<CriticalSectionRawMutex, ()> = Signal::new();
    wake.signal(());
    let _ = wake.try_take();
    wake.signal(());
    assert!(wake.try_take().is_some());
    assert!(wake.try_take().is_none());
}
