//! Board-agnostic core logic for the Veloguard cyclist safety monitor
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hazard band classification and annunciation policy
//! - Accelerometer calibration and fall detection
//! - Ranging pulse math and the last-value-retained distance policy
//!
//! Everything here is pure and host-testable; the firmware crate wires
//! these policies to real peripherals.

#![no_std]
#![deny(unsafe_code)]

pub mod hazard;
pub mod motion;
pub mod range;
