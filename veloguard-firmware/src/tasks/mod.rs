//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod accel_sampler;
pub mod annunciate;
pub mod cadence;
pub mod range_sampler;
pub mod report;

pub use accel_sampler::accel_sampler_task;
pub use annunciate::annunciate_task;
pub use cadence::{accel_cadence_task, range_cadence_task};
pub use range_sampler::range_sampler_task;
pub use report::report_task;
