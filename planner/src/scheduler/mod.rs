//! Study-schedule computation.
//!
//! The components here are pure, synchronous functions over immutable
//! inputs:
//!
//! - [`playback`]: flatten a curriculum into speed-adjusted lectures
//! - [`study_dates`]: pick the eligible calendar dates in a range
//! - [`packer`]: distribute lectures across a fixed set of dates
//! - [`divider`]: fill numbered days up to a daily time budget
//! - [`grouper`]: group day buckets into numbered weeks
//!
//! Invalid inputs are rejected up front with a typed [`ScheduleError`];
//! no partial output is ever produced.

pub mod divider;
pub mod error;
pub mod grouper;
pub mod packer;
pub mod playback;
pub mod study_dates;

pub use error::{ScheduleError, ScheduleResult};
