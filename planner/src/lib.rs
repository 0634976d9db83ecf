//! # Learning Planner Core
//!
//! Scheduling engine that turns an online course's curriculum into a
//! personalized study calendar.
//!
//! Given a curriculum (ordered sections of timed lecture units), a playback
//! speed and the learner's availability, the crate produces either a
//! date-bounded schedule (lectures packed onto concrete calendar dates) or a
//! frequency-bounded schedule (numbered study days grouped into weeks under a
//! daily time budget).
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for plan requests and responses
//! - [`models`]: Course/curriculum domain types, plan output types, and the
//!   holiday calendar
//! - [`scheduler`]: The scheduling components (playback adjustment, study-date
//!   selection, date-range packing, daily-budget division, weekly grouping)
//! - [`services`]: The two plan-building entry points composing the scheduler
//!
//! ## Scope
//!
//! Everything here is a pure, synchronous computation over immutable inputs.
//! Fetching course metadata, persisting documents and serving HTTP are the
//! callers' responsibility; the crate consumes a curriculum that has already
//! been fetched and deserialized.

pub mod api;

pub mod models;

pub mod scheduler;

pub mod services;
