//! Service layer composing the scheduler components.
//!
//! The services are the crate's entry points: each takes a curriculum the
//! ingestion layer has already fetched plus a plan request, and returns the
//! finished plan. They hold no state and perform no I/O.

pub mod study_plan;

pub use study_plan::{build_daily_hours_plan, build_date_range_plan};
