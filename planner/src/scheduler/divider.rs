//! Daily-budget division.
//!
//! Cuts an ordered lecture sequence into day buckets, each filled up to a
//! fixed time ceiling. Lectures are never split across days.

use crate::models::plan::Lecture;
use crate::scheduler::error::{ScheduleError, ScheduleResult};

/// Divide lectures into day buckets under a time ceiling.
///
/// Lectures are consumed in order. When adding the next lecture would push a
/// non-empty bucket past the ceiling, the bucket is closed and a new one
/// started; a lecture longer than the ceiling itself still gets a bucket of
/// its own. The trailing bucket is kept whatever its fill level.
///
/// # Arguments
///
/// * `lectures` - The ordered, speed-adjusted lecture sequence
/// * `ceiling_seconds` - Daily time budget in seconds, must be greater than 0
///
/// # Returns
///
/// The ordered day buckets, every input lecture appearing exactly once, or
/// `InvalidDailyBudget` when the ceiling is not positive.
pub fn divide_by_daily_budget(
    lectures: &[Lecture],
    ceiling_seconds: f64,
) -> ScheduleResult<Vec<Vec<Lecture>>> {
    if ceiling_seconds <= 0.0 {
        return Err(ScheduleError::InvalidDailyBudget {
            seconds: ceiling_seconds,
        });
    }

    let mut buckets: Vec<Vec<Lecture>> = Vec::new();
    let mut current: Vec<Lecture> = Vec::new();
    let mut current_seconds = 0.0;

    for lecture in lectures {
        if !current.is_empty() && current_seconds + lecture.runtime_seconds > ceiling_seconds {
            buckets.push(std::mem::take(&mut current));
            current_seconds = 0.0;
        }
        current_seconds += lecture.runtime_seconds;
        current.push(lecture.clone());
    }
    if !current.is_empty() {
        buckets.push(current);
    }

    Ok(buckets)
}
