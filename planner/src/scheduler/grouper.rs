//! Weekly grouping.
//!
//! Turns the daily-budget divider's buckets into numbered study days and
//! groups them into weeks of the requested study frequency.

use crate::api::StudyFrequency;
use crate::models::plan::{DayStudyPlan, Lecture, WeeklyStudyPlan};

/// Group day buckets into numbered weeks.
///
/// Buckets are consumed in order into weeks of `times_per_week` days; the
/// last week keeps whatever remains. Day and week numbers are sequential and
/// 1-based. A day's displayed duration is its summed runtime split into
/// whole minutes and whole remainder seconds, dropping any sub-second
/// fraction.
pub fn group_into_weeks(
    buckets: &[Vec<Lecture>],
    frequency: StudyFrequency,
) -> Vec<WeeklyStudyPlan> {
    let days_per_week = frequency.times_per_week() as usize;

    let mut weekly_plans = Vec::new();
    let mut day_number = 0u32;

    for (week_index, chunk) in buckets.chunks(days_per_week).enumerate() {
        let mut day_plans = Vec::with_capacity(chunk.len());
        for lectures in chunk {
            day_number += 1;
            let total_seconds: f64 = lectures.iter().map(|l| l.runtime_seconds).sum();
            day_plans.push(DayStudyPlan {
                day_number,
                lectures: lectures.clone(),
                minutes: (total_seconds / 60.0).floor() as u32,
                seconds: (total_seconds % 60.0).floor() as u32,
            });
        }
        weekly_plans.push(WeeklyStudyPlan {
            week_number: week_index as u32 + 1,
            day_plans,
        });
    }

    weekly_plans
}
