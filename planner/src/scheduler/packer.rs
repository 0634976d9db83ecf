//! Date-range packing.
//!
//! Distributes an ordered lecture sequence across a fixed set of study
//! dates, aiming at an even per-day share with some slack for lecture-size
//! granularity.

use crate::models::plan::{Lecture, LectureSchedule, StudyDate};
use crate::scheduler::error::{ScheduleError, ScheduleResult};

/// Slack applied to the even per-day share so a day can absorb one lecture
/// that overshoots it slightly.
const DAILY_TARGET_SLACK: f64 = 1.25;

/// Pack lectures onto study dates.
///
/// The per-day target is the total effective runtime divided evenly over the
/// dates, times the slack factor. Dates are walked in order: a non-final
/// date accepts lectures while the running total stays within the target,
/// but always accepts its first lecture, so no date with work remaining is
/// left empty. The final date absorbs every remaining lecture regardless of
/// the target. Dates that receive no lectures are omitted from the output.
///
/// # Arguments
///
/// * `lectures` - The ordered, speed-adjusted lecture sequence
/// * `dates` - The eligible study dates, ascending
///
/// # Returns
///
/// One `LectureSchedule` per date that received at least one lecture, in
/// date order, or `EmptyStudyDates` when `dates` is empty.
pub fn pack_into_dates(
    lectures: &[Lecture],
    dates: &[StudyDate],
) -> ScheduleResult<Vec<LectureSchedule>> {
    if dates.is_empty() {
        return Err(ScheduleError::EmptyStudyDates);
    }

    let total_runtime: f64 = lectures.iter().map(|l| l.runtime_seconds).sum();
    let target = total_runtime / dates.len() as f64 * DAILY_TARGET_SLACK;

    let mut schedules = Vec::new();
    let mut cursor = 0;

    for (index, study_date) in dates.iter().enumerate() {
        let is_final = index + 1 == dates.len();
        let mut day_lectures: Vec<Lecture> = Vec::new();
        let mut day_runtime = 0.0;

        while cursor < lectures.len() {
            let lecture = &lectures[cursor];
            let fits = day_lectures.is_empty()
                || day_runtime + lecture.runtime_seconds <= target;
            if !is_final && !fits {
                break;
            }
            day_runtime += lecture.runtime_seconds;
            day_lectures.push(lecture.clone());
            cursor += 1;
        }

        if !day_lectures.is_empty() {
            schedules.push(LectureSchedule {
                date: study_date.value(),
                lectures: day_lectures,
                total_runtime_seconds: day_runtime,
            });
        }
    }

    Ok(schedules)
}
