//! Study-plan building.
//!
//! The two entry points compose the scheduler components into the crate's
//! deliverables: a date-bounded schedule and a frequency-bounded weekly
//! plan. Both are deterministic functions of their inputs.

use crate::api::{
    CreateDailyHoursPlanRequest, CreateDateRangePlanRequest, DailyHoursStudyPlanResponse,
};
use crate::models::course::{CurriculumData, UnitId};
use crate::models::holidays::HolidayCalendar;
use crate::models::plan::LectureSchedule;
use crate::scheduler::{divider, grouper, packer, playback, study_dates, ScheduleResult};

/// Build a date-bounded study plan.
///
/// Flattens the curriculum at the requested playback speed, selects the
/// eligible dates between the request's start and end under its holiday
/// policy and frequency, and packs the lectures onto those dates.
///
/// # Arguments
///
/// * `curriculum` - The course's curriculum, already fetched
/// * `request` - The date-range plan request
/// * `holidays` - Holiday set for the operative year
///
/// # Returns
///
/// One `LectureSchedule` per study date that received lectures, in date
/// order.
pub fn build_date_range_plan(
    curriculum: &CurriculumData,
    request: &CreateDateRangePlanRequest,
    holidays: &HolidayCalendar,
) -> ScheduleResult<Vec<LectureSchedule>> {
    log::debug!(
        "building date-range plan for course {} ({} .. {}, speed {})",
        request.course_id,
        request.start_date,
        request.end_date,
        request.preferred_playback_speed
    );

    let lectures = playback::adjust_playback(
        curriculum,
        request.preferred_playback_speed,
        UnitId::new(request.start_unit_id),
    )?;
    let dates = study_dates::select_study_dates(
        request.start_date,
        request.end_date,
        request.study_frequency,
        request.holiday_inclusion,
        holidays,
    )?;
    let schedules = packer::pack_into_dates(&lectures, &dates)?;

    log::debug!(
        "packed {} lectures onto {} of {} eligible dates",
        lectures.len(),
        schedules.len(),
        dates.len()
    );
    Ok(schedules)
}

/// Build a frequency-bounded study plan.
///
/// Flattens the curriculum at the requested playback speed, fills numbered
/// study days up to the daily minute budget, and groups them into weeks of
/// the requested frequency.
///
/// # Arguments
///
/// * `curriculum` - The course's curriculum, already fetched
/// * `request` - The daily-hours plan request
///
/// # Returns
///
/// The weekly plans together with the total week and day counts.
pub fn build_daily_hours_plan(
    curriculum: &CurriculumData,
    request: &CreateDailyHoursPlanRequest,
) -> ScheduleResult<DailyHoursStudyPlanResponse> {
    log::debug!(
        "building daily-hours plan for course {} ({} min/day, speed {})",
        request.course_id,
        request.daily_study_minutes,
        request.preferred_playback_speed
    );

    let lectures = playback::adjust_playback(
        curriculum,
        request.preferred_playback_speed,
        UnitId::new(request.start_unit_id),
    )?;
    let ceiling_seconds = f64::from(request.daily_study_minutes) * 60.0;
    let buckets = divider::divide_by_daily_budget(&lectures, ceiling_seconds)?;
    let weekly_plans = grouper::group_into_weeks(&buckets, request.study_frequency);

    let total_days = weekly_plans
        .last()
        .and_then(|week| week.day_plans.last())
        .map(|day| day.day_number)
        .unwrap_or(0);

    log::debug!(
        "divided {} lectures into {} study days over {} weeks",
        lectures.len(),
        total_days,
        weekly_plans.len()
    );
    Ok(DailyHoursStudyPlanResponse {
        total_weeks: weekly_plans.len() as u32,
        total_days,
        weekly_plans,
    })
}
