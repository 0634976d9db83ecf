//! Public API surface for the planning core.
//!
//! This file consolidates the DTO types exchanged with the presentation
//! layer: the two plan request payloads, their enums, and the response
//! wrapper for the frequency-bounded plan. All types derive
//! Serialize/Deserialize for JSON serialization.

pub use crate::models::plan::DayStudyPlan;
pub use crate::models::plan::Lecture;
pub use crate::models::plan::LectureSchedule;
pub use crate::models::plan::StudyDate;
pub use crate::models::plan::WeeklyStudyPlan;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many distinct calendar days per week the learner intends to study.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyFrequency {
    Daily,
    FiveTimesWeek,
    ThreeTimesWeek,
    TwoTimesWeek,
}

impl StudyFrequency {
    /// Number of study days this frequency maps to within one week.
    pub fn times_per_week(&self) -> u32 {
        match self {
            StudyFrequency::Daily => 7,
            StudyFrequency::FiveTimesWeek => 5,
            StudyFrequency::ThreeTimesWeek => 3,
            StudyFrequency::TwoTimesWeek => 2,
        }
    }
}

/// Whether public holidays count as eligible study dates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HolidayInclusion {
    IncludeHolidays,
    ExcludeHolidays,
}

/// Request for a date-bounded study plan.
///
/// The plan distributes the course's lectures across the eligible dates
/// between `start_date` and `end_date` (both inclusive).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDateRangePlanRequest {
    pub course_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub preferred_playback_speed: f64,
    pub study_frequency: StudyFrequency,
    pub holiday_inclusion: HolidayInclusion,
    /// Unit to resume from; 0 means from the start of the course.
    #[serde(default)]
    pub start_unit_id: i64,
}

/// Request for a frequency-bounded study plan.
///
/// The plan fills numbered study days up to `daily_study_minutes` each and
/// groups them into weeks of `study_frequency` days.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDailyHoursPlanRequest {
    pub course_id: String,
    pub daily_study_minutes: u32,
    pub study_frequency: StudyFrequency,
    pub preferred_playback_speed: f64,
    /// Unit to resume from; 0 means from the start of the course.
    #[serde(default)]
    pub start_unit_id: i64,
}

/// Response wrapper for the frequency-bounded plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHoursStudyPlanResponse {
    pub total_weeks: u32,
    pub total_days: u32,
    pub weekly_plans: Vec<WeeklyStudyPlan>,
}
