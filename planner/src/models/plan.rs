//! Plan output types produced by the scheduling components.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::course::UnitId;

/// A scheduling-level projection of one lecture unit.
///
/// Created fresh per planning request and never persisted. The display title
/// is prefixed with the section number and the unit's position within its
/// original section, so a schedule entry can be traced back even when the
/// plan resumes mid-course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    pub unit_id: UnitId,
    pub title: String,
    /// Effective runtime in seconds after playback-speed adjustment,
    /// truncated to one decimal place.
    pub runtime_seconds: f64,
}

/// A calendar date eligible for study.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct StudyDate(pub NaiveDate);

impl StudyDate {
    pub fn new(date: NaiveDate) -> Self {
        StudyDate(date)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for StudyDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NaiveDate> for StudyDate {
    fn from(date: NaiveDate) -> Self {
        StudyDate(date)
    }
}

/// The lectures assigned to one calendar date of a date-bounded plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureSchedule {
    pub date: NaiveDate,
    pub lectures: Vec<Lecture>,
    pub total_runtime_seconds: f64,
}

/// One numbered study day of a frequency-bounded plan.
///
/// Day numbers are sequential and 1-based; they are not calendar dates. The
/// displayed duration splits the summed runtime into whole minutes and whole
/// remainder seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStudyPlan {
    pub day_number: u32,
    pub lectures: Vec<Lecture>,
    pub minutes: u32,
    pub seconds: u32,
}

/// One numbered week of a frequency-bounded plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStudyPlan {
    pub week_number: u32,
    pub day_plans: Vec<DayStudyPlan>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_date_ordering() {
        let a = StudyDate::new(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        let b = StudyDate::new(NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
        assert!(a < b);
        assert_eq!(a.to_string(), "2025-01-06");
    }

    #[test]
    fn test_lecture_schedule_serialization() {
        let schedule = LectureSchedule {
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            lectures: vec![Lecture {
                unit_id: UnitId::new(101),
                title: "1-1. Orientation".to_string(),
                runtime_seconds: 99.3,
            }],
            total_runtime_seconds: 99.3,
        };
        let json = serde_json::to_string(&schedule).unwrap();
        assert!(json.contains("\"date\":\"2025-01-06\""));
        assert!(json.contains("\"runtimeSeconds\":99.3"));
    }
}
