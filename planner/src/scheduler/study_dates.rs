//! Study-date selection.
//!
//! Enumerates the calendar dates of a request's range, applies the holiday
//! policy, and thins the remainder down to the requested weekly frequency.
//! Selection within a week follows fixed positional rules that spread the
//! chosen days across the week instead of front-loading them.

use chrono::{Datelike, NaiveDate};

use crate::api::{HolidayInclusion, StudyFrequency};
use crate::models::holidays::HolidayCalendar;
use crate::models::plan::StudyDate;
use crate::scheduler::error::{ScheduleError, ScheduleResult};

/// Select the calendar dates eligible for study.
///
/// Every date from `start` to `end` (inclusive) is a candidate; holidays are
/// removed when the policy excludes them. `Daily` keeps the full candidate
/// list. Any other frequency groups the candidates by ISO calendar week and
/// picks `times_per_week` dates from each week (all of them when a week has
/// fewer).
///
/// # Arguments
///
/// * `start` - First date of the range
/// * `end` - Last date of the range, inclusive
/// * `frequency` - Target number of study days per week
/// * `holiday_inclusion` - Whether holidays stay eligible
/// * `holidays` - The holiday set for the operative year
///
/// # Returns
///
/// The ordered, deduplicated study dates, or `InvalidDateRange` when `end`
/// precedes `start`.
pub fn select_study_dates(
    start: NaiveDate,
    end: NaiveDate,
    frequency: StudyFrequency,
    holiday_inclusion: HolidayInclusion,
    holidays: &HolidayCalendar,
) -> ScheduleResult<Vec<StudyDate>> {
    if end < start {
        return Err(ScheduleError::InvalidDateRange { start, end });
    }

    let mut candidates: Vec<NaiveDate> =
        start.iter_days().take_while(|d| *d <= end).collect();
    if holiday_inclusion == HolidayInclusion::ExcludeHolidays {
        candidates.retain(|d| !holidays.contains(*d));
    }

    if frequency == StudyFrequency::Daily {
        return Ok(candidates.into_iter().map(StudyDate::new).collect());
    }

    let target = frequency.times_per_week() as usize;
    let mut selected: Vec<NaiveDate> = group_by_iso_week(&candidates)
        .into_iter()
        .flat_map(|week| select_within_week(&week, target))
        .collect();
    selected.sort_unstable();
    selected.dedup();

    Ok(selected.into_iter().map(StudyDate::new).collect())
}

/// Group ascending dates into runs sharing the same ISO calendar week.
fn group_by_iso_week(dates: &[NaiveDate]) -> Vec<Vec<NaiveDate>> {
    let mut weeks: Vec<((i32, u32), Vec<NaiveDate>)> = Vec::new();
    for &date in dates {
        let iso = date.iso_week();
        let key = (iso.year(), iso.week());
        match weeks.last_mut() {
            Some((last_key, bucket)) if *last_key == key => bucket.push(date),
            _ => weeks.push((key, vec![date])),
        }
    }
    weeks.into_iter().map(|(_, bucket)| bucket).collect()
}

/// Pick `target` dates from one week's sorted availability.
///
/// Weeks with more availability than the target use positional picks that
/// spread the study days out; availability counts without a documented rule
/// fall back to the first `target` dates and are flagged for product
/// clarification.
fn select_within_week(week: &[NaiveDate], target: usize) -> Vec<NaiveDate> {
    let available = week.len();
    if available <= target {
        return week.to_vec();
    }

    let picks: Option<&[usize]> = match (target, available) {
        (2, 6..=7) => Some(&[1, 4]),
        (2, 4..=5) => Some(&[1, 3]),
        (3, 6..=7) => Some(&[1, 3, 5]),
        (3, 5) => Some(&[0, 2, 4]),
        _ => None,
    };

    match picks {
        Some(indices) => indices.iter().map(|&i| week[i]).collect(),
        None => {
            log::warn!(
                "no documented selection rule for {} available dates in week of {} \
                 with target {}; taking the first {}",
                available,
                week[0],
                target,
                target
            );
            week[..target].to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates_of(selected: &[StudyDate]) -> Vec<NaiveDate> {
        selected.iter().map(|s| s.value()).collect()
    }

    fn select(
        start: NaiveDate,
        end: NaiveDate,
        frequency: StudyFrequency,
        inclusion: HolidayInclusion,
    ) -> Vec<NaiveDate> {
        let calendar = HolidayCalendar::default();
        dates_of(&select_study_dates(start, end, frequency, inclusion, &calendar).unwrap())
    }

    #[test]
    fn test_rejects_inverted_range() {
        let calendar = HolidayCalendar::empty();
        let result = select_study_dates(
            date(2025, 2, 1),
            date(2025, 1, 1),
            StudyFrequency::Daily,
            HolidayInclusion::IncludeHolidays,
            &calendar,
        );
        assert_eq!(
            result,
            Err(ScheduleError::InvalidDateRange {
                start: date(2025, 2, 1),
                end: date(2025, 1, 1),
            })
        );
    }

    #[test]
    fn test_single_day_range() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 6),
            StudyFrequency::Daily,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(selected, vec![date(2025, 1, 6)]);
    }

    #[test]
    fn test_daily_returns_full_range() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 12),
            StudyFrequency::Daily,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(selected.len(), 7);
        assert_eq!(selected[0], date(2025, 1, 6));
        assert_eq!(selected[6], date(2025, 1, 12));
    }

    #[test]
    fn test_holiday_exclusion_january_2025() {
        // January 2025 has five public holidays: New Year's Day and the
        // Seollal block on the 27th through 30th.
        let selected = select(
            date(2025, 1, 1),
            date(2025, 1, 31),
            StudyFrequency::Daily,
            HolidayInclusion::ExcludeHolidays,
        );
        assert_eq!(selected.len(), 26);
        for missing in [
            date(2025, 1, 1),
            date(2025, 1, 27),
            date(2025, 1, 28),
            date(2025, 1, 29),
            date(2025, 1, 30),
        ] {
            assert!(!selected.contains(&missing), "{} should be excluded", missing);
        }
        assert!(selected.contains(&date(2025, 1, 2)));
        assert!(selected.contains(&date(2025, 1, 31)));
    }

    #[test]
    fn test_holiday_inclusion_keeps_holidays() {
        let selected = select(
            date(2025, 1, 1),
            date(2025, 1, 31),
            StudyFrequency::Daily,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(selected.len(), 31);
    }

    #[test]
    fn test_twice_weekly_full_week_picks_positions_1_and_4() {
        // 2025-01-06 is a Monday; the full ISO week runs through Sunday the
        // 12th. With seven dates available, positions 1 and 4 are Tuesday
        // and Friday.
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 12),
            StudyFrequency::TwoTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(selected, vec![date(2025, 1, 7), date(2025, 1, 10)]);
    }

    #[test]
    fn test_twice_weekly_five_available_picks_positions_1_and_3() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 10),
            StudyFrequency::TwoTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(selected, vec![date(2025, 1, 7), date(2025, 1, 9)]);
    }

    #[test]
    fn test_twice_weekly_four_available_picks_positions_1_and_3() {
        // Thursday through Sunday of one ISO week.
        let selected = select(
            date(2025, 1, 9),
            date(2025, 1, 12),
            StudyFrequency::TwoTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(selected, vec![date(2025, 1, 10), date(2025, 1, 12)]);
    }

    #[test]
    fn test_twice_weekly_three_available_takes_first_two() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 8),
            StudyFrequency::TwoTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(selected, vec![date(2025, 1, 6), date(2025, 1, 7)]);
    }

    #[test]
    fn test_thrice_weekly_full_week_picks_positions_1_3_5() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 12),
            StudyFrequency::ThreeTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(
            selected,
            vec![date(2025, 1, 7), date(2025, 1, 9), date(2025, 1, 11)]
        );
    }

    #[test]
    fn test_thrice_weekly_five_available_picks_positions_0_2_4() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 10),
            StudyFrequency::ThreeTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(
            selected,
            vec![date(2025, 1, 6), date(2025, 1, 8), date(2025, 1, 10)]
        );
    }

    #[test]
    fn test_thrice_weekly_four_available_takes_first_three() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 9),
            StudyFrequency::ThreeTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(
            selected,
            vec![date(2025, 1, 6), date(2025, 1, 7), date(2025, 1, 8)]
        );
    }

    #[test]
    fn test_fewer_available_than_target_takes_all() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 7),
            StudyFrequency::ThreeTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(selected, vec![date(2025, 1, 6), date(2025, 1, 7)]);
    }

    #[test]
    fn test_five_times_week_takes_first_five() {
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 12),
            StudyFrequency::FiveTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(
            selected,
            vec![
                date(2025, 1, 6),
                date(2025, 1, 7),
                date(2025, 1, 8),
                date(2025, 1, 9),
                date(2025, 1, 10),
            ]
        );
    }

    #[test]
    fn test_selection_spans_weeks_and_stays_sorted() {
        // Two full ISO weeks; each contributes its Tuesday and Friday.
        let selected = select(
            date(2025, 1, 6),
            date(2025, 1, 19),
            StudyFrequency::TwoTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(
            selected,
            vec![
                date(2025, 1, 7),
                date(2025, 1, 10),
                date(2025, 1, 14),
                date(2025, 1, 17),
            ]
        );
    }

    #[test]
    fn test_holiday_exclusion_shrinks_week_before_selection() {
        // The Seollal week (Mon 2025-01-27 .. Sun 2025-02-02) loses four
        // dates to holidays, leaving the 31st, 1st and 2nd. Three available
        // with target 2 falls back to the first two.
        let selected = select(
            date(2025, 1, 27),
            date(2025, 2, 2),
            StudyFrequency::TwoTimesWeek,
            HolidayInclusion::ExcludeHolidays,
        );
        assert_eq!(selected, vec![date(2025, 1, 31), date(2025, 2, 1)]);
    }

    #[test]
    fn test_iso_week_boundary_splits_groups() {
        // 2024-12-30 and 31 belong to ISO week 2025-W01 together with
        // 2025-01-01..05; the next group starts Monday the 6th.
        let selected = select(
            date(2024, 12, 30),
            date(2025, 1, 12),
            StudyFrequency::TwoTimesWeek,
            HolidayInclusion::IncludeHolidays,
        );
        assert_eq!(
            selected,
            vec![date(2024, 12, 31), date(2025, 1, 3), date(2025, 1, 7), date(2025, 1, 10)]
        );
    }
}
