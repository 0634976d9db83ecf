//! Holiday calendar support.
//!
//! The study-date selector takes the holiday set as an injected parameter so
//! it can be exercised against arbitrary years. A calendar can be built from
//! an explicit date list or read from a TOML file; a built-in set covers the
//! Korean public holidays of 2025.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Korean public holidays for 2025, including substitute and temporary
/// holidays.
static KOREAN_PUBLIC_HOLIDAYS_2025: Lazy<BTreeSet<NaiveDate>> = Lazy::new(|| {
    const DATES: &[(i32, u32, u32)] = &[
        (2025, 1, 1),
        (2025, 1, 27),
        (2025, 1, 28),
        (2025, 1, 29),
        (2025, 1, 30),
        (2025, 3, 1),
        (2025, 3, 3),
        (2025, 5, 5),
        (2025, 5, 6),
        (2025, 6, 3),
        (2025, 6, 6),
        (2025, 8, 15),
        (2025, 10, 3),
        (2025, 10, 5),
        (2025, 10, 6),
        (2025, 10, 7),
        (2025, 10, 8),
        (2025, 10, 9),
        (2025, 12, 25),
    ];
    DATES
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
});

/// TOML shape of a calendar file: `dates = ["2025-01-01", ...]`.
#[derive(Debug, Deserialize)]
struct HolidayCalendarFile {
    dates: Vec<NaiveDate>,
}

/// A set of calendar dates treated as holidays by the study-date selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Build a calendar from an explicit list of dates.
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// An empty calendar (no date is a holiday).
    pub fn empty() -> Self {
        Self {
            dates: BTreeSet::new(),
        }
    }

    /// The built-in Korean public-holiday set for 2025.
    pub fn korean_public_holidays_2025() -> Self {
        Self {
            dates: KOREAN_PUBLIC_HOLIDAYS_2025.clone(),
        }
    }

    /// Load a calendar from a TOML string.
    ///
    /// Expected shape:
    ///
    /// ```toml
    /// dates = ["2025-01-01", "2025-01-27"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: HolidayCalendarFile =
            toml::from_str(content).context("Failed to parse holiday calendar TOML")?;
        Ok(Self::new(file.dates))
    }

    /// Load a calendar from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read holiday calendar file: {}",
                path.as_ref().display()
            )
        })?;
        Self::from_toml_str(&content)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::korean_public_holidays_2025()
    }
}
