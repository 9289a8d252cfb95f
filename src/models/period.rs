//! Payroll period model.
//!
//! A payroll run covers one calendar month. The [`PeriodKey`] holds that
//! month as structured `(month, year)` fields and only uses its textual
//! `MM-YYYY` form at the edges (parsing requests, labelling exports).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifies the calendar month a payroll run covers.
///
/// The textual form is a two-digit month, a `-`, and a four-digit year
/// (e.g. `"07-2025"`). Ordering is chronological.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PeriodKey;
/// use chrono::NaiveDate;
///
/// let period: PeriodKey = "03-2025".parse().unwrap();
/// assert_eq!(period.month(), 3);
/// assert_eq!(period.year(), 2025);
/// assert!(period.contains(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()));
/// assert!(!period.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
/// assert_eq!(period.to_string(), "03-2025");
///
/// assert!("3-2025".parse::<PeriodKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

impl PeriodKey {
    /// Creates a period key from a month (1-12) and a four-digit year.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(EngineError::InvalidPeriodKey {
                key: format!("{:02}-{:04}", month, year),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the period containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month, 1 through 12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Checks whether a date falls in this period's month and year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }
}

impl FromStr for PeriodKey {
    type Err = EngineError;

    fn from_str(key: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidPeriodKey {
            key: key.to_string(),
        };

        let (month, year) = key.split_once('-').ok_or_else(invalid)?;
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if month.len() != 2 || year.len() != 4 || !all_digits(month) || !all_digits(year) {
            return Err(invalid());
        }

        let month: u32 = month.parse().map_err(|_| invalid())?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }

        Ok(Self { year, month })
    }
}

impl TryFrom<String> for PeriodKey {
    type Error = EngineError;

    fn try_from(value: String) -> EngineResult<Self> {
        value.parse()
    }
}

impl From<PeriodKey> for String {
    fn from(period: PeriodKey) -> Self {
        period.to_string()
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:04}", self.month, self.year)
    }
}
