//! Attendance aggregation for a payroll period.
//!
//! This module splits each day's recorded hours into regular and overtime
//! portions and accumulates them over the attendance entries of one
//! employee in one period.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceEntry, PeriodKey};

/// Default number of hours per day paid at the base rate.
pub const DEFAULT_REGULAR_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// One day's hours split at the daily threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoursSplit {
    /// The attendance date.
    pub date: NaiveDate,
    /// The hours recorded that day.
    pub hours_worked: Decimal,
    /// Hours up to the threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the threshold (can be zero).
    pub overtime_hours: Decimal,
}

/// Splits one day's hours at the regular-hours threshold.
///
/// Hours strictly above the threshold contribute the threshold to regular
/// hours and the excess to overtime. Otherwise all hours are regular.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{split_daily_hours, DEFAULT_REGULAR_HOURS_PER_DAY};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
///
/// let long_day = split_daily_hours(date, Decimal::from_str("10").unwrap(), DEFAULT_REGULAR_HOURS_PER_DAY);
/// assert_eq!(long_day.regular_hours, Decimal::from_str("8").unwrap());
/// assert_eq!(long_day.overtime_hours, Decimal::from_str("2").unwrap());
///
/// let short_day = split_daily_hours(date, Decimal::from_str("6.5").unwrap(), DEFAULT_REGULAR_HOURS_PER_DAY);
/// assert_eq!(short_day.regular_hours, Decimal::from_str("6.5").unwrap());
/// assert_eq!(short_day.overtime_hours, Decimal::ZERO);
/// ```
pub fn split_daily_hours(date: NaiveDate, hours_worked: Decimal, threshold: Decimal) -> DailyHoursSplit {
    let (regular_hours, overtime_hours) = if hours_worked > threshold {
        (threshold, hours_worked - threshold)
    } else {
        (hours_worked, Decimal::ZERO)
    };

    DailyHoursSplit {
        date,
        hours_worked,
        regular_hours,
        overtime_hours,
    }
}

/// Regular and overtime hours accumulated over a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceAggregate {
    /// Total regular hours.
    pub regular_hours: Decimal,
    /// Total overtime hours.
    pub overtime_hours: Decimal,
    /// True iff at least one entry matched the employee and period.
    ///
    /// Distinguishes "tracked but zero hours" from "no record at all".
    pub matched: bool,
    /// The per-day splits, in entry order.
    pub days: Vec<DailyHoursSplit>,
}

impl AttendanceAggregate {
    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> EngineResult<Decimal> {
        self.regular_hours
            .checked_add(self.overtime_hours)
            .ok_or_else(|| EngineError::overflow("total hours"))
    }

    fn push_day(&mut self, split: DailyHoursSplit) -> EngineResult<()> {
        self.regular_hours = self
            .regular_hours
            .checked_add(split.regular_hours)
            .ok_or_else(|| EngineError::overflow("regular hours"))?;
        self.overtime_hours = self
            .overtime_hours
            .checked_add(split.overtime_hours)
            .ok_or_else(|| EngineError::overflow("overtime hours"))?;
        self.matched = true;
        self.days.push(split);
        Ok(())
    }
}

/// Aggregates one employee's attendance for one period.
///
/// Only entries for `employee_id` whose date falls in `period` are counted.
/// Entries without a usable date are skipped. Entries without hours count
/// as zero hours but still mark the employee as matched.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{aggregate_attendance, DEFAULT_REGULAR_HOURS_PER_DAY};
/// use payroll_engine::models::AttendanceEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
/// let entries = vec![
///     AttendanceEntry::new(1, day(3), Decimal::new(8, 0)),
///     AttendanceEntry::new(1, day(4), Decimal::new(10, 0)),
///     AttendanceEntry::new(1, day(5), Decimal::new(4, 0)),
///     AttendanceEntry::new(2, day(5), Decimal::new(12, 0)),
/// ];
///
/// let aggregate = aggregate_attendance(
///     &entries,
///     1,
///     &"03-2025".parse().unwrap(),
///     DEFAULT_REGULAR_HOURS_PER_DAY,
/// )?;
/// assert!(aggregate.matched);
/// assert_eq!(aggregate.regular_hours, Decimal::new(20, 0));
/// assert_eq!(aggregate.overtime_hours, Decimal::new(2, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] if the accumulated hours
/// leave the range of [`Decimal`].
pub fn aggregate_attendance(
    entries: &[AttendanceEntry],
    employee_id: u32,
    period: &PeriodKey,
    regular_threshold: Decimal,
) -> EngineResult<AttendanceAggregate> {
    aggregate_entries(
        entries.iter().filter(|e| e.employee_id == employee_id),
        period,
        regular_threshold,
    )
}

/// Aggregates entries already selected for a single employee.
///
/// Same rules as [`aggregate_attendance`] without the employee filter. A
/// payroll run groups the attendance by employee once and feeds each
/// group through here.
pub fn aggregate_entries<'a, I>(
    entries: I,
    period: &PeriodKey,
    regular_threshold: Decimal,
) -> EngineResult<AttendanceAggregate>
where
    I: IntoIterator<Item = &'a AttendanceEntry>,
{
    let mut aggregate = AttendanceAggregate::default();

    for entry in entries {
        let Some(date) = entry.date else {
            debug!(
                employee_id = entry.employee_id,
                "Skipping attendance entry without a usable date"
            );
            continue;
        };
        if !period.contains(date) {
            continue;
        }

        aggregate.push_day(split_daily_hours(date, entry.hours_or_zero(), regular_threshold))?;
    }

    Ok(aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(key: &str) -> PeriodKey {
        key.parse().unwrap()
    }

    fn entry(employee_id: u32, date: NaiveDate, hours: &str) -> AttendanceEntry {
        AttendanceEntry::new(employee_id, date, dec(hours))
    }

    // ==========================================================================
    // split_daily_hours
    // ==========================================================================

    #[test]
    fn test_split_exactly_at_threshold_is_all_regular() {
        let split = split_daily_hours(day(2025, 3, 3), dec("8"), dec("8"));
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_split_above_threshold() {
        let split = split_daily_hours(day(2025, 3, 3), dec("11.25"), dec("8"));
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("3.25"));
        assert_eq!(split.hours_worked, dec("11.25"));
    }

    #[test]
    fn test_split_just_above_threshold() {
        let split = split_daily_hours(day(2025, 3, 3), dec("8.01"), dec("8"));
        assert_eq!(split.regular_hours, dec("8"));
        assert_eq!(split.overtime_hours, dec("0.01"));
    }

    #[test]
    fn test_split_zero_hours() {
        let split = split_daily_hours(day(2025, 3, 3), Decimal::ZERO, dec("8"));
        assert_eq!(split.regular_hours, Decimal::ZERO);
        assert_eq!(split.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_split_custom_threshold() {
        let split = split_daily_hours(day(2025, 3, 3), dec("9"), dec("7.5"));
        assert_eq!(split.regular_hours, dec("7.5"));
        assert_eq!(split.overtime_hours, dec("1.5"));
    }

    // ==========================================================================
    // aggregate_attendance
    // ==========================================================================

    #[test]
    fn test_aggregate_three_day_scenario() {
        let entries = vec![
            entry(1, day(2025, 3, 3), "8"),
            entry(1, day(2025, 3, 4), "10"),
            entry(1, day(2025, 3, 5), "4"),
        ];
        let aggregate =
            aggregate_attendance(&entries, 1, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY)
                .unwrap();

        assert!(aggregate.matched);
        assert_eq!(aggregate.regular_hours, dec("20"));
        assert_eq!(aggregate.overtime_hours, dec("2"));
        assert_eq!(aggregate.total_hours().unwrap(), dec("22"));
        assert_eq!(aggregate.days.len(), 3);
        assert_eq!(aggregate.days[1].overtime_hours, dec("2"));
    }

    #[test]
    fn test_aggregate_ignores_other_employees() {
        let entries = vec![
            entry(1, day(2025, 3, 3), "8"),
            entry(2, day(2025, 3, 3), "12"),
        ];
        let aggregate =
            aggregate_attendance(&entries, 1, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY)
                .unwrap();
        assert_eq!(aggregate.regular_hours, dec("8"));
        assert_eq!(aggregate.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_ignores_other_months_and_years() {
        let entries = vec![
            entry(1, day(2025, 2, 28), "9"),
            entry(1, day(2024, 3, 15), "9"),
            entry(1, day(2025, 4, 1), "9"),
        ];
        let aggregate =
            aggregate_attendance(&entries, 1, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY)
                .unwrap();
        assert!(!aggregate.matched);
        assert_eq!(aggregate.regular_hours, Decimal::ZERO);
        assert!(aggregate.days.is_empty());
    }

    #[test]
    fn test_aggregate_zero_hour_entry_still_matches() {
        let entries = vec![entry(1, day(2025, 3, 10), "0")];
        let aggregate =
            aggregate_attendance(&entries, 1, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY)
                .unwrap();
        assert!(aggregate.matched);
        assert_eq!(aggregate.total_hours().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_missing_hours_count_as_zero_but_match() {
        let entries = vec![AttendanceEntry {
            employee_id: 1,
            date: Some(day(2025, 3, 10)),
            hours_worked: None,
            sign_in: None,
            sign_out: None,
        }];
        let aggregate =
            aggregate_attendance(&entries, 1, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY)
                .unwrap();
        assert!(aggregate.matched);
        assert_eq!(aggregate.regular_hours, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_skips_entries_without_date() {
        let entries = vec![
            AttendanceEntry {
                employee_id: 1,
                date: None,
                hours_worked: Some(dec("12")),
                sign_in: None,
                sign_out: None,
            },
            entry(1, day(2025, 3, 10), "6"),
        ];
        let aggregate =
            aggregate_attendance(&entries, 1, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY)
                .unwrap();
        assert!(aggregate.matched);
        assert_eq!(aggregate.regular_hours, dec("6"));
        assert_eq!(aggregate.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_aggregate_only_undated_entries_do_not_match() {
        let entries = vec![AttendanceEntry {
            employee_id: 1,
            date: None,
            hours_worked: Some(dec("8")),
            sign_in: None,
            sign_out: None,
        }];
        let aggregate =
            aggregate_attendance(&entries, 1, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY)
                .unwrap();
        assert!(!aggregate.matched);
    }

    #[test]
    fn test_aggregate_with_custom_threshold() {
        let entries = vec![entry(1, day(2025, 3, 3), "8")];
        let aggregate = aggregate_attendance(&entries, 1, &period("03-2025"), dec("6")).unwrap();
        assert_eq!(aggregate.regular_hours, dec("6"));
        assert_eq!(aggregate.overtime_hours, dec("2"));
    }

    #[test]
    fn test_aggregate_entries_without_employee_filter() {
        let entries = vec![
            entry(1, day(2025, 3, 3), "9"),
            entry(1, day(2025, 4, 3), "9"),
            entry(1, day(2025, 3, 4), "7"),
        ];
        let aggregate = aggregate_entries(&entries, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY)
            .unwrap();
        assert_eq!(aggregate.regular_hours, dec("15"));
        assert_eq!(aggregate.overtime_hours, dec("1"));
        let dates: Vec<NaiveDate> = aggregate.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![day(2025, 3, 3), day(2025, 3, 4)]);
    }

    #[test]
    fn test_aggregate_overtime_overflow_is_an_error() {
        let huge = Decimal::MAX;
        let entries = vec![
            AttendanceEntry::new(1, day(2025, 3, 3), huge),
            AttendanceEntry::new(1, day(2025, 3, 4), huge),
        ];
        let result =
            aggregate_attendance(&entries, 1, &period("03-2025"), DEFAULT_REGULAR_HOURS_PER_DAY);
        assert!(matches!(
            result,
            Err(EngineError::ArithmeticOverflow { ref context }) if context == "overtime hours"
        ));
    }

    #[test]
    fn test_total_hours_overflow_is_an_error() {
        let aggregate = AttendanceAggregate {
            regular_hours: dec("8"),
            overtime_hours: Decimal::MAX,
            matched: true,
            days: vec![],
        };
        assert!(aggregate.total_hours().is_err());
    }

    #[test]
    fn test_default_threshold_constant() {
        assert_eq!(DEFAULT_REGULAR_HOURS_PER_DAY, dec("8"));
    }
}
