//! Overtime occurrence reporting.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceEntry, EmployeeRecord, PeriodKey, RosterNames};

use super::attendance_aggregation::split_daily_hours;

/// A single day on which an employee worked past the daily threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeOccurrence {
    /// The employee.
    pub employee_id: u32,
    /// Roster name, or `Employee {id}` when the id is not on the roster.
    pub employee_name: String,
    /// The day.
    pub date: NaiveDate,
    /// Hours recorded that day.
    pub hours_worked: Decimal,
    /// Hours beyond the threshold, rounded to 2 decimal places.
    pub overtime_hours: Decimal,
}

/// Lists every attendance entry in the period with hours over the threshold.
///
/// Occurrences are returned in attendance order. Entries for employees who
/// are not on the roster are still reported.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{overtime_report, DEFAULT_REGULAR_HOURS_PER_DAY};
/// use payroll_engine::models::AttendanceEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
/// let attendance = vec![
///     AttendanceEntry::new(1, day(3), Decimal::new(8, 0)),
///     AttendanceEntry::new(1, day(4), Decimal::new(105, 1)),
/// ];
///
/// let report = overtime_report(&[], &attendance, &"03-2025".parse().unwrap(), DEFAULT_REGULAR_HOURS_PER_DAY);
/// assert_eq!(report.len(), 1);
/// assert_eq!(report[0].employee_name, "Employee 1");
/// assert_eq!(report[0].overtime_hours, Decimal::new(25, 1));
/// ```
pub fn overtime_report(
    employees: &[EmployeeRecord],
    entries: &[AttendanceEntry],
    period: &PeriodKey,
    regular_threshold: Decimal,
) -> Vec<OvertimeOccurrence> {
    let names = RosterNames::new(employees);

    entries
        .iter()
        .filter_map(|entry| {
            let date = entry.date.filter(|d| period.contains(*d))?;
            let split = split_daily_hours(date, entry.hours_or_zero(), regular_threshold);
            if split.overtime_hours <= Decimal::ZERO {
                return None;
            }

            Some(OvertimeOccurrence {
                employee_id: entry.employee_id,
                employee_name: names.name(entry.employee_id),
                date,
                hours_worked: split.hours_worked,
                overtime_hours: split.overtime_hours.round_dp(2),
            })
        })
        .collect()
}
