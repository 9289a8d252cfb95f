//! Attendance history and daily attendance views.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceEntry, EmployeeRecord, RosterNames};

/// Whether an employee signed in on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    /// A sign-in was recorded.
    Present,
    /// The entry has no sign-in.
    Absent,
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// One employee's attendance on the day being summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
    /// The employee.
    pub employee_id: u32,
    /// Roster name, or `Employee {id}` when the id is not on the roster.
    pub employee_name: String,
    /// Sign-in time, if recorded.
    pub sign_in: Option<NaiveDateTime>,
    /// Sign-out time, if recorded.
    pub sign_out: Option<NaiveDateTime>,
    /// Hours recorded, zero when missing.
    pub hours_worked: Decimal,
    /// `Present` iff a sign-in was recorded.
    pub status: AttendanceStatus,
}

/// Returns one employee's attendance entries ordered by date.
///
/// The sort is stable, so entries sharing a date keep their input order.
/// Entries without a usable date come first.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::attendance_history;
/// use payroll_engine::models::AttendanceEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 7, d).unwrap();
/// let attendance = vec![
///     AttendanceEntry::new(1, day(22), Decimal::new(8, 0)),
///     AttendanceEntry::new(2, day(20), Decimal::new(8, 0)),
///     AttendanceEntry::new(1, day(21), Decimal::new(9, 0)),
/// ];
///
/// let history = attendance_history(&attendance, 1);
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[0].date, Some(day(21)));
/// ```
pub fn attendance_history(entries: &[AttendanceEntry], employee_id: u32) -> Vec<&AttendanceEntry> {
    let mut history: Vec<&AttendanceEntry> = entries
        .iter()
        .filter(|e| e.employee_id == employee_id)
        .collect();
    history.sort_by_key(|e| e.date);
    history
}

/// Summarizes everyone's attendance on one date, in attendance order.
pub fn daily_attendance(
    employees: &[EmployeeRecord],
    entries: &[AttendanceEntry],
    date: NaiveDate,
) -> Vec<DailyAttendance> {
    let names = RosterNames::new(employees);

    entries
        .iter()
        .filter(|e| e.date == Some(date))
        .map(|entry| DailyAttendance {
            employee_id: entry.employee_id,
            employee_name: names.name(entry.employee_id),
            sign_in: entry.sign_in,
            sign_out: entry.sign_out,
            hours_worked: entry.hours_or_zero(),
            status: if entry.sign_in.is_some() {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            },
        })
        .collect()
}
