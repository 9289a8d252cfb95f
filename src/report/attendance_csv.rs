//! CSV exports of attendance: one employee's history, one day's summary and
//! the overtime report.

use std::io::Write;

use serde::Serialize;

use crate::calculation::{DailyAttendance, OvertimeOccurrence};
use crate::error::EngineResult;
use crate::models::AttendanceEntry;

use super::csv_export::{csv_string, write_rows};
use super::format::{format_date, format_decimal, format_sign_time};

/// Column headers of the attendance history export.
pub const HISTORY_CSV_HEADERS: [&str; 4] = ["date", "sign_in", "sign_out", "hours"];

/// Column headers of the daily attendance export.
pub const DAILY_CSV_HEADERS: [&str; 6] = ["id", "name", "sign_in", "sign_out", "hours", "status"];

/// Column headers of the overtime report export.
pub const OVERTIME_CSV_HEADERS: [&str; 5] = ["id", "name", "date", "hours", "overtime_hours"];

#[derive(Debug, Serialize)]
struct HistoryRow {
    date: String,
    sign_in: String,
    sign_out: String,
    hours: String,
}

#[derive(Debug, Serialize)]
struct DailyRow<'a> {
    id: u32,
    name: &'a str,
    sign_in: String,
    sign_out: String,
    hours: String,
    status: String,
}

#[derive(Debug, Serialize)]
struct OvertimeRow<'a> {
    id: u32,
    name: &'a str,
    date: String,
    hours: String,
    overtime_hours: String,
}

/// Writes an attendance history (see
/// [`attendance_history`](crate::calculation::attendance_history)) as CSV.
///
/// Dates and times use the capture layout; missing values are empty cells
/// and missing hours are written as `0.00`.
pub fn write_attendance_history_csv<W: Write>(
    history: &[&AttendanceEntry],
    writer: W,
) -> EngineResult<()> {
    let rows = history.iter().map(|entry| HistoryRow {
        date: format_date(entry.date),
        sign_in: format_sign_time(entry.sign_in),
        sign_out: format_sign_time(entry.sign_out),
        hours: format_decimal(entry.hours_or_zero()),
    });
    write_rows(&HISTORY_CSV_HEADERS, rows, writer)
}

/// Renders an attendance history as a CSV string.
pub fn attendance_history_to_csv(history: &[&AttendanceEntry]) -> EngineResult<String> {
    csv_string(|buffer| write_attendance_history_csv(history, buffer))
}

/// Writes a daily attendance summary as CSV.
pub fn write_daily_attendance_csv<W: Write>(
    rows: &[DailyAttendance],
    writer: W,
) -> EngineResult<()> {
    let rows = rows.iter().map(|row| DailyRow {
        id: row.employee_id,
        name: &row.employee_name,
        sign_in: format_sign_time(row.sign_in),
        sign_out: format_sign_time(row.sign_out),
        hours: format_decimal(row.hours_worked),
        status: row.status.to_string(),
    });
    write_rows(&DAILY_CSV_HEADERS, rows, writer)
}

/// Renders a daily attendance summary as a CSV string.
pub fn daily_attendance_to_csv(rows: &[DailyAttendance]) -> EngineResult<String> {
    csv_string(|buffer| write_daily_attendance_csv(rows, buffer))
}

/// Writes overtime occurrences as CSV, one row per day over the threshold.
pub fn write_overtime_csv<W: Write>(
    occurrences: &[OvertimeOccurrence],
    writer: W,
) -> EngineResult<()> {
    let rows = occurrences.iter().map(|occurrence| OvertimeRow {
        id: occurrence.employee_id,
        name: &occurrence.employee_name,
        date: format_date(Some(occurrence.date)),
        hours: format_decimal(occurrence.hours_worked),
        overtime_hours: format_decimal(occurrence.overtime_hours),
    });
    write_rows(&OVERTIME_CSV_HEADERS, rows, writer)
}

/// Renders overtime occurrences as a CSV string.
pub fn overtime_to_csv(occurrences: &[OvertimeOccurrence]) -> EngineResult<String> {
    csv_string(|buffer| write_overtime_csv(occurrences, buffer))
}
