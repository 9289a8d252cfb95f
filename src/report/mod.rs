//! Rendering of payroll and attendance results for people and spreadsheets.
//!
//! Amounts are shown with two decimal places and the company's currency
//! symbol. Computation never happens here; every figure comes from a
//! [`PayrollSummary`](crate::models::PayrollSummary),
//! [`Payslip`](crate::calculation::Payslip) or one of the attendance views.

mod attendance_csv;
mod csv_export;
mod format;
mod text;

pub use attendance_csv::{
    DAILY_CSV_HEADERS, HISTORY_CSV_HEADERS, OVERTIME_CSV_HEADERS, attendance_history_to_csv,
    daily_attendance_to_csv, overtime_to_csv, write_attendance_history_csv,
    write_daily_attendance_csv, write_overtime_csv,
};
pub use csv_export::{CSV_HEADERS, summary_to_csv, write_summary_csv};
pub use format::{format_amount, format_date, format_decimal, format_sign_time, round_currency};
pub use text::{render_payslip, render_summary, write_payslip, write_summary};
