//! Calculation logic for the payroll engine.
//!
//! This module contains the attendance aggregation that splits daily hours
//! into regular and overtime portions, the pay calculation that turns hours
//! into gross and net pay, the monthly payroll run, individual payslips, the
//! overtime report and the attendance views.

mod attendance_aggregation;
mod attendance_report;
mod overtime_report;
mod pay;
mod payroll_run;
mod payslip;

pub use attendance_aggregation::{
    AttendanceAggregate, DEFAULT_REGULAR_HOURS_PER_DAY, DailyHoursSplit, aggregate_attendance,
    aggregate_entries, split_daily_hours,
};
pub use attendance_report::{AttendanceStatus, DailyAttendance, attendance_history, daily_attendance};
pub use overtime_report::{OvertimeOccurrence, overtime_report};
pub use pay::{DEFAULT_OVERTIME_MULTIPLIER, PayCalculation, compute_pay, overtime_rate};
pub use payroll_run::{run_payroll, run_payroll_for_key, validate_roster};
pub use payslip::{Payslip, generate_payslip};
