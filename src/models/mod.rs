//! Core data models for the payroll engine.
//!
//! This module contains the roster, attendance and payroll result types used
//! throughout the engine.

mod attendance;
mod employee;
mod pay_inputs;
mod payroll;
mod period;

pub use attendance::{
    ATTENDANCE_DATE_FORMATS, AttendanceEntry, SIGN_TIME_FORMATS, parse_attendance_date,
    parse_sign_time,
};
pub use employee::{EmployeeRecord, RosterNames};
pub use pay_inputs::{PayAdjustments, PayPeriodInputs};
pub use payroll::{PayrollLineItem, PayrollSummary, PayrollTotals};
pub use period::PeriodKey;
