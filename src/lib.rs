//! Attendance-based monthly payroll engine.
//!
//! Turns a roster of hourly employees, their daily attendance and per-period
//! allowances and deductions into a monthly payroll: per-employee regular and
//! overtime hours, gross pay and net pay, plus grand totals.
//!
//! All hours and money are [`rust_decimal::Decimal`], so totals equal the sum
//! of their line items exactly.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
