//! Individual payslip generation.
//!
//! Computes the same line item a payroll run would produce for one employee,
//! along with the per-day hour splits behind it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceEntry, EmployeeRecord, PayAdjustments, PayPeriodInputs, PayrollLineItem, PeriodKey,
};

use super::attendance_aggregation::{DailyHoursSplit, aggregate_attendance};
use super::pay::overtime_rate;
use super::payroll_run::build_line_item;

/// A single employee's pay for one period, with display details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    /// The month paid.
    pub period: PeriodKey,
    /// Department, from the roster.
    pub department: String,
    /// Role, from the roster.
    pub role: String,
    /// The rate paid for overtime hours.
    pub overtime_rate: Decimal,
    /// The computed pay.
    pub line_item: PayrollLineItem,
    /// Per-day splits that make up the hours.
    pub days: Vec<DailyHoursSplit>,
}

/// Generates the payslip for one employee.
///
/// # Errors
///
/// - [`EngineError::EmployeeNotFound`] if the id is not on the roster
/// - [`EngineError::NoAttendance`] if the employee has no attendance in the period
/// - [`EngineError::ArithmeticOverflow`] if a figure is too large to compute
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::generate_payslip;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{AttendanceEntry, EmployeeRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let roster = vec![EmployeeRecord {
///     id: 7,
///     name: "Lito Santos".to_string(),
///     role: "Driver".to_string(),
///     department: "Logistics".to_string(),
///     hourly_rate: Some(Decimal::new(80, 0)),
///     contact: None,
/// }];
/// let attendance = vec![AttendanceEntry::new(
///     7,
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     Decimal::new(9, 0),
/// )];
///
/// let payslip = generate_payslip(
///     &roster,
///     &attendance,
///     7,
///     "06-2025".parse().unwrap(),
///     &[],
///     &PayrollPolicy::default(),
/// )?;
/// assert_eq!(payslip.line_item.gross_pay, Decimal::new(760, 0)); // 8*80 + 1*120
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn generate_payslip(
    employees: &[EmployeeRecord],
    entries: &[AttendanceEntry],
    employee_id: u32,
    period: PeriodKey,
    inputs: &[PayPeriodInputs],
    policy: &PayrollPolicy,
) -> EngineResult<Payslip> {
    let employee = employees
        .iter()
        .find(|e| e.id == employee_id)
        .ok_or(EngineError::EmployeeNotFound { employee_id })?;

    let aggregate =
        aggregate_attendance(entries, employee_id, &period, policy.regular_hours_per_day)?;
    if !aggregate.matched {
        return Err(EngineError::NoAttendance {
            employee_id,
            period: period.to_string(),
        });
    }

    let adjustments = PayAdjustments::lookup(inputs, employee_id, &period);
    let line_item = build_line_item(employee, &aggregate, adjustments, policy)?;
    debug!(
        employee_id,
        period = %period,
        days = aggregate.days.len(),
        net_pay = %line_item.net_pay,
        "Generated payslip"
    );

    Ok(Payslip {
        period,
        department: employee.department.clone(),
        role: employee.role.clone(),
        overtime_rate: overtime_rate(line_item.rate, policy.overtime_multiplier)?,
        line_item,
        days: aggregate.days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::run_payroll;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn roster() -> Vec<EmployeeRecord> {
        vec![EmployeeRecord {
            id: 1,
            name: "Ana Cruz".to_string(),
            role: "Cashier".to_string(),
            department: "Retail".to_string(),
            hourly_rate: Some(dec("100")),
            contact: None,
        }]
    }

    fn march(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn period() -> PeriodKey {
        "03-2025".parse().unwrap()
    }

    #[test]
    fn test_payslip_allowance_added_once() {
        let attendance = vec![
            AttendanceEntry::new(1, march(3), dec("8")),
            AttendanceEntry::new(1, march(4), dec("10")),
            AttendanceEntry::new(1, march(5), dec("4")),
        ];
        let inputs = vec![PayPeriodInputs {
            employee_id: 1,
            period: period(),
            allowance: dec("50"),
            deduction: dec("100"),
        }];

        let payslip =
            generate_payslip(&roster(), &attendance, 1, period(), &inputs, &PayrollPolicy::default())
                .unwrap();

        assert_eq!(payslip.line_item.gross_pay, dec("2350"));
        assert_eq!(payslip.line_item.net_pay, dec("2250"));
        assert_eq!(payslip.overtime_rate, dec("150"));
        assert_eq!(payslip.department, "Retail");
        assert_eq!(payslip.days.len(), 3);
    }

    #[test]
    fn test_payslip_matches_payroll_line_item() {
        let attendance = vec![AttendanceEntry::new(1, march(3), dec("11"))];
        let policy = PayrollPolicy::default();

        let payslip = generate_payslip(&roster(), &attendance, 1, period(), &[], &policy).unwrap();
        let summary =
            run_payroll(&roster(), &attendance, period(), &[], &policy).unwrap();

        assert_eq!(&payslip.line_item, summary.line_item(1).unwrap());
    }

    #[test]
    fn test_unknown_employee() {
        let result = generate_payslip(&roster(), &[], 99, period(), &[], &PayrollPolicy::default());
        assert!(matches!(
            result,
            Err(EngineError::EmployeeNotFound { employee_id: 99 })
        ));
    }

    #[test]
    fn test_no_attendance_in_period() {
        let attendance = vec![AttendanceEntry::new(
            1,
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            dec("8"),
        )];
        let result =
            generate_payslip(&roster(), &attendance, 1, period(), &[], &PayrollPolicy::default());
        match result {
            Err(EngineError::NoAttendance { employee_id, period }) => {
                assert_eq!(employee_id, 1);
                assert_eq!(period, "03-2025");
            }
            other => panic!("Expected NoAttendance, got {:?}", other),
        }
    }

    #[test]
    fn test_payslip_overflow_is_an_error() {
        let mut employees = roster();
        employees[0].hourly_rate = Some(Decimal::MAX);
        let attendance = vec![AttendanceEntry::new(1, march(3), dec("10"))];

        let result =
            generate_payslip(&employees, &attendance, 1, period(), &[], &PayrollPolicy::default());
        assert!(matches!(result, Err(EngineError::ArithmeticOverflow { .. })));
    }
}
