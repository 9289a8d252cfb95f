//! Monthly payroll runs.
//!
//! This module walks the roster in order, aggregates each employee's
//! attendance for the period, computes pay, and collects the results into a
//! [`PayrollSummary`] whose totals reconcile with its line items.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::config::PayrollPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceEntry, EmployeeRecord, PayAdjustments, PayPeriodInputs, PayrollLineItem,
    PayrollSummary, PeriodKey,
};

use super::attendance_aggregation::{AttendanceAggregate, aggregate_entries};
use super::pay::compute_pay;

/// Checks the roster for structural problems.
///
/// Ids must be positive and unique. These are contract violations by the
/// roster provider, so they fail the whole run.
pub fn validate_roster(employees: &[EmployeeRecord]) -> EngineResult<()> {
    let mut seen = HashSet::with_capacity(employees.len());
    for employee in employees {
        if employee.id == 0 {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: format!("employee '{}' has id 0; ids must be positive", employee.name),
            });
        }
        if !seen.insert(employee.id) {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: format!("duplicate id {}", employee.id),
            });
        }
    }
    Ok(())
}

/// Builds the line item for one employee from aggregated hours.
pub(crate) fn build_line_item(
    employee: &EmployeeRecord,
    aggregate: &AttendanceAggregate,
    adjustments: PayAdjustments,
    policy: &PayrollPolicy,
) -> EngineResult<PayrollLineItem> {
    if employee.hourly_rate.is_none() {
        warn!(
            employee_id = employee.id,
            "Employee has no hourly rate; paying hours at zero"
        );
    }
    let rate = employee.rate_or_zero();

    let pay = compute_pay(
        rate,
        aggregate.regular_hours,
        aggregate.overtime_hours,
        adjustments.allowance,
        adjustments.deduction,
        policy.overtime_multiplier,
    )
    .map_err(|err| match err {
        EngineError::ArithmeticOverflow { context } => {
            EngineError::overflow(format!("{} for employee {}", context, employee.id))
        }
        other => other,
    })?;

    Ok(PayrollLineItem {
        employee_id: employee.id,
        employee_name: employee.display_name(),
        regular_hours: aggregate.regular_hours,
        overtime_hours: aggregate.overtime_hours,
        rate,
        allowance: adjustments.allowance,
        deduction: adjustments.deduction,
        regular_pay: pay.regular_pay,
        overtime_pay: pay.overtime_pay,
        gross_pay: pay.gross_pay,
        net_pay: pay.net_pay,
    })
}

/// Buckets attendance by employee id, keeping entry order within a bucket.
fn group_by_employee(entries: &[AttendanceEntry]) -> HashMap<u32, Vec<&AttendanceEntry>> {
    let mut grouped: HashMap<u32, Vec<&AttendanceEntry>> = HashMap::new();
    for entry in entries {
        grouped.entry(entry.employee_id).or_default().push(entry);
    }
    grouped
}

/// Runs payroll for one period.
///
/// Employees with no attendance in the period are left out entirely. Line
/// items keep roster order. An employee with no rate is paid at zero rather
/// than failing the run.
///
/// # Errors
///
/// Returns [`EngineError::InvalidEmployee`] if the roster has a zero or
/// duplicate id, and [`EngineError::ArithmeticOverflow`] if a rate or
/// hours figure is too large to compute pay or totals.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::run_payroll;
/// use payroll_engine::config::PayrollPolicy;
/// use payroll_engine::models::{AttendanceEntry, EmployeeRecord, PayPeriodInputs};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord {
///     id: 1,
///     name: "Ana Cruz".to_string(),
///     role: "Cashier".to_string(),
///     department: "Retail".to_string(),
///     hourly_rate: Some(Decimal::new(100, 0)),
///     contact: None,
/// };
/// let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
/// let attendance = vec![
///     AttendanceEntry::new(1, day(3), Decimal::new(8, 0)),
///     AttendanceEntry::new(1, day(4), Decimal::new(10, 0)),
///     AttendanceEntry::new(1, day(5), Decimal::new(4, 0)),
/// ];
/// let period = "03-2025".parse().unwrap();
/// let inputs = vec![PayPeriodInputs {
///     employee_id: 1,
///     period,
///     allowance: Decimal::new(50, 0),
///     deduction: Decimal::new(100, 0),
/// }];
///
/// let summary = run_payroll(&[employee], &attendance, period, &inputs, &PayrollPolicy::default())?;
/// assert_eq!(summary.line_items[0].gross_pay, Decimal::new(2350, 0));
/// assert_eq!(summary.totals.net_pay, Decimal::new(2250, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn run_payroll(
    employees: &[EmployeeRecord],
    entries: &[AttendanceEntry],
    period: PeriodKey,
    inputs: &[PayPeriodInputs],
    policy: &PayrollPolicy,
) -> EngineResult<PayrollSummary> {
    validate_roster(employees)?;

    let grouped = group_by_employee(entries);
    let mut line_items = Vec::new();
    for employee in employees {
        let own_entries = grouped.get(&employee.id).into_iter().flatten().copied();
        let aggregate = aggregate_entries(own_entries, &period, policy.regular_hours_per_day)?;
        if !aggregate.matched {
            debug!(
                employee_id = employee.id,
                period = %period,
                "No attendance in period; excluding employee"
            );
            continue;
        }

        let adjustments = PayAdjustments::lookup(inputs, employee.id, &period);
        line_items.push(build_line_item(employee, &aggregate, adjustments, policy)?);
    }

    let summary = PayrollSummary::new(period, line_items)?;
    info!(
        period = %period,
        roster_size = employees.len(),
        paid_employees = summary.line_items.len(),
        gross_pay = %summary.totals.gross_pay,
        net_pay = %summary.totals.net_pay,
        "Payroll run completed"
    );

    Ok(summary)
}

/// Parses a textual `MM-YYYY` key and runs payroll for it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidPeriodKey`] before any aggregation if the
/// key is malformed, plus any error from [`run_payroll`].
pub fn run_payroll_for_key(
    employees: &[EmployeeRecord],
    entries: &[AttendanceEntry],
    period_key: &str,
    inputs: &[PayPeriodInputs],
    policy: &PayrollPolicy,
) -> EngineResult<PayrollSummary> {
    let period: PeriodKey = period_key.parse()?;
    run_payroll(employees, entries, period, inputs, policy)
}
