//! Payroll result models.
//!
//! This module contains the [`PayrollLineItem`] produced per employee and the
//! [`PayrollSummary`] that collects them for one period together with
//! reconciled [`PayrollTotals`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PeriodKey;

/// One employee's computed pay for one period.
///
/// Invariants, for the overtime multiplier `m` used in the run:
/// - `gross_pay == regular_hours * rate + overtime_hours * rate * m + allowance`
/// - `net_pay == gross_pay - deduction`
///
/// `regular_pay` and `overtime_pay` are the first two terms of `gross_pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLineItem {
    /// The employee paid.
    pub employee_id: u32,
    /// Display name carried for presentation.
    pub employee_name: String,
    /// Hours paid at the base rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Base hourly rate.
    pub rate: Decimal,
    /// Allowance added to gross pay.
    pub allowance: Decimal,
    /// Deduction subtracted from gross pay.
    pub deduction: Decimal,
    /// `regular_hours * rate`.
    pub regular_pay: Decimal,
    /// `overtime_hours * rate * multiplier`.
    pub overtime_pay: Decimal,
    /// Regular pay + overtime pay + allowance.
    pub gross_pay: Decimal,
    /// Gross pay - deduction.
    pub net_pay: Decimal,
}

/// Aggregate totals across the line items of a summary.
///
/// Each field is the exact sum of the corresponding line item field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of regular hours.
    pub regular_hours: Decimal,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// Sum of allowances.
    pub allowance: Decimal,
    /// Sum of gross pay.
    pub gross_pay: Decimal,
    /// Sum of deductions.
    pub deduction: Decimal,
    /// Sum of net pay.
    pub net_pay: Decimal,
}

impl PayrollTotals {
    /// Sums the totals of a sequence of line items.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ArithmeticOverflow`] naming the column whose
    /// sum left the range of [`Decimal`].
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayrollTotals;
    ///
    /// let totals = PayrollTotals::from_line_items(&[])?;
    /// assert_eq!(totals, PayrollTotals::default());
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn from_line_items(line_items: &[PayrollLineItem]) -> EngineResult<Self> {
        line_items.iter().try_fold(Self::default(), |totals, item| {
            Ok(Self {
                regular_hours: add_column(
                    totals.regular_hours,
                    item.regular_hours,
                    "regular hours",
                )?,
                overtime_hours: add_column(
                    totals.overtime_hours,
                    item.overtime_hours,
                    "overtime hours",
                )?,
                allowance: add_column(totals.allowance, item.allowance, "allowance")?,
                gross_pay: add_column(totals.gross_pay, item.gross_pay, "gross pay")?,
                deduction: add_column(totals.deduction, item.deduction, "deduction")?,
                net_pay: add_column(totals.net_pay, item.net_pay, "net pay")?,
            })
        })
    }
}

fn add_column(total: Decimal, value: Decimal, column: &str) -> EngineResult<Decimal> {
    total
        .checked_add(value)
        .ok_or_else(|| EngineError::overflow(format!("total {}", column)))
}

/// The result of one payroll run.
///
/// Line items are in roster order. An empty run has no line items and zero
/// totals; that is a valid result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The month the run covers.
    pub period: PeriodKey,
    /// One line per employee with attendance in the period.
    pub line_items: Vec<PayrollLineItem>,
    /// Totals reconciled with `line_items`.
    pub totals: PayrollTotals,
}

impl PayrollSummary {
    /// Builds a summary, computing totals from the line items.
    ///
    /// # Errors
    ///
    /// Fails if the totals overflow; see [`PayrollTotals::from_line_items`].
    pub fn new(period: PeriodKey, line_items: Vec<PayrollLineItem>) -> EngineResult<Self> {
        let totals = PayrollTotals::from_line_items(&line_items)?;
        Ok(Self {
            period,
            line_items,
            totals,
        })
    }

    /// Returns true if no employee had attendance in the period.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Finds the line item for an employee, if present.
    pub fn line_item(&self, employee_id: u32) -> Option<&PayrollLineItem> {
        self.line_items
            .iter()
            .find(|item| item.employee_id == employee_id)
    }
}
