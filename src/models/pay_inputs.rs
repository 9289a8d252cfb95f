//! Per-period allowance and deduction inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PeriodKey;

/// Allowance/deduction instruction for one employee for one month.
///
/// Supplied alongside each run. Amounts default to zero when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodInputs {
    /// The employee the amounts apply to.
    #[serde(alias = "emp_id")]
    pub employee_id: u32,
    /// The month the amounts apply to.
    #[serde(alias = "month")]
    pub period: PeriodKey,
    /// Amount added to gross pay.
    #[serde(default)]
    pub allowance: Decimal,
    /// Amount subtracted from gross pay to obtain net pay.
    #[serde(default)]
    pub deduction: Decimal,
}

/// The allowance and deduction resolved for one employee in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayAdjustments {
    /// Amount added to gross pay.
    pub allowance: Decimal,
    /// Amount subtracted from gross pay.
    pub deduction: Decimal,
}

impl PayAdjustments {
    /// Resolves the adjustments for an employee and period.
    ///
    /// The first matching input wins; no match yields zero allowance and
    /// zero deduction.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{PayAdjustments, PayPeriodInputs};
    /// use rust_decimal::Decimal;
    ///
    /// let inputs = vec![PayPeriodInputs {
    ///     employee_id: 1,
    ///     period: "03-2025".parse().unwrap(),
    ///     allowance: Decimal::new(50, 0),
    ///     deduction: Decimal::new(100, 0),
    /// }];
    ///
    /// let march = PayAdjustments::lookup(&inputs, 1, &"03-2025".parse().unwrap());
    /// assert_eq!(march.allowance, Decimal::new(50, 0));
    ///
    /// let april = PayAdjustments::lookup(&inputs, 1, &"04-2025".parse().unwrap());
    /// assert_eq!(april, PayAdjustments::default());
    /// ```
    pub fn lookup(inputs: &[PayPeriodInputs], employee_id: u32, period: &PeriodKey) -> Self {
        inputs
            .iter()
            .find(|input| input.employee_id == employee_id && input.period == *period)
            .map(|input| Self {
                allowance: input.allowance,
                deduction: input.deduction,
            })
            .unwrap_or_default()
    }
}
