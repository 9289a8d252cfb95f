//! Gross and net pay calculation.
//!
//! Arithmetic only: inputs are not validated here and no rounding is
//! applied. Currency rounding belongs to the rendering layer. Every
//! operation is checked, so out-of-range figures surface as
//! [`EngineError::ArithmeticOverflow`] instead of a panic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default multiplier applied to the base rate for overtime hours.
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// The pay computed for one employee in one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayCalculation {
    /// `regular_hours * rate`.
    pub regular_pay: Decimal,
    /// `overtime_hours * rate * overtime_multiplier`.
    pub overtime_pay: Decimal,
    /// Regular pay + overtime pay + allowance.
    pub gross_pay: Decimal,
    /// Gross pay - deduction.
    pub net_pay: Decimal,
}

/// Returns the hourly rate paid for overtime hours.
pub fn overtime_rate(rate: Decimal, overtime_multiplier: Decimal) -> EngineResult<Decimal> {
    rate.checked_mul(overtime_multiplier)
        .ok_or_else(|| EngineError::overflow("overtime rate"))
}

/// Computes gross and net pay.
///
/// The allowance is added to gross pay exactly once; the deduction is
/// subtracted from gross pay to give net pay. Negative allowances or
/// deductions are not rejected.
///
/// # Errors
///
/// Returns [`EngineError::ArithmeticOverflow`] when any intermediate
/// product or sum leaves the range of [`Decimal`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{compute_pay, DEFAULT_OVERTIME_MULTIPLIER};
/// use rust_decimal::Decimal;
///
/// let pay = compute_pay(
///     Decimal::new(100, 0), // rate
///     Decimal::new(20, 0),  // regular hours
///     Decimal::new(2, 0),   // overtime hours
///     Decimal::new(50, 0),  // allowance
///     Decimal::new(100, 0), // deduction
///     DEFAULT_OVERTIME_MULTIPLIER,
/// )?;
///
/// assert_eq!(pay.regular_pay, Decimal::new(2000, 0));
/// assert_eq!(pay.overtime_pay, Decimal::new(300, 0));
/// assert_eq!(pay.gross_pay, Decimal::new(2350, 0));
/// assert_eq!(pay.net_pay, Decimal::new(2250, 0));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn compute_pay(
    rate: Decimal,
    regular_hours: Decimal,
    overtime_hours: Decimal,
    allowance: Decimal,
    deduction: Decimal,
    overtime_multiplier: Decimal,
) -> EngineResult<PayCalculation> {
    let regular_pay = regular_hours
        .checked_mul(rate)
        .ok_or_else(|| EngineError::overflow("regular pay"))?;
    let overtime_pay = overtime_hours
        .checked_mul(overtime_rate(rate, overtime_multiplier)?)
        .ok_or_else(|| EngineError::overflow("overtime pay"))?;
    let gross_pay = regular_pay
        .checked_add(overtime_pay)
        .and_then(|sum| sum.checked_add(allowance))
        .ok_or_else(|| EngineError::overflow("gross pay"))?;
    let net_pay = gross_pay
        .checked_sub(deduction)
        .ok_or_else(|| EngineError::overflow("net pay"))?;

    Ok(PayCalculation {
        regular_pay,
        overtime_pay,
        gross_pay,
        net_pay,
    })
}
