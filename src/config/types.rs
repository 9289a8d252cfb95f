//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DEFAULT_OVERTIME_MULTIPLIER, DEFAULT_REGULAR_HOURS_PER_DAY};
use crate::error::{EngineError, EngineResult};

/// The pay policy applied to every run.
///
/// Both values are policy rather than mechanism, so they are configurable.
/// Defaults are 8 regular hours per day and a 1.5x overtime multiplier.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = PayrollPolicy::default();
/// assert_eq!(policy.regular_hours_per_day, Decimal::new(8, 0));
/// assert_eq!(policy.overtime_multiplier, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollPolicy {
    /// Hours per day paid at the base rate; anything beyond is overtime.
    #[serde(default = "default_regular_hours_per_day")]
    pub regular_hours_per_day: Decimal,
    /// Multiplier applied to the base rate for overtime hours.
    #[serde(default = "default_overtime_multiplier")]
    pub overtime_multiplier: Decimal,
}

fn default_regular_hours_per_day() -> Decimal {
    DEFAULT_REGULAR_HOURS_PER_DAY
}

fn default_overtime_multiplier() -> Decimal {
    DEFAULT_OVERTIME_MULTIPLIER
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            regular_hours_per_day: DEFAULT_REGULAR_HOURS_PER_DAY,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
        }
    }
}

impl PayrollPolicy {
    /// Checks that both policy values are non-negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.regular_hours_per_day < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "regular_hours_per_day must not be negative, got {}",
                    self.regular_hours_per_day
                ),
            });
        }
        if self.overtime_multiplier < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "overtime_multiplier must not be negative, got {}",
                    self.overtime_multiplier
                ),
            });
        }
        Ok(())
    }
}

/// Company details used when rendering payslips and summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMetadata {
    /// Company name printed on reports.
    pub name: String,
    /// Symbol prefixed to currency amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "₱".to_string()
}

impl Default for CompanyMetadata {
    fn default() -> Self {
        Self {
            name: "Payroll".to_string(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollConfig {
    company: CompanyMetadata,
    policy: PayrollPolicy,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(company: CompanyMetadata, policy: PayrollPolicy) -> Self {
        Self { company, policy }
    }

    /// Returns the company metadata.
    pub fn company(&self) -> &CompanyMetadata {
        &self.company
    }

    /// Returns the pay policy.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }
}
