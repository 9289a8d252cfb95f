//! Employee roster model.
//!
//! The roster is owned by an external collaborator; the engine only reads a
//! snapshot of it per run.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A roster entry: identity plus pay basis.
///
/// Field aliases accept the roster file layout the records are usually
/// stored in (`emp_id`, `dept`, `rate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Positive, unique identifier assigned by the roster.
    #[serde(alias = "emp_id")]
    pub id: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Job role, display only.
    #[serde(default)]
    pub role: String,
    /// Department, display only.
    #[serde(default, alias = "dept")]
    pub department: String,
    /// Hourly pay rate. `None` when the roster record lacks one.
    #[serde(default, alias = "rate")]
    pub hourly_rate: Option<Decimal>,
    /// Contact details, display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl EmployeeRecord {
    /// Returns the hourly rate, treating a missing rate as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeRecord {
    ///     id: 1,
    ///     name: "Ana Cruz".to_string(),
    ///     role: "Cashier".to_string(),
    ///     department: "Retail".to_string(),
    ///     hourly_rate: None,
    ///     contact: None,
    /// };
    /// assert_eq!(employee.rate_or_zero(), Decimal::ZERO);
    /// ```
    pub fn rate_or_zero(&self) -> Decimal {
        self.hourly_rate.unwrap_or(Decimal::ZERO)
    }

    /// Returns the display name, or `Employee {id}` when the name is blank.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            fallback_name(self.id)
        } else {
            self.name.clone()
        }
    }
}

/// Display names keyed by roster id, for labelling attendance rows.
#[derive(Debug, Clone, Default)]
pub struct RosterNames(HashMap<u32, String>);

impl RosterNames {
    /// Indexes the roster's display names.
    pub fn new(employees: &[EmployeeRecord]) -> Self {
        Self(employees.iter().map(|e| (e.id, e.display_name())).collect())
    }

    /// Returns the name for an id, or `Employee {id}` when it is not on the roster.
    pub fn name(&self, employee_id: u32) -> String {
        self.0
            .get(&employee_id)
            .cloned()
            .unwrap_or_else(|| fallback_name(employee_id))
    }
}

fn fallback_name(employee_id: u32) -> String {
    format!("Employee {}", employee_id)
}
