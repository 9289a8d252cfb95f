//! Request types for the payroll API.
//!
//! The period selector is carried as a raw string so that a malformed key is
//! reported as `INVALID_PERIOD_KEY` rather than as a generic JSON error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceEntry, EmployeeRecord, PayPeriodInputs, PeriodKey, parse_attendance_date,
};

/// Request body for `/payroll`, `/payroll/csv`, `/payroll/text`,
/// `/overtime-report` and `/overtime-report/csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The month to pay, as `MM-YYYY`.
    pub period: String,
    /// The roster snapshot.
    pub employees: Vec<EmployeeRecord>,
    /// Attendance records, in any order.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Per-period allowances and deductions.
    #[serde(default)]
    pub inputs: Vec<PayPeriodInputs>,
}

impl PayrollRequest {
    /// Parses the period selector.
    pub fn period_key(&self) -> EngineResult<PeriodKey> {
        self.period.parse()
    }
}

/// Request body for `/payslip` and `/payslip/text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRequest {
    /// The employee to generate the payslip for.
    pub employee_id: u32,
    /// The month to pay, as `MM-YYYY`.
    pub period: String,
    /// The roster snapshot.
    pub employees: Vec<EmployeeRecord>,
    /// Attendance records, in any order.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
    /// Per-period allowances and deductions.
    #[serde(default)]
    pub inputs: Vec<PayPeriodInputs>,
}

impl PayslipRequest {
    /// Parses the period selector.
    pub fn period_key(&self) -> EngineResult<PeriodKey> {
        self.period.parse()
    }
}

/// Request body for `/attendance/history` and `/attendance/history/csv`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceHistoryRequest {
    /// The employee whose history is wanted.
    #[serde(alias = "emp_id")]
    pub employee_id: u32,
    /// Attendance records, in any order.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

/// Request body for `/attendance/daily` and `/attendance/daily/csv`.
///
/// The date is carried as text so a bad value is reported as `INVALID_DATE`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyAttendanceRequest {
    /// The day to summarize, as `MM-DD-YYYY` or `YYYY-MM-DD`.
    pub date: String,
    /// The roster snapshot, used for names.
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    /// Attendance records, in any order.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

impl DailyAttendanceRequest {
    /// Parses the requested day.
    pub fn day(&self) -> EngineResult<NaiveDate> {
        parse_attendance_date(&self.date).ok_or_else(|| EngineError::InvalidDate {
            value: self.date.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "period": "03-2025",
            "employees": [
                {"emp_id": 1, "name": "Ana Cruz", "role": "Cashier", "dept": "Retail", "rate": 100}
            ],
            "attendance": [
                {"emp_id": 1, "date": "03-03-2025", "hours": 10},
                {"emp_id": 1, "date": "not a date", "hours": 8}
            ],
            "inputs": [
                {"emp_id": 1, "month": "03-2025", "allowance": 50, "deduction": 100}
            ]
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.period_key().unwrap().to_string(), "03-2025");
        assert_eq!(request.employees.len(), 1);
        assert_eq!(request.attendance.len(), 2);
        assert_eq!(
            request.attendance[0].date,
            NaiveDate::from_ymd_opt(2025, 3, 3)
        );
        assert!(request.attendance[1].date.is_none());
        assert_eq!(request.inputs[0].allowance, Decimal::from_str("50").unwrap());
    }

    #[test]
    fn test_attendance_and_inputs_default_to_empty() {
        let json = r#"{"period": "03-2025", "employees": []}"#;
        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert!(request.attendance.is_empty());
        assert!(request.inputs.is_empty());
    }

    #[test]
    fn test_invalid_period_is_reported_on_parse() {
        let json = r#"{"period": "2025-03", "employees": []}"#;
        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(
            request.period_key(),
            Err(EngineError::InvalidPeriodKey { .. })
        ));
    }

    #[test]
    fn test_payslip_request_requires_employee_id() {
        let json = r#"{"period": "03-2025", "employees": []}"#;
        assert!(serde_json::from_str::<PayslipRequest>(json).is_err());
    }

    #[test]
    fn test_daily_request_accepts_both_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2025, 7, 21).unwrap();
        for date in ["07-21-2025", "2025-07-21"] {
            let json = format!(r#"{{"date": "{}"}}"#, date);
            let request: DailyAttendanceRequest = serde_json::from_str(&json).unwrap();
            assert_eq!(request.day().unwrap(), expected);
            assert!(request.employees.is_empty());
        }
    }

    #[test]
    fn test_daily_request_rejects_bad_date() {
        let request: DailyAttendanceRequest =
            serde_json::from_str(r#"{"date": "21/07/2025"}"#).unwrap();
        match request.day() {
            Err(EngineError::InvalidDate { value }) => assert_eq!(value, "21/07/2025"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_history_request_accepts_emp_id() {
        let json = r#"{"emp_id": 4, "attendance": [{"emp_id": 4, "date": "07-21-2025"}]}"#;
        let request: AttendanceHistoryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, 4);
        assert_eq!(request.attendance.len(), 1);
    }
}
