//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing payroll.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Per-record data problems (a missing rate, missing hours, an unparseable
/// attendance date) are not errors: they degrade to zero or are skipped.
/// Only contract violations by a collaborator surface here.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriodKey {
///     key: "3-2025".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid period key '3-2025': expected MM-YYYY");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The loaded payroll policy holds values the engine cannot use.
    #[error("Invalid payroll policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// The period selector does not have the `MM-YYYY` shape.
    #[error("Invalid period key '{key}': expected MM-YYYY")]
    InvalidPeriodKey {
        /// The rejected key, verbatim.
        key: String,
    },

    /// The roster is structurally broken (e.g. a zero or duplicate id).
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No roster entry exists for the requested employee.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        employee_id: u32,
    },

    /// The employee exists but has no attendance in the requested period.
    #[error("No attendance records for employee {employee_id} in {period}")]
    NoAttendance {
        /// The employee id.
        employee_id: u32,
        /// The period, in `MM-YYYY` form.
        period: String,
    },

    /// An attendance observation could not be turned into worked hours.
    #[error("Invalid attendance for employee {employee_id}: {message}")]
    InvalidAttendance {
        /// The employee the entry belongs to.
        employee_id: u32,
        /// A description of the problem.
        message: String,
    },

    /// A calendar date in a request could not be parsed.
    #[error("Invalid date '{value}': expected MM-DD-YYYY or YYYY-MM-DD")]
    InvalidDate {
        /// The rejected value, verbatim.
        value: String,
    },

    /// A pay or hours figure exceeded the range of the money type.
    #[error("Arithmetic overflow while computing {context}")]
    ArithmeticOverflow {
        /// The quantity being computed when the overflow happened.
        context: String,
    },

    /// Rendering or writing an export failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

impl From<csv::Error> for EngineError {
    fn from(err: csv::Error) -> Self {
        EngineError::ExportError {
            message: err.to_string(),
        }
    }
}

impl EngineError {
    /// Builds an [`EngineError::ArithmeticOverflow`] for the named quantity.
    pub fn overflow(context: impl Into<String>) -> Self {
        EngineError::ArithmeticOverflow {
            context: context.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_period_key_displays_key() {
        let error = EngineError::InvalidPeriodKey {
            key: "2025-03".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid period key '2025-03': expected MM-YYYY"
        );
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "id".to_string(),
            message: "duplicate id 7".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'id': duplicate id 7"
        );
    }

    #[test]
    fn test_no_attendance_displays_employee_and_period() {
        let error = EngineError::NoAttendance {
            employee_id: 3,
            period: "03-2025".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No attendance records for employee 3 in 03-2025"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound { employee_id: 42 };
        assert_eq!(error.to_string(), "Employee not found: 42");
    }

    #[test]
    fn test_arithmetic_overflow_displays_context() {
        let error = EngineError::overflow("regular pay for employee 1");
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow while computing regular pay for employee 1"
        );
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "21/07/2025".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '21/07/2025': expected MM-DD-YYYY or YYYY-MM-DD"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_key() -> EngineResult<()> {
            Err(EngineError::InvalidPeriodKey {
                key: "bad".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_key()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
