//! Attendance entry model.
//!
//! Each [`AttendanceEntry`] is one day's worked-hours observation for one
//! employee. Dates and sign-in/out timestamps are parsed once, when the
//! entry is ingested; nothing downstream inspects the raw text again.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{EngineError, EngineResult};

/// Textual date layouts accepted when ingesting attendance records.
///
/// `MM-DD-YYYY` is the layout the attendance capture stores; ISO dates are
/// accepted so serialized entries read back unchanged.
pub const ATTENDANCE_DATE_FORMATS: [&str; 2] = ["%m-%d-%Y", "%Y-%m-%d"];

/// Timestamp layouts accepted for `sign_in` and `sign_out`.
///
/// The first is the capture layout and is also what exports write. The ISO
/// forms cover entries serialized by this crate.
pub const SIGN_TIME_FORMATS: [&str; 3] =
    ["%m-%d-%Y %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

const SECONDS_PER_HOUR: i64 = 3600;

/// One day's worked hours for one employee.
///
/// A record whose date is missing or unparseable still deserializes, with
/// `date: None`, so one bad row never rejects a whole attendance snapshot.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry: AttendanceEntry = serde_json::from_str(
///     r#"{"emp_id": 4, "date": "03-14-2025", "hours": 9.5}"#,
/// ).unwrap();
/// assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 3, 14));
/// assert_eq!(entry.hours_or_zero(), Decimal::new(95, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The employee this observation belongs to.
    #[serde(alias = "emp_id")]
    pub employee_id: u32,
    /// The calendar date, or `None` if the record's date could not be read.
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub date: Option<NaiveDate>,
    /// Hours worked that day. `None` when no hours were recorded.
    #[serde(default, alias = "hours")]
    pub hours_worked: Option<Decimal>,
    /// When the employee signed in, if captured and readable.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub sign_in: Option<NaiveDateTime>,
    /// When the employee signed out. `None` while still signed in.
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub sign_out: Option<NaiveDateTime>,
}

impl AttendanceEntry {
    /// Creates an entry with a known date and hours.
    pub fn new(employee_id: u32, date: NaiveDate, hours_worked: Decimal) -> Self {
        Self {
            employee_id,
            date: Some(date),
            hours_worked: Some(hours_worked),
            sign_in: None,
            sign_out: None,
        }
    }

    /// Derives an entry from sign-in and sign-out timestamps.
    ///
    /// The entry is dated on the sign-in day and keeps both timestamps.
    /// Elapsed time is converted to hours and rounded to 2 decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAttendance`] if sign-out precedes sign-in.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::AttendanceEntry;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    ///
    /// let sign_in = NaiveDateTime::parse_from_str("2025-03-03 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let sign_out = NaiveDateTime::parse_from_str("2025-03-03 17:20:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let entry = AttendanceEntry::from_sign_times(4, sign_in, sign_out).unwrap();
    /// assert_eq!(entry.hours_worked, Some(Decimal::new(933, 2))); // 9.33
    /// ```
    pub fn from_sign_times(
        employee_id: u32,
        sign_in: NaiveDateTime,
        sign_out: NaiveDateTime,
    ) -> EngineResult<Self> {
        if sign_out < sign_in {
            return Err(EngineError::InvalidAttendance {
                employee_id,
                message: format!("sign-out {} is before sign-in {}", sign_out, sign_in),
            });
        }

        let elapsed_seconds = (sign_out - sign_in).num_seconds();
        let hours = (Decimal::from(elapsed_seconds) / Decimal::from(SECONDS_PER_HOUR)).round_dp(2);

        Ok(Self {
            sign_in: Some(sign_in),
            sign_out: Some(sign_out),
            ..Self::new(employee_id, sign_in.date(), hours)
        })
    }

    /// Returns the recorded hours, treating missing hours as zero.
    pub fn hours_or_zero(&self) -> Decimal {
        self.hours_worked.unwrap_or(Decimal::ZERO)
    }
}

/// Parses an attendance date in any of the [`ATTENDANCE_DATE_FORMATS`].
pub fn parse_attendance_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    ATTENDANCE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Parses a sign-in or sign-out timestamp in any of the [`SIGN_TIME_FORMATS`].
pub fn parse_sign_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    SIGN_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn deserialize_lenient<'de, D, T>(
    deserializer: D,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDate>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawDate::Text(text)) => parse(&text),
        Some(RawDate::Other(_)) | None => None,
    })
}

fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_lenient(deserializer, parse_attendance_date)
}

fn deserialize_lenient_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_lenient(deserializer, parse_sign_time)
}
