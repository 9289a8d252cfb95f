//! Number formatting for rendered reports.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{ATTENDANCE_DATE_FORMATS, SIGN_TIME_FORMATS};

/// Rounds to currency precision (2 places, half away from zero).
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a decimal with exactly two places, e.g. `1234.5` as `1234.50`.
pub fn format_decimal(value: Decimal) -> String {
    format!("{:.2}", round_currency(value))
}

/// Formats an amount with a currency symbol, e.g. `₱2350.00`.
///
/// Negative amounts keep the sign after the symbol: `₱-40.00`.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, format_decimal(amount))
}

/// Formats a date in the capture layout (`MM-DD-YYYY`), or an empty string.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(ATTENDANCE_DATE_FORMATS[0]).to_string())
        .unwrap_or_default()
}

/// Formats a sign-in/out time in the capture layout, or an empty string.
pub fn format_sign_time(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format(SIGN_TIME_FORMATS[0]).to_string())
        .unwrap_or_default()
}
