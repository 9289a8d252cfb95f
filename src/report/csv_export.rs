//! CSV export of a payroll summary.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, PayrollSummary};

use super::format::format_decimal;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 11] = [
    "id",
    "name",
    "department",
    "role",
    "rate",
    "regular_hours",
    "overtime_hours",
    "allowance",
    "deduction",
    "gross",
    "net",
];

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: u32,
    name: &'a str,
    department: &'a str,
    role: &'a str,
    rate: String,
    regular_hours: String,
    overtime_hours: String,
    allowance: String,
    deduction: String,
    gross: String,
    net: String,
}

/// Writes the summary as CSV, one row per line item.
///
/// Department and role come from the roster. Only employees present in the
/// summary are written; the header row is always written.
pub fn write_summary_csv<W: Write>(
    summary: &PayrollSummary,
    employees: &[EmployeeRecord],
    writer: W,
) -> EngineResult<()> {
    let roster: HashMap<u32, &EmployeeRecord> = employees.iter().map(|e| (e.id, e)).collect();

    let rows = summary.line_items.iter().map(|item| {
        let employee = roster.get(&item.employee_id);
        CsvRow {
            id: item.employee_id,
            name: &item.employee_name,
            department: employee.map(|e| e.department.as_str()).unwrap_or(""),
            role: employee.map(|e| e.role.as_str()).unwrap_or(""),
            rate: format_decimal(item.rate),
            regular_hours: format_decimal(item.regular_hours),
            overtime_hours: format_decimal(item.overtime_hours),
            allowance: format_decimal(item.allowance),
            deduction: format_decimal(item.deduction),
            gross: format_decimal(item.gross_pay),
            net: format_decimal(item.net_pay),
        }
    });
    write_rows(&CSV_HEADERS, rows, writer)
}

/// Renders the summary as a CSV string.
pub fn summary_to_csv(summary: &PayrollSummary, employees: &[EmployeeRecord]) -> EngineResult<String> {
    csv_string(|buffer| write_summary_csv(summary, employees, buffer))
}

/// Writes a header row, then one serialized record per row.
pub(super) fn write_rows<W, R, I>(headers: &[&str], rows: I, writer: W) -> EngineResult<()>
where
    W: Write,
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(headers)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }

    csv_writer.flush().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

/// Runs a CSV writer against an in-memory buffer and returns the text.
pub(super) fn csv_string<F>(write: F) -> EngineResult<String>
where
    F: FnOnce(&mut Vec<u8>) -> EngineResult<()>,
{
    let mut buffer = Vec::new();
    write(&mut buffer)?;
    String::from_utf8(buffer).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}
