//! Plain-text payslips and payroll summaries.

use std::fmt::{self, Write};

use crate::calculation::Payslip;
use crate::config::CompanyMetadata;
use crate::models::PayrollSummary;

use super::format::{format_amount, format_decimal};

const PAYSLIP_WIDTH: usize = 50;
const SUMMARY_WIDTH: usize = 110;

/// Renders a single payslip as text.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::generate_payslip;
/// use payroll_engine::config::{CompanyMetadata, PayrollPolicy};
/// use payroll_engine::models::{AttendanceEntry, EmployeeRecord};
/// use payroll_engine::report::render_payslip;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let roster = vec![EmployeeRecord {
///     id: 7,
///     name: "Lito Santos".to_string(),
///     role: "Driver".to_string(),
///     department: "Logistics".to_string(),
///     hourly_rate: Some(Decimal::new(80, 0)),
///     contact: None,
/// }];
/// let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let attendance = vec![AttendanceEntry::new(7, day, Decimal::new(9, 0))];
/// let period = "06-2025".parse().unwrap();
/// let payslip = generate_payslip(&roster, &attendance, 7, period, &[], &PayrollPolicy::default())?;
///
/// let text = render_payslip(&payslip, &CompanyMetadata::default());
/// assert!(text.contains("PAYSLIP FOR LITO SANTOS"));
/// assert!(text.contains("NET PAY        : ₱760.00"));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn render_payslip(payslip: &Payslip, company: &CompanyMetadata) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_payslip(&mut out, payslip, company);
    out
}

/// Writes a single payslip to any [`fmt::Write`] sink.
pub fn write_payslip<W: Write>(
    out: &mut W,
    payslip: &Payslip,
    company: &CompanyMetadata,
) -> fmt::Result {
    let item = &payslip.line_item;
    let symbol = company.currency_symbol.as_str();
    let heavy = "=".repeat(PAYSLIP_WIDTH);
    let light = "-".repeat(PAYSLIP_WIDTH);

    writeln!(out, "{}", heavy)?;
    writeln!(out, "{:^width$}", company.name, width = PAYSLIP_WIDTH)?;
    writeln!(
        out,
        "{:^width$}",
        format!("PAYSLIP FOR {}", item.employee_name.to_uppercase()),
        width = PAYSLIP_WIDTH
    )?;
    writeln!(out, "{}", heavy)?;
    writeln!(out, "Employee ID    : {}", item.employee_id)?;
    writeln!(out, "Department     : {}", payslip.department)?;
    writeln!(out, "Role           : {}", payslip.role)?;
    writeln!(out, "Period         : {}", payslip.period)?;
    writeln!(out, "{}", light)?;
    writeln!(out, "HOURS WORKED")?;
    writeln!(
        out,
        "Regular Hours  : {:>8} hrs @ {}/hr",
        format_decimal(item.regular_hours),
        format_amount(symbol, item.rate)
    )?;
    writeln!(
        out,
        "Overtime Hours : {:>8} hrs @ {}/hr",
        format_decimal(item.overtime_hours),
        format_amount(symbol, payslip.overtime_rate)
    )?;
    writeln!(out, "{}", light)?;
    writeln!(out, "EARNINGS")?;
    writeln!(out, "Regular Pay    : {}", format_amount(symbol, item.regular_pay))?;
    writeln!(out, "Overtime Pay   : {}", format_amount(symbol, item.overtime_pay))?;
    writeln!(out, "Allowances     : {}", format_amount(symbol, item.allowance))?;
    writeln!(out, "{}", light)?;
    writeln!(out, "Gross Pay      : {}", format_amount(symbol, item.gross_pay))?;
    writeln!(out, "Deductions     : - {}", format_amount(symbol, item.deduction))?;
    writeln!(out, "{}", heavy)?;
    writeln!(out, "NET PAY        : {}", format_amount(symbol, item.net_pay))?;
    writeln!(out, "{}", heavy)
}

/// Renders a payroll summary as a fixed-width table with a TOTAL row.
pub fn render_summary(summary: &PayrollSummary, company: &CompanyMetadata) -> String {
    let mut out = String::new();
    let _ = write_summary(&mut out, summary, company);
    out
}

/// Writes a payroll summary table to any [`fmt::Write`] sink.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &PayrollSummary,
    company: &CompanyMetadata,
) -> fmt::Result {
    let symbol = company.currency_symbol.as_str();
    let heavy = "=".repeat(SUMMARY_WIDTH);

    writeln!(out, "{}", heavy)?;
    writeln!(out, "{} - PAYROLL SUMMARY FOR {}", company.name, summary.period)?;
    writeln!(out, "{}", heavy)?;
    writeln!(
        out,
        "{:<5} {:<20} {:>10} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12}",
        "ID", "Name", "Rate/hr", "Reg Hrs", "OT Hrs", "Allowance", "Gross", "Deduction", "Net Pay"
    )?;
    writeln!(out, "{}", "-".repeat(SUMMARY_WIDTH))?;

    if summary.is_empty() {
        writeln!(out, "No attendance recorded for {}", summary.period)?;
    }

    for item in &summary.line_items {
        writeln!(
            out,
            "{:<5} {:<20} {:>10} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12}",
            item.employee_id,
            truncate(&item.employee_name, 20),
            format_amount(symbol, item.rate),
            format_decimal(item.regular_hours),
            format_decimal(item.overtime_hours),
            format_amount(symbol, item.allowance),
            format_amount(symbol, item.gross_pay),
            format_amount(symbol, item.deduction),
            format_amount(symbol, item.net_pay),
        )?;
    }

    let totals = &summary.totals;
    writeln!(out, "{}", heavy)?;
    writeln!(
        out,
        "{:<5} {:<20} {:>10} {:>8} {:>8} {:>12} {:>12} {:>12} {:>12}",
        "TOTAL",
        "",
        "",
        format_decimal(totals.regular_hours),
        format_decimal(totals.overtime_hours),
        format_amount(symbol, totals.allowance),
        format_amount(symbol, totals.gross_pay),
        format_amount(symbol, totals.deduction),
        format_amount(symbol, totals.net_pay),
    )?;
    writeln!(out, "{}", heavy)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayrollLineItem;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn company() -> CompanyMetadata {
        CompanyMetadata {
            name: "QuickHire Services Ltd.".to_string(),
            currency_symbol: "₱".to_string(),
        }
    }

    fn line_item() -> PayrollLineItem {
        PayrollLineItem {
            employee_id: 1,
            employee_name: "Ana Cruz".to_string(),
            regular_hours: dec("20"),
            overtime_hours: dec("2"),
            rate: dec("100"),
            allowance: dec("50"),
            deduction: dec("100"),
            regular_pay: dec("2000"),
            overtime_pay: dec("300"),
            gross_pay: dec("2350"),
            net_pay: dec("2250"),
        }
    }

    #[test]
    fn test_render_payslip_sections() {
        let payslip = Payslip {
            period: "03-2025".parse().unwrap(),
            department: "Retail".to_string(),
            role: "Cashier".to_string(),
            overtime_rate: dec("150"),
            line_item: line_item(),
            days: vec![],
        };

        let text = render_payslip(&payslip, &company());
        assert!(text.contains("PAYSLIP FOR ANA CRUZ"));
        assert!(text.contains("Department     : Retail"));
        assert!(text.contains("Period         : 03-2025"));
        assert!(text.contains("   20.00 hrs @ ₱100.00/hr"));
        assert!(text.contains("    2.00 hrs @ ₱150.00/hr"));
        assert!(text.contains("Overtime Pay   : ₱300.00"));
        assert!(text.contains("Gross Pay      : ₱2350.00"));
        assert!(text.contains("Deductions     : - ₱100.00"));
        assert!(text.contains("NET PAY        : ₱2250.00"));
    }

    #[test]
    fn test_render_summary_includes_rows_and_totals() {
        let summary =
            PayrollSummary::new("03-2025".parse().unwrap(), vec![line_item()]).unwrap();
        let text = render_summary(&summary, &company());

        assert!(text.contains("PAYROLL SUMMARY FOR 03-2025"));
        assert!(text.contains("Ana Cruz"));
        let total_line = text.lines().find(|l| l.starts_with("TOTAL")).unwrap();
        assert!(total_line.contains("20.00"));
        assert!(total_line.contains("₱2350.00"));
        assert!(total_line.contains("₱2250.00"));
    }

    #[test]
    fn test_render_empty_summary() {
        let summary = PayrollSummary::new("03-2025".parse().unwrap(), vec![]).unwrap();
        let text = render_summary(&summary, &company());
        assert!(text.contains("No attendance recorded for 03-2025"));
        assert!(text.contains("₱0.00"));
    }

    #[test]
    fn test_write_payslip_stops_at_first_failed_write() {
        struct FailAfter(usize);

        impl Write for FailAfter {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                if self.0 == 0 {
                    return Err(fmt::Error);
                }
                self.0 -= 1;
                Ok(())
            }
        }

        let payslip = Payslip {
            period: "03-2025".parse().unwrap(),
            department: "Retail".to_string(),
            role: "Cashier".to_string(),
            overtime_rate: dec("150"),
            line_item: line_item(),
            days: vec![],
        };
        assert!(write_payslip(&mut FailAfter(3), &payslip, &company()).is_err());

        let mut text = String::new();
        write_payslip(&mut text, &payslip, &company()).unwrap();
        assert_eq!(text, render_payslip(&payslip, &company()));
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("Maria Clara de los Santos Reyes", 20).chars().count(), 20);
    }
}
