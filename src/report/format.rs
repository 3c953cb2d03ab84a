//! Human-readable rendering of projection figures

use crate::projection::Projection;
use std::io::{self, Write};

/// Render an amount as `$140,400`, or `$1,234.50` when there are cents.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = value < 0.0 && fixed != "0.00";

    let mut out = String::with_capacity(fixed.len() + 4);
    if negative {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(whole));
    if cents != "00" {
        out.push('.');
        out.push_str(cents);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Write the headline metrics and the monthly table
pub fn write_summary<W: Write>(projection: &Projection, mut out: W) -> io::Result<()> {
    let summary = &projection.summary;

    writeln!(out, "Projection Summary:")?;
    writeln!(out, "  New students / month:  {}", summary.new_students_per_month)?;
    writeln!(out, "  New revenue / month:   {}", format_currency(summary.new_revenue_per_month))?;
    writeln!(out, "  Annual salary savings: {}", format_currency(summary.annual_savings))?;
    writeln!(out, "  12-month ROI:          {}%", projection.roi_display())?;

    if let Some(last) = projection.final_month() {
        writeln!(out, "  Month {} revenue:      {}", last.month_index, format_currency(last.cumulative_revenue))?;
        writeln!(out, "  Month {} net profit:   {}", last.month_index, format_currency(last.net_profit))?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:<6} {:>14} {:>16} {:>12} {:>12} {:>14}",
        "Month", "Revenue", "Cum. Revenue", "Agency", "In-house", "Net Profit"
    )?;
    for row in &projection.months {
        writeln!(
            out,
            "{:<6} {:>14} {:>16} {:>12} {:>12} {:>14}",
            row.month_index,
            format_currency(row.monthly_revenue),
            format_currency(row.cumulative_revenue),
            format_currency(row.cumulative_agency_cost),
            format_currency(row.cumulative_human_cost),
            format_currency(row.net_profit),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::CalculationInputs;
    use crate::projection::compute_projection;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1800.0), "$1,800");
        assert_eq!(format_currency(140_400.0), "$140,400");
        assert_eq!(format_currency(1_234_567.5), "$1,234,567.50");
        assert_eq!(format_currency(-5200.0), "-$5,200");
        assert_eq!(format_currency(-0.001), "$0");
    }

    #[test]
    fn test_summary_text() {
        let projection = compute_projection(&CalculationInputs::default());
        let mut buf = Vec::new();
        write_summary(&projection, &mut buf).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");

        assert!(text.contains("New students / month:  15"));
        assert!(text.contains("New revenue / month:   $1,800"));
        assert!(text.contains("Annual salary savings: $34,000"));
        assert!(text.contains("12-month ROI:          778%"));
        assert!(text.contains("$140,400"));
        // header + 12 rows after the blank line
        let table_lines = text.split("\n\n").nth(1).expect("table").lines().count();
        assert_eq!(table_lines, 13);
    }
}
