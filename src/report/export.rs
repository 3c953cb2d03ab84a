//! CSV and JSON export of a projection

use crate::error::Result;
use crate::projection::Projection;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column header for the monthly CSV export
pub const MONTHLY_HEADER: [&str; 6] = [
    "month",
    "monthly_revenue",
    "cumulative_revenue",
    "agency_cost",
    "human_cost",
    "net_profit",
];

/// Write the 12 monthly rows as CSV
pub fn write_monthly_csv<W: Write>(projection: &Projection, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(MONTHLY_HEADER)?;

    for row in &projection.months {
        wtr.write_record(&[
            row.month_index.to_string(),
            format!("{:.2}", row.monthly_revenue),
            format!("{:.2}", row.cumulative_revenue),
            format!("{:.2}", row.cumulative_agency_cost),
            format!("{:.2}", row.cumulative_human_cost),
            format!("{:.2}", row.net_profit),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn export_monthly_csv<P: AsRef<Path>>(projection: &Projection, path: P) -> Result<()> {
    let file = File::create(path)?;
    write_monthly_csv(projection, BufWriter::new(file))
}

/// Write the full projection (months and summary) as pretty JSON
pub fn write_json<W: Write>(projection: &Projection, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, projection)?;
    Ok(())
}

pub fn export_json<P: AsRef<Path>>(projection: &Projection, path: P) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(projection, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::CalculationInputs;
    use crate::projection::compute_projection;

    #[test]
    fn test_monthly_csv() {
        let projection = compute_projection(&CalculationInputs::default());
        let mut buf = Vec::new();
        write_monthly_csv(&projection, &mut buf).expect("write csv");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], MONTHLY_HEADER.join(","));
        assert_eq!(lines[1], "1,1800.00,1800.00,5000.00,4000.00,-5200.00");
        assert_eq!(lines[12], "12,21600.00,140400.00,16000.00,48000.00,122400.00");
    }

    #[test]
    fn test_json_export() {
        let projection = compute_projection(&CalculationInputs::default());
        let mut buf = Vec::new();
        write_json(&projection, &mut buf).expect("write json");

        let parsed: Projection = serde_json::from_slice(&buf).expect("parse json");
        assert_eq!(parsed, projection);

        let value: serde_json::Value = serde_json::from_slice(&buf).expect("parse value");
        assert_eq!(value["months"].as_array().map(Vec::len), Some(12));
        assert_eq!(value["summary"]["new_students_per_month"], 15);
    }
}
