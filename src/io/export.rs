//! CSV export for monthly energy results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::model::energy::EnergyReport;

/// Column header for the monthly energy CSV export.
const HEADER: &str = "month,energy_kwh";

/// Exports monthly energy figures to a CSV file at the given path.
///
/// Writes a header row followed by one row per month in original table
/// order. Produces deterministic output for identical inputs. The annual
/// total is not written; it is derivable as the column sum.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(report: &EnergyReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(report, buf)
}

/// Writes monthly energy figures as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(report: &EnergyReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;
    for (month, kwh) in report.months.iter().zip(&report.monthly_kwh) {
        wtr.write_record(&[month.clone(), format!("{kwh:.4}")])?;
    }

    wtr.flush()?;
    Ok(())
}
