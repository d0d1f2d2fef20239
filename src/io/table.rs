//! Frequency-table CSV ingestion.
//!
//! The source table carries one bin-label column plus one column per month.
//! The label column is located by its exact header; every other column, in
//! file order, is treated as a month column. Shape problems abort the run
//! with a [`TableError`]; unparseable bin labels do not (they are dropped
//! later in the pipeline).

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::model::types::{BinRow, WindFrequencyTable};

/// Header of the bin-label column in the source table.
pub const BIN_COLUMN: &str = "Wind Speed Bin (m/s)";

/// A structured table-ingestion error. Any of these aborts the run; no
/// partial table is returned.
#[derive(Debug)]
pub enum TableError {
    /// The file could not be read or is not valid CSV.
    Read(String),
    /// The bin-label column header is absent.
    MissingBinColumn,
    /// The table has a bin-label column but no month columns.
    NoMonthColumns,
    /// An hour cell is not numeric.
    BadHourCell {
        /// 1-based data row number.
        row: usize,
        /// Month column header.
        column: String,
        /// Offending cell contents.
        value: String,
    },
    /// An hour cell is negative.
    NegativeHours {
        /// 1-based data row number.
        row: usize,
        /// Month column header.
        column: String,
        /// Offending hour count.
        value: f32,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Read(msg) => write!(f, "table error: {msg}"),
            TableError::MissingBinColumn => {
                write!(f, "table error: missing \"{BIN_COLUMN}\" column")
            }
            TableError::NoMonthColumns => {
                write!(f, "table error: no month columns beside \"{BIN_COLUMN}\"")
            }
            TableError::BadHourCell { row, column, value } => write!(
                f,
                "table error: row {row}, column \"{column}\": \"{value}\" is not a number"
            ),
            TableError::NegativeHours { row, column, value } => write!(
                f,
                "table error: row {row}, column \"{column}\": hour count {value} is negative"
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Reads a frequency table from a CSV file at the given path.
///
/// # Errors
///
/// Returns a [`TableError`] if the file cannot be opened or its contents
/// fail [`parse_table`].
pub fn read_table(path: &Path) -> Result<WindFrequencyTable, TableError> {
    let file = File::open(path)
        .map_err(|e| TableError::Read(format!("cannot open \"{}\": {e}", path.display())))?;
    parse_table(file)
}

/// Parses a frequency table from any CSV reader.
///
/// Empty hour cells read as 0; non-numeric or negative hour cells are
/// errors. At least one month column must be present.
///
/// # Errors
///
/// Returns a [`TableError`] describing the first shape problem found.
pub fn parse_table(reader: impl Read) -> Result<WindFrequencyTable, TableError> {
    let mut rdr = csv::ReaderBuilder::new().from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| TableError::Read(e.to_string()))?
        .clone();
    let bin_idx = headers
        .iter()
        .position(|h| h.trim() == BIN_COLUMN)
        .ok_or(TableError::MissingBinColumn)?;

    let months: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != bin_idx)
        .map(|(_, h)| h.trim().to_string())
        .collect();
    if months.is_empty() {
        return Err(TableError::NoMonthColumns);
    }

    let mut rows = Vec::new();
    for (row_idx, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| TableError::Read(e.to_string()))?;
        let row = row_idx + 1;

        let label = record.get(bin_idx).unwrap_or("").trim().to_string();
        let mut hours = Vec::with_capacity(months.len());
        let mut month_iter = months.iter();
        for (i, cell) in record.iter().enumerate() {
            if i == bin_idx {
                continue;
            }
            let column = month_iter.next().map(String::as_str).unwrap_or("");
            let cell = cell.trim();
            let value: f32 = if cell.is_empty() {
                0.0
            } else {
                cell.parse().map_err(|_| TableError::BadHourCell {
                    row,
                    column: column.to_string(),
                    value: cell.to_string(),
                })?
            };
            if value < 0.0 {
                return Err(TableError::NegativeHours {
                    row,
                    column: column.to_string(),
                    value,
                });
            }
            hours.push(value);
        }

        rows.push(BinRow { label, hours });
    }

    Ok(WindFrequencyTable::new(months, rows))
}
