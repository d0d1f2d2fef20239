//! Core pipeline types: frequency table rows and derived bin records.

/// One row of the frequency table: a wind-speed bin and its monthly hours.
#[derive(Debug, Clone, PartialEq)]
pub struct BinRow {
    /// Free-form bin label as it appeared in the source table (e.g. "4–6").
    pub label: String,
    /// Hours per month the wind fell in this bin, aligned with the table's
    /// month columns.
    pub hours: Vec<f32>,
}

/// A monthly wind-speed frequency table.
///
/// `months` carries the time-period column names in their original file
/// order; every row's `hours` vector is aligned with it. Month names are
/// kept separate from row data so label/speed/power fields can never be
/// mistaken for month columns downstream.
///
/// # Examples
///
/// ```
/// use wind_yield::model::{BinRow, WindFrequencyTable};
///
/// let table = WindFrequencyTable::new(
///     vec!["Jan".to_string(), "Feb".to_string()],
///     vec![BinRow { label: "4-6".to_string(), hours: vec![120.0, 90.0] }],
/// );
/// assert_eq!(table.months.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WindFrequencyTable {
    /// Month column names in original order.
    pub months: Vec<String>,
    /// Bin rows in original order.
    pub rows: Vec<BinRow>,
}

impl WindFrequencyTable {
    /// Creates a frequency table from month names and bin rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's hour vector length differs from the month count.
    pub fn new(months: Vec<String>, rows: Vec<BinRow>) -> Self {
        for row in &rows {
            assert!(
                row.hours.len() == months.len(),
                "row \"{}\" has {} hour cells for {} months",
                row.label,
                row.hours.len(),
                months.len()
            );
        }
        Self { months, rows }
    }
}

/// A bin row whose label parsed to a representative speed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBin {
    /// Original bin label.
    pub label: String,
    /// Representative speed (m/s): the midpoint of the bin's bounds, or its
    /// single stated value.
    pub speed_ms: f32,
    /// Hours per month, aligned with the table's month columns.
    pub hours: Vec<f32>,
}

/// A parsed, window-filtered bin annotated with its power output.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerBin {
    /// Original bin label.
    pub label: String,
    /// Representative speed (m/s).
    pub speed_ms: f32,
    /// Instantaneous power output at the representative speed (W).
    pub power_w: f32,
    /// Hours per month, aligned with the table's month columns.
    pub hours: Vec<f32>,
}
