//! Sample frequency-table generation.
//!
//! Writes the reference table users fill in: seven wind-speed bins with
//! en-dash labels and plausible hour counts for all twelve calendar months.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::io::table::BIN_COLUMN;

/// Calendar month column headers, in order.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Reference bins and per-month hour counts for the sample table.
const TEMPLATE_ROWS: [(&str, [f32; 12]); 7] = [
    (
        "0\u{2013}2",
        [
            120.0, 110.0, 130.0, 100.0, 90.0, 80.0, 70.0, 80.0, 100.0, 120.0, 130.0, 140.0,
        ],
    ),
    (
        "2\u{2013}4",
        [
            200.0, 180.0, 210.0, 190.0, 170.0, 150.0, 140.0, 150.0, 160.0, 180.0, 190.0, 200.0,
        ],
    ),
    (
        "4\u{2013}6",
        [
            250.0, 230.0, 260.0, 240.0, 220.0, 200.0, 190.0, 200.0, 210.0, 230.0, 240.0, 250.0,
        ],
    ),
    (
        "6\u{2013}8",
        [
            180.0, 160.0, 190.0, 170.0, 150.0, 140.0, 130.0, 140.0, 150.0, 160.0, 170.0, 180.0,
        ],
    ),
    (
        "8\u{2013}10",
        [
            100.0, 90.0, 110.0, 100.0, 90.0, 80.0, 70.0, 80.0, 90.0, 100.0, 110.0, 120.0,
        ],
    ),
    (
        "10\u{2013}12",
        [
            60.0, 50.0, 70.0, 60.0, 50.0, 40.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0,
        ],
    ),
    (
        "12\u{2013}14",
        [
            20.0, 20.0, 30.0, 25.0, 20.0, 15.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0,
        ],
    ),
];

/// Writes the sample frequency table as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_template(writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    let mut header = vec![BIN_COLUMN];
    header.extend(MONTHS);
    wtr.write_record(&header)?;

    for (label, hours) in &TEMPLATE_ROWS {
        let mut record = vec![label.to_string()];
        record.extend(hours.iter().map(|h| format!("{h:.0}")));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the sample frequency table to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn write_template_to_path(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_template(buf)
}
