//! Wind-speed bin label parsing.
//!
//! Bin labels arrive as free-form text ("4–6", "10-12 m/s", "12+"). Each
//! label is reduced to a representative speed: the midpoint of a two-bound
//! interval, or the single stated value. Labels with no usable number are
//! dropped from the pipeline rather than reported as errors.

use crate::model::types::{ParsedBin, WindFrequencyTable};

/// Parses a bin label into its representative speed (m/s).
///
/// Dash variants (en dash, em dash, minus sign) are normalized to a hyphen
/// before splitting, and the split happens once, so trailing unit text like
/// "m/s" never interferes with the bounds.
///
/// Returns `None` for empty labels or labels with no parseable number.
///
/// # Examples
///
/// ```
/// use wind_yield::model::bins::representative_speed;
///
/// assert_eq!(representative_speed("4-6"), Some(5.0));
/// assert_eq!(representative_speed("4–6 m/s"), Some(5.0));
/// assert_eq!(representative_speed("12+"), Some(12.0));
/// assert_eq!(representative_speed("calm"), None);
/// ```
pub fn representative_speed(label: &str) -> Option<f32> {
    let clean = label
        .trim()
        .replace(['\u{2013}', '\u{2014}', '\u{2212}'], "-");

    let mut parts = clean.splitn(2, '-');
    let first = parts.next()?;
    match parts.next() {
        Some(second) => {
            let lo = first_number(first)?;
            let hi = first_number(second)?;
            Some((lo + hi) / 2.0)
        }
        None => first_number(first),
    }
}

/// Extracts the first unsigned numeric substring of a part: one or more
/// digits, optionally followed by a decimal point and more digits.
fn first_number(part: &str) -> Option<f32> {
    let bytes = part.as_bytes();
    let start = bytes.iter().position(u8::is_ascii_digit)?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' && bytes.get(end + 1).is_some_and(u8::is_ascii_digit)
    {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    part[start..end].parse().ok()
}

/// Parses every row of a frequency table, dropping rows whose label yields
/// no representative speed. Row order is preserved.
pub fn parse_bins(table: &WindFrequencyTable) -> Vec<ParsedBin> {
    table
        .rows
        .iter()
        .filter_map(|row| {
            representative_speed(&row.label).map(|speed_ms| ParsedBin {
                label: row.label.clone(),
                speed_ms,
                hours: row.hours.clone(),
            })
        })
        .collect()
}
