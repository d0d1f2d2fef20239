//! Shared test fixtures for integration tests.

use wind_yield::config::TurbineConfig;
use wind_yield::io::table::parse_table;
use wind_yield::model::WindFrequencyTable;

/// Three-bin, January-only frequency table from the reference scenario.
pub const JAN_ONLY_CSV: &str = "\
Wind Speed Bin (m/s),Jan
0-2,100
2-4,100
4-6,100
";

/// Parses a frequency table from an in-memory CSV string.
pub fn table_from_csv(csv: &str) -> WindFrequencyTable {
    parse_table(csv.as_bytes()).expect("fixture table should parse")
}

/// Reference small-rotor parameters (50 m², 0.4 efficiency, 1.23 kg/m³)
/// with a 2–6 m/s operating window.
pub fn reference_config() -> TurbineConfig {
    TurbineConfig {
        rotor_area_m2: 50.0,
        efficiency: 0.4,
        air_density: 1.23,
        cut_in_ms: 2.0,
        cut_out_ms: 6.0,
    }
}
