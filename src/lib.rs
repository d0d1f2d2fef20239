//! Wind turbine energy-yield estimator.
//!
//! Converts a monthly wind-speed frequency table (hours per speed bin per
//! month) and a set of turbine design parameters into monthly and annual
//! electricity generation figures.

/// TOML-based turbine parameter configuration and presets.
pub mod config;
/// Frequency-table ingestion, result export, and template generation.
pub mod io;
/// Estimation pipeline: bin parsing, operating window, power, and energy.
pub mod model;
pub mod runner;
