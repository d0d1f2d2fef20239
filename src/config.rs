//! TOML-based turbine parameter configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Turbine design parameters parsed from TOML.
///
/// All fields have defaults matching the reference turbine. Load from
/// TOML with [`TurbineConfig::from_toml_file`] or use
/// [`TurbineConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TurbineConfig {
    /// Rotor swept area (m², must be > 0).
    pub rotor_area_m2: f32,
    /// Combined rotor/generator conversion efficiency (dimensionless, 0.0–1.0).
    pub efficiency: f32,
    /// Air density (kg/m³, must be > 0).
    pub air_density: f32,
    /// Cut-in speed (m/s): bins with a slower midpoint produce no power.
    pub cut_in_ms: f32,
    /// Cut-out speed (m/s): bins with a faster midpoint produce no power.
    pub cut_out_ms: f32,
}

impl Default for TurbineConfig {
    fn default() -> Self {
        Self {
            rotor_area_m2: 50.0,
            efficiency: 0.4,
            air_density: 1.225,
            cut_in_ms: 3.0,
            cut_out_ms: 25.0,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Field name (e.g., `"rotor_area_m2"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl TurbineConfig {
    /// Returns the baseline parameter set (ISA air density, wide operating window).
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the small-rotor preset: low cut-in, early cut-out, warm-air density.
    pub fn small_rotor() -> Self {
        Self {
            rotor_area_m2: 50.0,
            efficiency: 0.4,
            air_density: 1.23,
            cut_in_ms: 2.0,
            cut_out_ms: 20.0,
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "small_rotor"];

    /// Loads a parameter set from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "small_rotor" => Ok(Self::small_rotor()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a parameter set from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "params".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a parameter set from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. An inverted
    /// operating window (`cut_in_ms > cut_out_ms`) is deliberately not an
    /// error: it is a degenerate configuration that excludes every bin and
    /// yields zero energy.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.rotor_area_m2 <= 0.0 {
            errors.push(ConfigError {
                field: "rotor_area_m2".into(),
                message: "must be > 0".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.efficiency) {
            errors.push(ConfigError {
                field: "efficiency".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }
        if self.air_density <= 0.0 {
            errors.push(ConfigError {
                field: "air_density".into(),
                message: "must be > 0".into(),
            });
        }
        if self.cut_in_ms < 0.0 {
            errors.push(ConfigError {
                field: "cut_in_ms".into(),
                message: "must be >= 0".into(),
            });
        }
        if self.cut_out_ms < 0.0 {
            errors.push(ConfigError {
                field: "cut_out_ms".into(),
                message: "must be >= 0".into(),
            });
        }

        errors
    }
}
