//! Estimation pipeline components for wind-yield modeling.

/// Wind-speed bin label parsing.
pub mod bins;
/// Monthly and annual energy aggregation.
pub mod energy;
/// Kinetic-energy flux power model.
pub mod power;
pub mod types;
/// Cut-in/cut-out operating window filter.
pub mod window;

// Re-export the main types for convenience
pub use energy::EnergyReport;
pub use types::BinRow;
pub use types::ParsedBin;
pub use types::PowerBin;
pub use types::WindFrequencyTable;
