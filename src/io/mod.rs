//! Table ingestion, result export, and template generation.

/// CSV export for monthly energy results.
pub mod export;
/// Frequency-table CSV ingestion.
pub mod table;
/// Sample frequency-table generation.
pub mod template;
