//! Monthly and annual energy aggregation.

use std::fmt;

use crate::model::types::PowerBin;

/// Annual hours spent in one wind-speed bin, for distribution reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct BinAnnualHours {
    /// Original bin label.
    pub label: String,
    /// Representative speed (m/s).
    pub speed_ms: f32,
    /// Total hours across all months.
    pub annual_hours: f32,
}

/// Aggregated energy figures for one estimation run.
///
/// Computed post-hoc from the window-filtered, power-annotated bin set so
/// monthly figures, the annual total, and the distribution view always come
/// from the same data.
#[derive(Debug, Clone)]
pub struct EnergyReport {
    /// Month column names in original table order.
    pub months: Vec<String>,
    /// Energy generated per month (kWh), aligned with `months`.
    pub monthly_kwh: Vec<f32>,
    /// Total annual energy (kWh): the sum of `monthly_kwh`.
    pub total_annual_kwh: f32,
    /// Annual hours per bin, ordered by representative speed ascending.
    pub distribution: Vec<BinAnnualHours>,
}

impl EnergyReport {
    /// Aggregates energy from power-annotated bins.
    ///
    /// For each month, energy is the sum over bins of `hours * power_w`,
    /// divided by 1000 to convert watt-hours to kWh. An empty bin set
    /// yields zero energy for every month.
    ///
    /// # Panics
    ///
    /// Panics if any bin's hour vector length differs from the month count;
    /// [`crate::model::types::WindFrequencyTable::new`] upholds this upstream.
    pub fn from_bins(bins: &[PowerBin], months: &[String]) -> Self {
        let mut monthly_kwh = vec![0.0_f32; months.len()];
        for bin in bins {
            assert!(
                bin.hours.len() == months.len(),
                "bin \"{}\" has {} hour cells for {} months",
                bin.label,
                bin.hours.len(),
                months.len()
            );
            for (total, hours) in monthly_kwh.iter_mut().zip(&bin.hours) {
                *total += hours * bin.power_w / 1000.0;
            }
        }
        let total_annual_kwh = monthly_kwh.iter().sum();

        let mut distribution: Vec<BinAnnualHours> = bins
            .iter()
            .map(|bin| BinAnnualHours {
                label: bin.label.clone(),
                speed_ms: bin.speed_ms,
                annual_hours: bin.hours.iter().sum(),
            })
            .collect();
        distribution.sort_by(|a, b| a.speed_ms.total_cmp(&b.speed_ms));

        Self {
            months: months.to_vec(),
            monthly_kwh,
            total_annual_kwh,
            distribution,
        }
    }
}

impl fmt::Display for EnergyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Monthly Energy Generation ---")?;
        for (month, kwh) in self.months.iter().zip(&self.monthly_kwh) {
            writeln!(f, "{month:<6} {kwh:>12.1} kWh")?;
        }
        writeln!(
            f,
            "Total annual energy:   {:.1} kWh ({:.2} MWh)",
            self.total_annual_kwh,
            self.total_annual_kwh / 1000.0
        )?;
        writeln!(f)?;
        write!(f, "--- Annual Wind Speed Distribution ---")?;
        for d in &self.distribution {
            write!(
                f,
                "\n{:<12} ({:>5.1} m/s) {:>8.1} h",
                d.label, d.speed_ms, d.annual_hours
            )?;
        }
        Ok(())
    }
}
