//! Kinetic-energy flux power model.

use crate::config::TurbineConfig;
use crate::model::types::{ParsedBin, PowerBin};

/// Instantaneous power output (W) at a given wind speed.
///
/// `P = 0.5 · ρ · A · v³ · η`, with air density ρ (kg/m³), rotor swept
/// area A (m²), speed v (m/s), and efficiency η.
///
/// Assumes `speed_ms >= 0`: negative speeds cannot reach this function
/// because the operating window runs upstream with `cut_in_ms >= 0`.
/// A speed of zero yields zero power.
///
/// # Examples
///
/// ```
/// use wind_yield::config::TurbineConfig;
/// use wind_yield::model::power::power_watts;
///
/// let cfg = TurbineConfig::small_rotor();
/// assert_eq!(power_watts(0.0, &cfg), 0.0);
/// assert!((power_watts(5.0, &cfg) - 1537.5).abs() < 1e-2);
/// ```
pub fn power_watts(speed_ms: f32, config: &TurbineConfig) -> f32 {
    0.5 * config.air_density * config.rotor_area_m2 * speed_ms.powi(3) * config.efficiency
}

/// Annotates each bin with its power output at the representative speed.
pub fn annotate_power(bins: Vec<ParsedBin>, config: &TurbineConfig) -> Vec<PowerBin> {
    bins.into_iter()
        .map(|bin| PowerBin {
            power_w: power_watts(bin.speed_ms, config),
            label: bin.label,
            speed_ms: bin.speed_ms,
            hours: bin.hours,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> TurbineConfig {
        TurbineConfig {
            rotor_area_m2: 50.0,
            efficiency: 0.4,
            air_density: 1.23,
            cut_in_ms: 2.0,
            cut_out_ms: 20.0,
        }
    }

    #[test]
    fn zero_speed_zero_power() {
        assert_eq!(power_watts(0.0, &cfg()), 0.0);
    }

    #[test]
    fn reference_values() {
        // 0.5 * 1.23 * 50 * 3^3 * 0.4 = 332.1 W
        assert!((power_watts(3.0, &cfg()) - 332.1).abs() < 1e-2);
        // 0.5 * 1.23 * 50 * 5^3 * 0.4 = 1537.5 W
        assert!((power_watts(5.0, &cfg()) - 1537.5).abs() < 1e-2);
    }

    #[test]
    fn power_is_cubic_in_speed() {
        let c = cfg();
        let p1 = power_watts(4.0, &c);
        let p2 = power_watts(8.0, &c);
        assert!((p2 / p1 - 8.0).abs() < 1e-4);
    }

    #[test]
    fn power_is_linear_in_area_density_and_efficiency() {
        let base = cfg();
        let p0 = power_watts(6.0, &base);

        let mut doubled = cfg();
        doubled.rotor_area_m2 *= 2.0;
        assert!((power_watts(6.0, &doubled) / p0 - 2.0).abs() < 1e-4);

        let mut doubled = cfg();
        doubled.air_density *= 2.0;
        assert!((power_watts(6.0, &doubled) / p0 - 2.0).abs() < 1e-4);

        let mut doubled = cfg();
        doubled.efficiency *= 2.0;
        assert!((power_watts(6.0, &doubled) / p0 - 2.0).abs() < 1e-4);
    }

    #[test]
    fn annotate_preserves_order_and_hours() {
        let bins = vec![
            ParsedBin {
                label: "2-4".to_string(),
                speed_ms: 3.0,
                hours: vec![100.0, 50.0],
            },
            ParsedBin {
                label: "4-6".to_string(),
                speed_ms: 5.0,
                hours: vec![80.0, 40.0],
            },
        ];
        let annotated = annotate_power(bins, &cfg());
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].label, "2-4");
        assert_eq!(annotated[0].hours, vec![100.0, 50.0]);
        assert!(annotated[1].power_w > annotated[0].power_w);
    }
}
