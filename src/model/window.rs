//! Cut-in/cut-out operating window filter.

use crate::model::types::ParsedBin;

/// Keeps the bins whose representative speed lies within the turbine's
/// operating window, `[cut_in_ms, cut_out_ms]` inclusive on both ends.
///
/// Bin order is preserved. An inverted window (`cut_in_ms > cut_out_ms`)
/// matches nothing and returns an empty vector; it is a degenerate but
/// valid configuration, not an error.
pub fn apply_operating_window(
    bins: Vec<ParsedBin>,
    cut_in_ms: f32,
    cut_out_ms: f32,
) -> Vec<ParsedBin> {
    bins.into_iter()
        .filter(|bin| bin.speed_ms >= cut_in_ms && bin.speed_ms <= cut_out_ms)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(speed_ms: f32) -> ParsedBin {
        ParsedBin {
            label: format!("{speed_ms}"),
            speed_ms,
            hours: vec![1.0],
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let bins = vec![bin(1.9), bin(2.0), bin(4.0), bin(6.0), bin(6.1)];
        let kept = apply_operating_window(bins, 2.0, 6.0);
        let speeds: Vec<f32> = kept.iter().map(|b| b.speed_ms).collect();
        assert_eq!(speeds, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn order_is_preserved() {
        let bins = vec![bin(5.0), bin(3.0), bin(4.0)];
        let kept = apply_operating_window(bins, 0.0, 10.0);
        let speeds: Vec<f32> = kept.iter().map(|b| b.speed_ms).collect();
        assert_eq!(speeds, vec![5.0, 3.0, 4.0]);
    }

    #[test]
    fn inverted_window_excludes_everything() {
        let bins = vec![bin(3.0), bin(7.0), bin(12.0)];
        let kept = apply_operating_window(bins, 10.0, 5.0);
        assert!(kept.is_empty());
    }

    #[test]
    fn widening_the_window_never_removes_a_bin() {
        let speeds = [0.5, 2.0, 3.5, 8.0, 14.0, 21.0];
        let narrow: Vec<f32> =
            apply_operating_window(speeds.iter().map(|&s| bin(s)).collect(), 3.0, 12.0)
                .iter()
                .map(|b| b.speed_ms)
                .collect();
        let wide: Vec<f32> =
            apply_operating_window(speeds.iter().map(|&s| bin(s)).collect(), 1.0, 20.0)
                .iter()
                .map(|b| b.speed_ms)
                .collect();
        for s in &narrow {
            assert!(wide.contains(s), "widened window dropped bin at {s} m/s");
        }
    }
}
