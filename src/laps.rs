//! Lap counting and per-lap split times for a configurable track length.

use crate::config::MAX_SPLITS;
use crate::utils::effective_lap_length;
use log::warn;
use serde::{Deserialize, Serialize};

/// How a distance divides into laps of the configured track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapSummary {
    pub lap_length_m: f64,
    /// Real-valued `distance / lap_length`.
    pub lap_count: f64,
    pub full_laps: u64,
    /// Whole meters left over after the last full lap.
    pub remainder_m: f64,
    /// Fraction of the current lap covered, in `(0, 1]`. An exact multiple
    /// of the lap length reports 1.0 so the final lap renders closed.
    pub progress: f64,
}

impl LapSummary {
    /// Returns `None` unless the distance is a finite positive number.
    pub fn compute(distance_m: f64, lap_length_m: f64) -> Option<Self> {
        if !distance_m.is_finite() || distance_m <= 0.0 {
            return None;
        }
        let lap_length_m = effective_lap_length(lap_length_m);
        let lap_count = distance_m / lap_length_m;
        let full_laps = lap_count.floor();
        let remainder_m = (distance_m - full_laps * lap_length_m).round();
        let fraction = lap_count.fract();
        let progress = if fraction == 0.0 { 1.0 } else { fraction };

        Some(Self {
            lap_length_m,
            lap_count,
            full_laps: full_laps as u64,
            remainder_m,
            progress,
        })
    }
}

/// Cumulative time at one lap boundary, or at the finish.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapSplit {
    /// 1-based lap index. The final partial lap gets `full_laps + 1`.
    pub lap: u64,
    pub cumulative_m: f64,
    pub elapsed_secs: Option<f64>,
    pub is_final: bool,
}

impl LapSplit {
    pub fn label(&self) -> String {
        format!("Lap {} · {:.0} m", self.lap, self.cumulative_m)
    }
}

/// Build the split table for a distance spanning more than one lap.
///
/// Split times come from the pace when known, otherwise they are
/// interpolated from the total time by distance fraction. The trailing
/// partial lap, if any, takes the total time as-is.
pub fn compute_splits(
    distance_m: f64,
    lap_length_m: f64,
    pace_secs_per_km: Option<f64>,
    total_secs: Option<f64>,
) -> Vec<LapSplit> {
    let Some(summary) = LapSummary::compute(distance_m, lap_length_m) else {
        return Vec::new();
    };
    if distance_m <= summary.lap_length_m {
        return Vec::new();
    }
    if summary.full_laps > MAX_SPLITS {
        warn!(
            "{} laps exceed the split limit of {}, skipping splits",
            summary.full_laps, MAX_SPLITS
        );
        return Vec::new();
    }

    let pace_time = |meters: f64| pace_secs_per_km.map(|pace| pace * (meters / 1000.0));

    let mut splits: Vec<LapSplit> = (1..=summary.full_laps)
        .map(|lap| {
            let cumulative_m = lap as f64 * summary.lap_length_m;
            let elapsed_secs = pace_time(cumulative_m)
                .or_else(|| total_secs.map(|total| total * (cumulative_m / distance_m)));
            LapSplit {
                lap,
                cumulative_m,
                elapsed_secs,
                is_final: false,
            }
        })
        .collect();

    if summary.remainder_m > 0.0 {
        splits.push(LapSplit {
            lap: summary.full_laps + 1,
            cumulative_m: distance_m,
            elapsed_secs: pace_time(distance_m).or(total_secs),
            is_final: true,
        });
    }

    splits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LAP_LENGTH_M;

    #[test]
    fn test_summary_with_partial_lap() {
        let summary = LapSummary::compute(1000.0, 400.0).unwrap();
        assert_eq!(summary.lap_count, 2.5);
        assert_eq!(summary.full_laps, 2);
        assert_eq!(summary.remainder_m, 200.0);
        assert_eq!(summary.progress, 0.5);
    }

    #[test]
    fn test_exact_multiple_reports_full_progress() {
        let summary = LapSummary::compute(800.0, 400.0).unwrap();
        assert_eq!(summary.full_laps, 2);
        assert_eq!(summary.remainder_m, 0.0);
        assert_eq!(summary.progress, 1.0);
    }

    #[test]
    fn test_summary_rejects_empty_distance() {
        assert!(LapSummary::compute(0.0, 400.0).is_none());
        assert!(LapSummary::compute(-100.0, 400.0).is_none());
        assert!(LapSummary::compute(f64::NAN, 400.0).is_none());
    }

    #[test]
    fn test_bad_lap_length_uses_default() {
        let summary = LapSummary::compute(1000.0, 0.0).unwrap();
        assert_eq!(summary.lap_length_m, DEFAULT_LAP_LENGTH_M);
        assert_eq!(summary.full_laps, 2);
    }

    #[test]
    fn test_splits_from_pace() {
        let splits = compute_splits(1000.0, 400.0, Some(300.0), None);
        assert_eq!(splits.len(), 3);
        assert_eq!(splits[0].cumulative_m, 400.0);
        assert_eq!(splits[0].elapsed_secs, Some(120.0));
        assert_eq!(splits[1].cumulative_m, 800.0);
        assert_eq!(splits[1].elapsed_secs, Some(240.0));
        assert_eq!(splits[2].cumulative_m, 1000.0);
        assert_eq!(splits[2].elapsed_secs, Some(300.0));
        assert!(splits[2].is_final);
        assert!(!splits[1].is_final);
        assert_eq!(splits[2].label(), "Lap 3 · 1000 m");
    }

    #[test]
    fn test_splits_interpolate_total_time() {
        let splits = compute_splits(1000.0, 400.0, None, Some(310.0));
        assert_eq!(splits[0].elapsed_secs, Some(124.0));
        assert_eq!(splits[1].elapsed_secs, Some(248.0));
        assert_eq!(splits[2].elapsed_secs, Some(310.0));
    }

    #[test]
    fn test_pace_takes_precedence_over_total() {
        let splits = compute_splits(1000.0, 400.0, Some(300.0), Some(9_999.0));
        assert_eq!(splits[2].elapsed_secs, Some(300.0));
    }

    #[test]
    fn test_splits_without_timing() {
        let splits = compute_splits(1000.0, 400.0, None, None);
        assert_eq!(splits.len(), 3);
        assert!(splits.iter().all(|split| split.elapsed_secs.is_none()));
    }

    #[test]
    fn test_exact_multiple_has_no_final_entry() {
        let splits = compute_splits(1200.0, 400.0, Some(240.0), None);
        assert_eq!(splits.len(), 3);
        assert!(splits.iter().all(|split| !split.is_final));
        assert_eq!(splits[2].elapsed_secs, Some(288.0));
    }

    #[test]
    fn test_huge_distance_skips_splits() {
        assert!(compute_splits(1e13, 400.0, Some(300.0), None).is_empty());
        assert!(compute_splits(1e8, 400.0, None, Some(3_600.0)).is_empty());

        let summary = LapSummary::compute(1e13, 400.0).unwrap();
        assert_eq!(summary.full_laps, 25_000_000_000);
    }

    #[test]
    fn test_split_limit_is_inclusive() {
        let distance = MAX_SPLITS as f64 * 400.0;
        assert_eq!(compute_splits(distance, 400.0, None, None).len(), MAX_SPLITS as usize);
        assert!(compute_splits(distance + 400.0, 400.0, None, None).is_empty());
    }

    #[test]
    fn test_label_rounds_fractional_meters() {
        let splits = compute_splits(161.0 / 160.0 * 1000.0, 400.0, Some(160.0), None);
        assert_eq!(splits.len(), 3);
        assert_eq!(splits[2].label(), "Lap 3 · 1006 m");
        assert_eq!(splits[1].label(), "Lap 2 · 800 m");
    }

    #[test]
    fn test_single_lap_or_less_has_no_splits() {
        assert!(compute_splits(300.0, 400.0, Some(300.0), None).is_empty());
        assert!(compute_splits(400.0, 400.0, Some(300.0), Some(80.0)).is_empty());
    }
}
