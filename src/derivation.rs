//! Derivation of the missing quantity among distance, total time and pace.
//!
//! Exactly two known inputs produce a derivation. With fewer, or with all
//! three, every field is taken as entered and nothing is reconciled.

use crate::duration::parse_duration_secs;
use crate::utils::parse_meters;
use log::debug;
use serde::{Deserialize, Serialize};

/// One of the three calculator fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Distance,
    Time,
    Pace,
}

/// Snapshot of the user's parsed inputs. `None` means "not provided".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingInputs {
    pub distance_m: Option<f64>,
    pub total_secs: Option<f64>,
    pub pace_secs_per_km: Option<f64>,
}

impl TrainingInputs {
    /// Parse raw field text. Unparseable text becomes `None`.
    pub fn parse(distance: &str, time: &str, pace: &str) -> Self {
        Self {
            distance_m: parse_meters(distance),
            total_secs: parse_duration_secs(time),
            pace_secs_per_km: parse_duration_secs(pace),
        }
    }

    pub fn known_count(&self) -> usize {
        [
            self.distance_m.is_some(),
            self.total_secs.is_some(),
            self.pace_secs_per_km.is_some(),
        ]
        .iter()
        .filter(|&&known| known)
        .count()
    }

    /// The single field to calculate. Only defined when exactly two are known.
    pub fn missing_field(&self) -> Option<Field> {
        match (self.distance_m, self.total_secs, self.pace_secs_per_km) {
            (Some(_), Some(_), None) => Some(Field::Pace),
            (Some(_), None, Some(_)) => Some(Field::Time),
            (None, Some(_), Some(_)) => Some(Field::Distance),
            _ => None,
        }
    }
}

/// Resolved values after derivation: supplied fields pass through, the
/// missing one is filled in when the arithmetic yields a usable number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Derivation {
    pub distance_m: Option<f64>,
    pub total_secs: Option<f64>,
    pub pace_secs_per_km: Option<f64>,
    /// Field that was calculated rather than supplied.
    pub calculated: Option<Field>,
}

impl Derivation {
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Distance => self.distance_m,
            Field::Time => self.total_secs,
            Field::Pace => self.pace_secs_per_km,
        }
    }

    pub fn is_calculated(&self, field: Field) -> bool {
        self.calculated == Some(field)
    }
}

fn usable(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Compute whichever field is missing.
///
/// # Examples
/// ```
/// use track_pace::derivation::{derive, Field, TrainingInputs};
/// let inputs = TrainingInputs {
///     distance_m: Some(10_000.0),
///     total_secs: Some(2_700.0),
///     pace_secs_per_km: None,
/// };
/// let result = derive(&inputs);
/// assert_eq!(result.calculated, Some(Field::Pace));
/// assert_eq!(result.pace_secs_per_km, Some(270.0));
/// ```
pub fn derive(inputs: &TrainingInputs) -> Derivation {
    let mut result = Derivation {
        distance_m: inputs.distance_m,
        total_secs: inputs.total_secs,
        pace_secs_per_km: inputs.pace_secs_per_km,
        calculated: inputs.missing_field(),
    };

    match (inputs.distance_m, inputs.total_secs, inputs.pace_secs_per_km) {
        (Some(distance), Some(time), None) => {
            result.pace_secs_per_km = usable(time / (distance / 1000.0));
        }
        (Some(distance), None, Some(pace)) => {
            result.total_secs = usable(pace * (distance / 1000.0));
        }
        (None, Some(time), Some(pace)) => {
            result.distance_m = usable(time / pace * 1000.0);
        }
        _ => {
            debug!(
                "{} of 3 fields known, no derivation",
                inputs.known_count()
            );
            return result;
        }
    }

    debug!(
        "Derived {:?}: {:?}",
        result.calculated,
        result.calculated.and_then(|field| result.value(field))
    );
    result
}

/// Format a distance. Calculated distances carry kilometers in parentheses.
pub fn format_distance(meters: f64, calculated: bool) -> Option<String> {
    if !meters.is_finite() || meters <= 0.0 {
        return None;
    }
    if calculated {
        Some(format!("{:.0} m ({:.2} km)", meters, meters / 1000.0))
    } else {
        Some(format!("{} m", meters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(distance: Option<f64>, time: Option<f64>, pace: Option<f64>) -> TrainingInputs {
        TrainingInputs {
            distance_m: distance,
            total_secs: time,
            pace_secs_per_km: pace,
        }
    }

    #[test]
    fn test_pace_from_distance_and_time() {
        let result = derive(&inputs(Some(10_000.0), Some(2_700.0), None));
        assert_eq!(result.calculated, Some(Field::Pace));
        assert_eq!(result.pace_secs_per_km, Some(270.0));
    }

    #[test]
    fn test_time_from_distance_and_pace() {
        let result = derive(&inputs(Some(5_000.0), None, Some(300.0)));
        assert_eq!(result.calculated, Some(Field::Time));
        assert_eq!(result.total_secs, Some(1_500.0));
    }

    #[test]
    fn test_distance_from_time_and_pace() {
        let result = derive(&inputs(None, Some(1_500.0), Some(300.0)));
        assert_eq!(result.calculated, Some(Field::Distance));
        assert_eq!(result.distance_m, Some(5_000.0));
    }

    #[test]
    fn test_distance_with_zero_pace_is_suppressed() {
        let result = derive(&inputs(None, Some(1_500.0), Some(0.0)));
        assert_eq!(result.calculated, Some(Field::Distance));
        assert_eq!(result.distance_m, None);

        let result = derive(&inputs(None, Some(0.0), Some(300.0)));
        assert_eq!(result.distance_m, None);
    }

    #[test]
    fn test_zero_time_gives_no_pace() {
        let result = derive(&inputs(Some(1_000.0), Some(0.0), None));
        assert_eq!(result.pace_secs_per_km, None);
    }

    #[test]
    fn test_all_three_known_is_not_reconciled() {
        let all = inputs(Some(10_000.0), Some(100.0), Some(999.0));
        assert_eq!(all.missing_field(), None);
        let result = derive(&all);
        assert_eq!(result.calculated, None);
        assert_eq!(result.total_secs, Some(100.0));
        assert_eq!(result.pace_secs_per_km, Some(999.0));
    }

    #[test]
    fn test_fewer_than_two_known() {
        let one = inputs(Some(10_000.0), None, None);
        assert_eq!(one.known_count(), 1);
        assert_eq!(derive(&one).calculated, None);
        assert_eq!(derive(&TrainingInputs::default()), Derivation::default());
    }

    #[test]
    fn test_parse_raw_fields() {
        let parsed = TrainingInputs::parse("10000", "45:00", "");
        assert_eq!(parsed, inputs(Some(10_000.0), Some(2_700.0), None));
        assert_eq!(parsed.missing_field(), Some(Field::Pace));

        let parsed = TrainingInputs::parse("abc", "45", "4:30");
        assert_eq!(parsed.missing_field(), Some(Field::Distance));
    }

    #[test]
    fn test_negative_duration_counts_as_missing() {
        let parsed = TrainingInputs::parse("1000", "", "-5");
        assert_eq!(parsed.pace_secs_per_km, None);
        assert_eq!(parsed.missing_field(), None);
        assert_eq!(derive(&parsed).calculated, None);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(10_000.0, false).as_deref(), Some("10000 m"));
        assert_eq!(
            format_distance(5_000.0, true).as_deref(),
            Some("5000 m (5.00 km)")
        );
        assert_eq!(
            format_distance(9_876.4, true).as_deref(),
            Some("9876 m (9.88 km)")
        );
        assert_eq!(format_distance(0.0, true), None);
        assert_eq!(format_distance(f64::NAN, false), None);
    }
}
