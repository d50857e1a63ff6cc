use crate::config::{DEFAULT_LAP_LENGTH_M, MAX_LAP_LENGTH_M, MIN_LAP_LENGTH_M};
use log::warn;

/// Read a distance in meters. Anything that is not a finite positive number
/// counts as "not provided".
pub fn parse_meters(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|meters| meters.is_finite() && *meters > 0.0)
}

/// Generic numeric input validation
pub fn validate_numeric_input(
    input: &str,
    min: Option<f64>,
    max: Option<f64>,
    field_name: &str,
) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(format!("{} cannot be empty", field_name));
    }

    match trimmed.parse::<f64>() {
        Ok(val) if val.is_finite() => {
            if let Some(min_val) = min {
                if val < min_val {
                    return Err(format!("{} must be at least {}", field_name, min_val));
                }
            }
            if let Some(max_val) = max {
                if val > max_val {
                    return Err(format!("{} cannot exceed {}", field_name, max_val));
                }
            }
            Ok(val)
        }
        _ => Err(format!("{} must be a valid number", field_name)),
    }
}

/// Validate lap length input
pub fn validate_lap_length(input: &str) -> Result<f64, String> {
    validate_numeric_input(
        input,
        Some(MIN_LAP_LENGTH_M),
        Some(MAX_LAP_LENGTH_M),
        "Lap length",
    )
}

/// Lap length used for lap math. Zero, negative, or non-finite lengths fall
/// back to the default track.
pub fn effective_lap_length(lap_length_m: f64) -> f64 {
    if lap_length_m.is_finite() && lap_length_m > 0.0 {
        lap_length_m
    } else {
        warn!(
            "Lap length {} is unusable, falling back to {} m",
            lap_length_m, DEFAULT_LAP_LENGTH_M
        );
        DEFAULT_LAP_LENGTH_M
    }
}
