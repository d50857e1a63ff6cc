//! Duration parsing and display formatting.
//!
//! All durations are plain `f64` seconds. Text input accepts three shapes:
//! - Bare decimal number: "45" or "4.5" (interpreted as **minutes**)
//! - Two colon segments: "45:00" (minutes:seconds)
//! - Three colon segments: "1:05:30" (hours:minutes:seconds)
//!
//! Segments are not range checked, so "1:90" is 150 seconds.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// A non-negative decimal such as "12", "12.5", "12." or ".5"
static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)$").unwrap());

/// Reasons a duration string could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationParseError {
    EmptyInput,
    InvalidSegment(String),
    Unrecognized(String),
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DurationParseError::EmptyInput => write!(f, "Duration cannot be empty"),
            DurationParseError::InvalidSegment(segment) => {
                write!(f, "Invalid duration segment: '{}'", segment)
            }
            DurationParseError::Unrecognized(input) => write!(
                f,
                "Unrecognized duration '{}'. Use: 45, 45:00, or 1:05:30",
                input
            ),
        }
    }
}

impl std::error::Error for DurationParseError {}

fn parse_segment(segment: &str) -> Result<f64, DurationParseError> {
    let trimmed = segment.trim();
    if !DECIMAL_REGEX.is_match(trimmed) {
        return Err(DurationParseError::InvalidSegment(trimmed.to_string()));
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| DurationParseError::InvalidSegment(trimmed.to_string()))
}

/// Parse free-form duration text into seconds.
///
/// # Examples
/// ```
/// use track_pace::duration::parse_duration;
/// assert_eq!(parse_duration("45"), Ok(2700.0));
/// assert_eq!(parse_duration("45:00"), Ok(2700.0));
/// assert_eq!(parse_duration("1:00:00"), Ok(3600.0));
/// assert!(parse_duration("abc").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<f64, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::EmptyInput);
    }

    // Bare numbers are minutes
    if DECIMAL_REGEX.is_match(trimmed) {
        return Ok(parse_segment(trimmed)? * 60.0);
    }

    let segments: Vec<&str> = trimmed.split(':').collect();
    match segments.as_slice() {
        [hours, minutes, seconds] => Ok(parse_segment(hours)? * 3600.0
            + parse_segment(minutes)? * 60.0
            + parse_segment(seconds)?),
        [minutes, seconds] => Ok(parse_segment(minutes)? * 60.0 + parse_segment(seconds)?),
        _ => match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
            _ => Err(DurationParseError::Unrecognized(trimmed.to_string())),
        },
    }
}

/// Like [`parse_duration`], but collapses every failure into "not provided".
pub fn parse_duration_secs(input: &str) -> Option<f64> {
    match parse_duration(input) {
        Ok(secs) => Some(secs),
        Err(DurationParseError::EmptyInput) => None,
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}

fn rounded_seconds(seconds: f64) -> Option<u64> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    Some(seconds.round() as u64)
}

/// Format seconds as "H:MM:SS" from one hour up, otherwise "M:SS".
/// Returns `None` for non-finite or non-positive input.
pub fn format_duration(seconds: f64) -> Option<String> {
    let total = rounded_seconds(seconds)?;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        Some(format!("{}:{:02}:{:02}", hours, minutes, secs))
    } else {
        Some(format!("{}:{:02}", minutes, secs))
    }
}

/// Format a pace in seconds per kilometer as "M:SS min/km".
pub fn format_pace(secs_per_km: f64) -> Option<String> {
    let total = rounded_seconds(secs_per_km)?;
    Some(format!("{}:{:02} min/km", total / 60, total % 60))
}

/// Format a running stopwatch value as "M:SS.cc", or "H:MM:SS.cc" from one hour.
pub fn format_stopwatch(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let centis = (ms % 1000) / 10;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}.{:02}", hours, minutes, seconds, centis)
    } else {
        format!("{}:{:02}.{:02}", minutes, seconds, centis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_number_is_minutes() {
        assert_eq!(parse_duration("45"), Ok(2700.0));
        assert_eq!(parse_duration(" 4.5 "), Ok(270.0));
        assert_eq!(parse_duration(".5"), Ok(30.0));
        assert_eq!(parse_duration("12."), Ok(720.0));
        assert_eq!(parse_duration("1.:30"), Ok(90.0));
    }

    #[test]
    fn test_colon_forms() {
        assert_eq!(parse_duration("45:00"), Ok(2700.0));
        assert_eq!(parse_duration("4:30"), Ok(270.0));
        assert_eq!(parse_duration("1:00:00"), Ok(3600.0));
        assert_eq!(parse_duration("0:42:15.5"), Ok(2535.5));
    }

    #[test]
    fn test_segments_are_not_normalized() {
        assert_eq!(parse_duration("1:90"), Ok(150.0));
        assert_eq!(parse_duration("0:75:00"), Ok(4500.0));
    }

    #[test]
    fn test_unparseable_input() {
        assert_eq!(parse_duration(""), Err(DurationParseError::EmptyInput));
        assert_eq!(parse_duration("   "), Err(DurationParseError::EmptyInput));
        assert!(matches!(
            parse_duration("abc"),
            Err(DurationParseError::Unrecognized(_))
        ));
        assert!(matches!(
            parse_duration("4:xx"),
            Err(DurationParseError::InvalidSegment(_))
        ));
        assert!(matches!(
            parse_duration("1::30"),
            Err(DurationParseError::InvalidSegment(_))
        ));
        assert!(parse_duration("1:2:3:4").is_err());
        assert!(matches!(
            parse_duration("-5"),
            Err(DurationParseError::Unrecognized(_))
        ));
        assert!(parse_duration("inf").is_err());
    }

    #[test]
    fn test_parse_duration_secs_collapses_errors() {
        assert_eq!(parse_duration_secs("45"), Some(2700.0));
        assert_eq!(parse_duration_secs(""), None);
        assert_eq!(parse_duration_secs("abc"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(2700.0).as_deref(), Some("45:00"));
        assert_eq!(format_duration(3600.0).as_deref(), Some("1:00:00"));
        assert_eq!(format_duration(3725.4).as_deref(), Some("1:02:05"));
        assert_eq!(format_duration(59.5).as_deref(), Some("1:00"));
        assert_eq!(format_duration(0.0), None);
        assert_eq!(format_duration(-3.0), None);
        assert_eq!(format_duration(f64::NAN), None);
        assert_eq!(format_duration(f64::INFINITY), None);
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(270.0).as_deref(), Some("4:30 min/km"));
        assert_eq!(format_pace(300.4).as_deref(), Some("5:00 min/km"));
        assert_eq!(format_pace(3720.0).as_deref(), Some("62:00 min/km"));
        assert_eq!(format_pace(f64::INFINITY), None);
    }

    #[test]
    fn test_format_stopwatch() {
        assert_eq!(format_stopwatch(0), "0:00.00");
        assert_eq!(format_stopwatch(61_230), "1:01.23");
        assert_eq!(format_stopwatch(3_723_009), "1:02:03.00");
    }
}
