//! Shared date and coordinate parsing for traffic data sources.

use chrono::{DateTime, NaiveDateTime, Utc};
use traffic_map_incident_models::SOURCE_TIME_FORMAT;

/// Formats accepted for the occurrence timestamp. The origin dataset uses
/// day-first dates; some exports of the same data use ISO-like variants, so
/// all are tried in order.
const TIME_FORMATS: &[&str] = &[
    SOURCE_TIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses an incident timestamp string.
///
/// Accepts the day-first source format (`01/01/2023 08:00:00`) and ISO-like
/// variants. Returns `None` for anything unparseable.
#[must_use]
pub fn parse_incident_time(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
}

/// Parses a lat/lng pair from raw string fields.
///
/// Fields are trimmed before parsing. Returns `None` if either value is
/// missing, non-numeric, non-finite, or exactly zero (the origin data uses
/// zero as a missing-coordinate sentinel).
#[must_use]
pub fn parse_lat_lng(lat: Option<&str>, lng: Option<&str>) -> Option<(f64, f64)> {
    let latitude = lat?.trim().parse::<f64>().ok()?;
    let longitude = lng?.trim().parse::<f64>().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    if latitude == 0.0 || longitude == 0.0 {
        return None;
    }
    Some((latitude, longitude))
}
