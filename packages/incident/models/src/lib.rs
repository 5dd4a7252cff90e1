#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Canonical traffic incident record and severity types.
//!
//! Every data source normalizes its raw rows into [`Incident`] records.
//! Downstream consumers (statistics, `GeoJSON` projection) only ever see
//! incidents that passed the validity checks in the normalization step, so
//! they can rely on coordinates being finite, non-zero numbers and `hour`
//! being in range.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Day-first timestamp format used by the origin dataset
/// (e.g. `01/01/2023 08:00:00`).
pub const SOURCE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Coarse two-level incident severity, derived from the free-text incident
/// description during normalization.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    /// Serious incidents (the description carries a "severe" marker token).
    Severe,
    /// Everything else. Descriptions that match no marker default here.
    Minor,
}

/// A traffic incident normalized to the canonical schema.
///
/// Instances are produced once by normalization and never mutated. Display
/// recoloring happens in the `GeoJSON` projection layer on a per-feature
/// copy, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Original incident ID from the data source. Empty when the source
    /// omits it.
    pub id: String,
    /// When the incident occurred.
    pub occurred_at: DateTime<Utc>,
    /// Free-text incident label (may contain Arabic script). Also serves as
    /// the incident "type" for per-type counting.
    pub description: String,
    /// Latitude (WGS84). Finite and non-zero.
    pub latitude: f64,
    /// Longitude (WGS84). Finite and non-zero.
    pub longitude: f64,
    /// Severity derived from the description.
    pub severity: Severity,
    /// Hour of day (0-23) derived from `occurred_at`.
    pub hour: u32,
}

impl Incident {
    /// Whether this incident is classified as severe.
    #[must_use]
    pub fn is_severe(&self) -> bool {
        self.severity == Severity::Severe
    }

    /// The occurrence timestamp rendered in the origin dataset's day-first
    /// format, as exposed to map tooltips.
    #[must_use]
    pub fn source_time(&self) -> String {
        self.occurred_at.format(SOURCE_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn incident() -> Incident {
        Incident {
            id: "42".to_string(),
            occurred_at: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
                .and_utc(),
            description: "صدم عمود - بسيط".to_string(),
            latitude: 25.2048,
            longitude: 55.2708,
            severity: Severity::Minor,
            hour: 8,
        }
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Severe).unwrap(),
            "\"severe\""
        );
        assert_eq!(serde_json::to_string(&Severity::Minor).unwrap(), "\"minor\"");
    }

    #[test]
    fn severity_displays_lowercase() {
        assert_eq!(Severity::Severe.to_string(), "severe");
        assert_eq!(Severity::Minor.to_string(), "minor");
    }

    #[test]
    fn source_time_is_day_first() {
        assert_eq!(incident().source_time(), "01/01/2023 08:00:00");
    }

    #[test]
    fn incident_round_trips_through_json() {
        let original = incident();
        let json = serde_json::to_string(&original).unwrap();
        let back: Incident = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
