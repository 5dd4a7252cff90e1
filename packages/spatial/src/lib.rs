#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! `GeoJSON` projection of incident snapshots for map consumption.
//!
//! One point feature per incident, coordinates in `GeoJSON` order
//! (`[longitude, latitude]` — the reverse of the spoken "lat/lng" order,
//! and a classic source of defects). The projection consumes the same axis
//! convention normalization produces: an incident's `latitude` field is
//! latitude, full stop.
//!
//! Display color is resolved per-feature from a [`ColorScheme`]; this is a
//! presentation-layer copy, the canonical [`Incident`] is never mutated.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
use serde::{Deserialize, Serialize};
use traffic_map_incident_models::{Incident, Severity};

/// Display colors keyed by severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    /// Hex color for severe incidents.
    pub severe: String,
    /// Hex color for minor incidents.
    pub minor: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            severe: "#FF0000".to_string(),
            minor: "#FFA500".to_string(),
        }
    }
}

impl ColorScheme {
    /// The display color for a severity level.
    #[must_use]
    pub fn color_for(&self, severity: Severity) -> &str {
        match severity {
            Severity::Severe => &self.severe,
            Severity::Minor => &self.minor,
        }
    }
}

/// Projects an incident snapshot into a `GeoJSON` feature collection.
///
/// Regenerated whenever the snapshot or color scheme changes; an empty
/// snapshot yields an empty collection rather than an error.
#[must_use]
pub fn to_feature_collection(incidents: &[Incident], colors: &ColorScheme) -> FeatureCollection {
    let features = incidents
        .iter()
        .map(|incident| to_feature(incident, colors))
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn to_feature(incident: &Incident, colors: &ColorScheme) -> Feature {
    let geometry = Geometry::new(Value::Point(vec![incident.longitude, incident.latitude]));

    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), JsonValue::from(incident.id.clone()));
    properties.insert(
        "severity".to_string(),
        JsonValue::from(incident.severity.to_string()),
    );
    properties.insert(
        "type".to_string(),
        JsonValue::from(incident.description.clone()),
    );
    properties.insert("time".to_string(), JsonValue::from(incident.source_time()));
    properties.insert(
        "color".to_string(),
        JsonValue::from(colors.color_for(incident.severity).to_string()),
    );

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn incident(severity: Severity) -> Incident {
        Incident {
            id: "7".to_string(),
            occurred_at: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap()
                .and_utc(),
            description: "صدم عمود - بسيط".to_string(),
            latitude: 25.2048,
            longitude: 55.2708,
            severity,
            hour: 8,
        }
    }

    #[test]
    fn emits_longitude_first() {
        let collection = to_feature_collection(&[incident(Severity::Minor)], &ColorScheme::default());

        let geometry = collection.features[0].geometry.as_ref().unwrap();
        let Value::Point(coordinates) = &geometry.value else {
            panic!("expected point geometry");
        };

        // [longitude, latitude] decodes back to the incident's coordinates.
        assert!((coordinates[0] - 55.2708).abs() < f64::EPSILON);
        assert!((coordinates[1] - 25.2048).abs() < f64::EPSILON);
    }

    #[test]
    fn resolves_color_by_severity() {
        let colors = ColorScheme::default();
        let collection =
            to_feature_collection(&[incident(Severity::Severe), incident(Severity::Minor)], &colors);

        let color_of = |i: usize| {
            collection.features[i].properties.as_ref().unwrap()["color"]
                .as_str()
                .unwrap()
                .to_string()
        };
        assert_eq!(color_of(0), "#FF0000");
        assert_eq!(color_of(1), "#FFA500");
    }

    #[test]
    fn carries_incident_properties() {
        let collection = to_feature_collection(&[incident(Severity::Minor)], &ColorScheme::default());
        let properties = collection.features[0].properties.as_ref().unwrap();

        assert_eq!(properties["id"], "7");
        assert_eq!(properties["severity"], "minor");
        assert_eq!(properties["type"], "صدم عمود - بسيط");
        assert_eq!(properties["time"], "01/01/2023 08:00:00");
    }

    #[test]
    fn empty_snapshot_yields_empty_collection() {
        let collection = to_feature_collection(&[], &ColorScheme::default());
        assert!(collection.features.is_empty());

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
    }
}
