#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Named geographic area definitions for incident bucketing.
//!
//! Areas answer "roughly where did this happen" for the dashboard, not
//! precise geography: each is a square bounding box around a well-known
//! district center. The set is fixed at compile time and tested in a fixed
//! priority order, since boxes can overlap at their edges.

use serde::{Deserialize, Serialize};

/// Bucket key for incidents that fall in no named area.
pub const OTHER_AREA_ID: &str = "other";

/// A named geographic region approximated as a square bounding box.
///
/// `radius` is the half-width of the square in degrees; the membership test
/// is axis-aligned, not a true circle, despite the field name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaDefinition {
    /// Stable identifier used as the statistics bucket key.
    pub id: String,
    /// Human-readable district name.
    pub name: String,
    /// Center latitude (WGS84).
    pub center_lat: f64,
    /// Center longitude (WGS84).
    pub center_lng: f64,
    /// Half-width of the bounding square, in degrees.
    pub radius: f64,
}

impl AreaDefinition {
    /// Whether a coordinate falls inside this area's bounding square.
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (latitude - self.center_lat).abs() < self.radius
            && (longitude - self.center_lng).abs() < self.radius
    }
}

/// The fixed set of named Dubai districts, in membership-test priority
/// order. First match wins when boxes overlap.
#[must_use]
pub fn named_areas() -> Vec<AreaDefinition> {
    vec![
        AreaDefinition {
            id: "downtown".to_string(),
            name: "Downtown Dubai".to_string(),
            center_lat: 25.197,
            center_lng: 55.272,
            radius: 0.015,
        },
        AreaDefinition {
            id: "marina".to_string(),
            name: "Dubai Marina".to_string(),
            center_lat: 25.08,
            center_lng: 55.142,
            radius: 0.015,
        },
        AreaDefinition {
            id: "deira".to_string(),
            name: "Deira".to_string(),
            center_lat: 25.262,
            center_lng: 55.318,
            radius: 0.015,
        },
    ]
}
