#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived statistics types for dashboard and narrative widgets.
//!
//! A [`Statistics`] value is a pure function of one immutable incident
//! snapshot. It is recomputed on demand and never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use traffic_map_geography_models::{AreaDefinition, OTHER_AREA_ID};

/// Hour buckets in the daily histogram.
pub const HOURS_PER_DAY: usize = 24;

/// Aggregate statistics over one incident snapshot.
///
/// Conservation invariant: `by_hour`, `by_area`, and `by_type` each sum to
/// `total_incidents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Count of valid incidents in the snapshot.
    pub total_incidents: u64,
    /// Count of incidents classified severe.
    pub severe_incidents: u64,
    /// Count per incident description.
    pub by_type: BTreeMap<String, u64>,
    /// Count per hour of day, always fully 24 slots.
    pub by_hour: [u64; HOURS_PER_DAY],
    /// Count per named area, including the `"other"` catch-all. Every
    /// configured area id is present even when its count is zero.
    pub by_area: BTreeMap<String, u64>,
}

impl Statistics {
    /// A zeroed statistics value with every area bucket (and `"other"`)
    /// pre-initialized, as rendered for an empty dataset.
    #[must_use]
    pub fn empty(areas: &[AreaDefinition]) -> Self {
        let mut by_area: BTreeMap<String, u64> =
            areas.iter().map(|area| (area.id.clone(), 0)).collect();
        by_area.insert(OTHER_AREA_ID.to_string(), 0);

        Self {
            total_incidents: 0,
            severe_incidents: 0,
            by_type: BTreeMap::new(),
            by_hour: [0; HOURS_PER_DAY],
            by_area,
        }
    }

    /// The busiest hour of day, or `None` for an empty snapshot.
    ///
    /// Ties resolve to the earliest hour.
    #[must_use]
    pub fn peak_hour(&self) -> Option<usize> {
        if self.total_incidents == 0 {
            return None;
        }
        self.by_hour
            .iter()
            .enumerate()
            .max_by(|(hour_a, count_a), (hour_b, count_b)| {
                count_a.cmp(count_b).then(hour_b.cmp(hour_a))
            })
            .map(|(hour, _)| hour)
    }
}
