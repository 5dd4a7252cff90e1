#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregate statistics computation over incident snapshots.
//!
//! [`compute_statistics`] is a pure function of an immutable incident
//! collection: calling it twice on the same snapshot yields the same value.
//! Callers must only pass fully normalized snapshots — never a collection
//! that is still being built.

use traffic_map_analytics_models::Statistics;
use traffic_map_geography_models::{AreaDefinition, OTHER_AREA_ID};
use traffic_map_incident_models::Incident;

/// Computes summary statistics over a snapshot of valid incidents.
///
/// Area buckets are assigned by testing `areas` in order; the first
/// containing area wins (boxes may overlap at their edges), and incidents
/// matching no area fall into `"other"`. Every incident lands in exactly
/// one hour, one type, and one area bucket, so each breakdown sums to the
/// total.
#[must_use]
pub fn compute_statistics(incidents: &[Incident], areas: &[AreaDefinition]) -> Statistics {
    let mut stats = Statistics::empty(areas);
    stats.total_incidents = incidents.len() as u64;

    for incident in incidents {
        if incident.is_severe() {
            stats.severe_incidents += 1;
        }

        *stats.by_type.entry(incident.description.clone()).or_insert(0) += 1;
        stats.by_hour[incident.hour as usize] += 1;

        let area_id = areas
            .iter()
            .find(|area| area.contains(incident.latitude, incident.longitude))
            .map_or(OTHER_AREA_ID, |area| area.id.as_str());
        *stats.by_area.entry(area_id.to_string()).or_insert(0) += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use traffic_map_geography_models::named_areas;
    use traffic_map_incident_models::Severity;

    fn incident(id: u32, hour: u32, lat: f64, lng: f64, description: &str) -> Incident {
        let occurred_at = NaiveDate::from_ymd_opt(2023, 3, 14)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
            .and_utc();
        Incident {
            id: id.to_string(),
            occurred_at,
            description: description.to_string(),
            latitude: lat,
            longitude: lng,
            severity: if description.contains("بليغ") {
                Severity::Severe
            } else {
                Severity::Minor
            },
            hour: occurred_at.hour(),
        }
    }

    fn sample() -> Vec<Incident> {
        vec![
            // Downtown, severe
            incident(1, 8, 25.197, 55.272, "اصطدام بين مركبتين - بليغ"),
            // Downtown, minor
            incident(2, 8, 25.199, 55.270, "صدم عمود - بسيط"),
            // Marina
            incident(3, 17, 25.081, 55.143, "صدم عمود - بسيط"),
            // Deira
            incident(4, 23, 25.262, 55.318, "تصادم - بسيط"),
            // Nowhere near a named area
            incident(5, 3, 24.9, 55.8, "تصادم - بسيط"),
        ]
    }

    #[test]
    fn counts_match_sample() {
        let stats = compute_statistics(&sample(), &named_areas());

        assert_eq!(stats.total_incidents, 5);
        assert_eq!(stats.severe_incidents, 1);
        assert_eq!(stats.by_area["downtown"], 2);
        assert_eq!(stats.by_area["marina"], 1);
        assert_eq!(stats.by_area["deira"], 1);
        assert_eq!(stats.by_area["other"], 1);
        assert_eq!(stats.by_hour[8], 2);
        assert_eq!(stats.by_hour[17], 1);
        assert_eq!(stats.by_type["صدم عمود - بسيط"], 2);
    }

    #[test]
    fn breakdowns_sum_to_total() {
        let stats = compute_statistics(&sample(), &named_areas());

        assert_eq!(stats.by_hour.iter().sum::<u64>(), stats.total_incidents);
        assert_eq!(stats.by_area.values().sum::<u64>(), stats.total_incidents);
        assert_eq!(stats.by_type.values().sum::<u64>(), stats.total_incidents);
    }

    #[test]
    fn is_idempotent() {
        let incidents = sample();
        let areas = named_areas();
        assert_eq!(
            compute_statistics(&incidents, &areas),
            compute_statistics(&incidents, &areas)
        );
    }

    #[test]
    fn first_matching_area_wins_on_overlap() {
        // Two areas sharing a center; priority order decides the bucket.
        let areas = vec![
            AreaDefinition {
                id: "first".to_string(),
                name: "First".to_string(),
                center_lat: 25.0,
                center_lng: 55.0,
                radius: 0.1,
            },
            AreaDefinition {
                id: "second".to_string(),
                name: "Second".to_string(),
                center_lat: 25.0,
                center_lng: 55.0,
                radius: 0.2,
            },
        ];

        let stats = compute_statistics(&[incident(1, 0, 25.0, 55.0, "x")], &areas);
        assert_eq!(stats.by_area["first"], 1);
        assert_eq!(stats.by_area["second"], 0);
    }

    #[test]
    fn other_absorbs_the_remainder() {
        // 2,500 incidents: a third downtown, a third marina, a sixth deira,
        // the rest outside every named area.
        let mut incidents = Vec::new();
        for i in 0..2500u32 {
            let (lat, lng) = match i % 6 {
                0 | 1 => (25.197, 55.272),
                2 | 3 => (25.08, 55.142),
                4 => (25.262, 55.318),
                _ => (25.5, 55.9),
            };
            incidents.push(incident(i, i % 24, lat, lng, "تصادم"));
        }

        let stats = compute_statistics(&incidents, &named_areas());
        let named: u64 =
            stats.by_area["downtown"] + stats.by_area["marina"] + stats.by_area["deira"];
        assert_eq!(stats.by_area["other"], stats.total_incidents - named);
    }

    #[test]
    fn empty_snapshot_yields_zeroed_stats() {
        let stats = compute_statistics(&[], &named_areas());
        assert_eq!(stats, Statistics::empty(&named_areas()));
    }
}
