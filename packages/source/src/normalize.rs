//! Raw row to canonical incident normalization.
//!
//! Each row is normalized independently: timestamp parsed, coordinates
//! parsed and validated, severity classified, hour derived. Rows failing the
//! validity checks are dropped and counted, never retained with null fields.
//! Aggregation therefore always operates on fully valid incidents.

use std::sync::Arc;

use chrono::Timelike;
use traffic_map_incident_models::Incident;
use traffic_map_source_models::{FieldMapping, RawRow};

use crate::parsing::{parse_incident_time, parse_lat_lng};
use crate::progress::ProgressCallback;
use crate::severity;

/// Rows processed per chunk in [`normalize_rows_chunked`]. Large datasets
/// yield to the runtime between chunks so concurrent work (progress
/// rendering, timers) is not starved.
pub const NORMALIZE_CHUNK_SIZE: usize = 1000;

/// Diagnostic counts from a normalization pass.
///
/// Lets callers surface partial-failure state ("loaded 8,400 of 8,600
/// records") instead of silently presenting incomplete data as complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeSummary {
    /// Raw rows seen.
    pub total: u64,
    /// Rows that passed validation and became incidents.
    pub valid: u64,
}

impl NormalizeSummary {
    /// Rows dropped by validation.
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.total - self.valid
    }
}

/// Normalizes a single raw row.
///
/// Returns `None` when the row fails validation: unparseable timestamp, or
/// a coordinate that is missing, non-numeric, non-finite, or the zero
/// sentinel. The column mapped as `latitude` is latitude — the same axis
/// convention the `GeoJSON` projection uses.
#[must_use]
pub fn normalize_row(fields: &FieldMapping, row: &RawRow) -> Option<Incident> {
    let occurred_at = row
        .get(&fields.occurred_at)
        .and_then(|s| parse_incident_time(s))?;

    let (latitude, longitude) = parse_lat_lng(
        row.get(&fields.latitude).map(String::as_str),
        row.get(&fields.longitude).map(String::as_str),
    )?;

    let description = row.get(&fields.description).cloned().unwrap_or_default();

    Some(Incident {
        id: row.get(&fields.incident_id).cloned().unwrap_or_default(),
        occurred_at,
        severity: severity::classify(&description),
        description,
        latitude,
        longitude,
        hour: occurred_at.hour(),
    })
}

/// Normalizes a batch of raw rows, preserving input order.
///
/// Pure and deterministic: identical input yields identical output.
#[must_use]
pub fn normalize_rows(fields: &FieldMapping, rows: &[RawRow]) -> (Vec<Incident>, NormalizeSummary) {
    let incidents: Vec<Incident> = rows
        .iter()
        .filter_map(|row| normalize_row(fields, row))
        .collect();

    let summary = NormalizeSummary {
        total: rows.len() as u64,
        valid: incidents.len() as u64,
    };

    (incidents, summary)
}

/// Normalizes rows in fixed-size chunks, yielding to the runtime between
/// chunks and advancing `progress` as rows are consumed.
///
/// Results are identical (including order) to [`normalize_rows`] on the
/// same input; chunking is purely a scheduling concern.
pub async fn normalize_rows_chunked(
    fields: &FieldMapping,
    rows: &[RawRow],
    progress: &Arc<dyn ProgressCallback>,
) -> (Vec<Incident>, NormalizeSummary) {
    progress.set_total(rows.len() as u64);

    let mut incidents = Vec::new();
    for chunk in rows.chunks(NORMALIZE_CHUNK_SIZE) {
        incidents.extend(chunk.iter().filter_map(|row| normalize_row(fields, row)));
        progress.inc(chunk.len() as u64);
        tokio::task::yield_now().await;
    }

    let summary = NormalizeSummary {
        total: rows.len() as u64,
        valid: incidents.len() as u64,
    };

    (incidents, summary)
}
