#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pipeline orchestration: fetch, parse, and normalize a source into an
//! immutable snapshot.
//!
//! Data flows strictly one way: raw text → raw rows → incidents. Consumers
//! (statistics, `GeoJSON` projection) only ever see a [`DatasetSnapshot`]
//! after normalization has fully completed, so derivations never race with
//! in-progress processing.

use std::sync::Arc;
use std::time::Instant;

use traffic_map_incident_models::Incident;
use traffic_map_source::normalize::{NormalizeSummary, normalize_rows_chunked};
use traffic_map_source::progress::{ProgressCallback, null_progress};
use traffic_map_source::{FetchOptions, SourceError, fetch, rows};
use traffic_map_source_models::SourceDefinition;

/// A fully normalized, immutable view of one source load.
#[derive(Debug, Clone)]
pub struct DatasetSnapshot {
    /// Valid incidents, in source row order.
    pub incidents: Vec<Incident>,
    /// Diagnostic counts (raw vs valid) from normalization.
    pub summary: NormalizeSummary,
}

/// Fetches, parses, and normalizes a source into a snapshot.
///
/// Normalization runs in fixed-size chunks with cooperative yields, so a
/// large dataset does not monopolize the runtime; `progress` advances as
/// rows are consumed. The returned snapshot is complete — there are no
/// partial results on any path.
///
/// # Errors
///
/// Returns [`SourceError`] if the fetch or the CSV parse fails. Rows
/// dropped by validation are not errors; they are counted in the snapshot
/// summary.
pub async fn load_snapshot(
    client: &reqwest::Client,
    source: &SourceDefinition,
    options: &FetchOptions,
    progress: Option<Arc<dyn ProgressCallback>>,
) -> Result<DatasetSnapshot, SourceError> {
    let start = Instant::now();
    log::info!("Loading source: {} ({})", source.name, source.id);

    let text = fetch::fetch_text(client, &source.locator).await?;
    let mut raw_rows = rows::parse_rows(&text)?;

    if let Some(limit) = options.limit {
        let capped = usize::try_from(limit).unwrap_or(usize::MAX);
        if raw_rows.len() > capped {
            log::info!("{}: capping at {capped} of {} rows", source.id, raw_rows.len());
            raw_rows.truncate(capped);
        }
    }

    let progress = progress.unwrap_or_else(null_progress);
    let (incidents, summary) = normalize_rows_chunked(&source.fields, &raw_rows, &progress).await;
    progress.finish_and_clear();

    log::info!(
        "{}: loaded {} of {} records ({} dropped), took {:.1}s",
        source.id,
        summary.valid,
        summary.total,
        summary.dropped(),
        start.elapsed().as_secs_f64()
    );

    Ok(DatasetSnapshot { incidents, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use traffic_map_source_models::{FieldMapping, Locator};

    fn file_source(path: std::path::PathBuf) -> SourceDefinition {
        SourceDefinition {
            id: "test".to_string(),
            name: "Test fixture".to_string(),
            locator: Locator::CsvFile { path },
            fields: FieldMapping {
                incident_id: "acci_id".to_string(),
                occurred_at: "acci_time".to_string(),
                description: "acci_name".to_string(),
                latitude: "acci_x".to_string(),
                longitude: "acci_y".to_string(),
            },
        }
    }

    const FIXTURE: &str = "\
acci_id,acci_time,acci_name,acci_x,acci_y
1,01/01/2023 08:00:00,صدم عمود - بسيط,25.2048,55.2708
2,01/01/2023 09:30:00,دهس - بليغ,25.08,55.142
3,bad-time,تصادم,25.1,55.2
4,02/01/2023 10:00:00,تصادم,0,55.2
";

    fn write_fixture(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, FIXTURE).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_and_counts_drops() {
        let path = write_fixture("traffic_map_ingest_test.csv");
        let client = reqwest::Client::new();

        let snapshot = load_snapshot(
            &client,
            &file_source(path.clone()),
            &FetchOptions::default(),
            None,
        )
        .await
        .unwrap();

        assert_eq!(snapshot.summary.total, 4);
        assert_eq!(snapshot.summary.valid, 2);
        assert_eq!(snapshot.incidents.len(), 2);
        assert_eq!(snapshot.incidents[0].id, "1");
        assert_eq!(snapshot.incidents[1].id, "2");

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn limit_caps_raw_rows() {
        let path = write_fixture("traffic_map_ingest_limit_test.csv");
        let client = reqwest::Client::new();

        let snapshot = load_snapshot(
            &client,
            &file_source(path.clone()),
            &FetchOptions { limit: Some(1) },
            None,
        )
        .await
        .unwrap();

        assert_eq!(snapshot.summary.total, 1);
        assert_eq!(snapshot.incidents.len(), 1);

        std::fs::remove_file(path).ok();
    }
}
