#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Traffic data fetching, CSV parsing, and normalization logic.
//!
//! The pipeline is strictly one-way: raw CSV text ([`fetch`]) becomes
//! [`traffic_map_source_models::RawRow`]s ([`rows`]), which become canonical
//! [`traffic_map_incident_models::Incident`]s ([`normalize`]). Nothing here
//! mutates shared state; callers own every intermediate value.

pub mod fetch;
pub mod normalize;
pub mod parsing;
pub mod progress;
pub mod registry;
pub mod rows;
pub mod severity;

/// Errors that can occur while fetching or parsing source data.
///
/// Fetch failures (network, file I/O) and CSV parse failures are distinct
/// variants so callers can surface different messages for each.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed or returned a non-success status.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Local file read failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV text was malformed.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
}

/// Options for loading data from a source.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Maximum number of raw rows to process (applied after parsing).
    pub limit: Option<u64>,
}
