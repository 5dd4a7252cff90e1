#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Data source configuration types and the raw row format.
//!
//! A [`SourceDefinition`] captures everything unique about a dataset in a
//! serializable config struct: where the CSV lives and which columns map to
//! which canonical incident fields. The core never hardcodes column names or
//! reads ambient configuration; everything arrives through these types.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

/// A raw CSV row: column name to trimmed string value, as produced by the
/// CSV parser. No invariants; rows are consumed immediately by
/// normalization.
pub type RawRow = BTreeMap<String, String>;

/// A complete, config-driven traffic data source definition.
///
/// Loaded from TOML files embedded at compile time in the source registry.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDefinition {
    /// Unique identifier (e.g., `"dubai"`).
    pub id: String,
    /// Human-readable name (e.g., `"Dubai Traffic Incidents"`).
    pub name: String,
    /// Where to fetch the raw CSV from.
    pub locator: Locator,
    /// Column name mappings for normalization.
    pub fields: FieldMapping,
}

/// Where a source's raw CSV text lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Locator {
    /// Remote CSV fetched over HTTP(S).
    CsvUrl {
        /// Download URL.
        url: String,
    },
    /// Local CSV file.
    CsvFile {
        /// Filesystem path.
        path: PathBuf,
    },
}

/// Maps source-specific CSV column names to canonical incident fields.
///
/// The column named by `latitude` is treated as latitude everywhere in the
/// pipeline — normalization and the `GeoJSON` projection share this single
/// axis convention.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldMapping {
    /// Column holding the incident ID.
    pub incident_id: String,
    /// Column holding the occurrence timestamp string.
    pub occurred_at: String,
    /// Column holding the free-text incident description.
    pub description: String,
    /// Column holding the latitude coordinate.
    pub latitude: String,
    /// Column holding the longitude coordinate.
    pub longitude: String,
}
