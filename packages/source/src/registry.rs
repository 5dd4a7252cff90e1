//! Source registry — loads all source definitions from embedded TOML configs.
//!
//! Each `.toml` file in `packages/source/sources/` is baked into the binary
//! at compile time via [`include_str!`]. Adding a dataset is a matter of
//! creating a new TOML file with a locator and column mapping and adding it
//! to the list below.

use traffic_map_source_models::SourceDefinition;

/// TOML configs embedded at compile time.
const SOURCE_TOMLS: &[(&str, &str)] = &[("dubai", include_str!("../sources/dubai.toml"))];

/// Returns all configured source definitions, parsed from embedded TOML.
///
/// # Panics
///
/// Panics if any TOML config is malformed (this is a compile-time guarantee
/// since the configs are embedded).
#[must_use]
pub fn all_sources() -> Vec<SourceDefinition> {
    SOURCE_TOMLS
        .iter()
        .map(|(name, toml)| {
            toml::from_str(toml).unwrap_or_else(|e| panic!("Failed to parse {name}.toml: {e}"))
        })
        .collect()
}

/// Looks up a source definition by its ID.
#[must_use]
pub fn find_source(id: &str) -> Option<SourceDefinition> {
    all_sources().into_iter().find(|s| s.id == id)
}
