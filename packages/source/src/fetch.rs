//! Raw text retrieval for CSV sources.
//!
//! A single attempt either succeeds or fails; there is no retry logic. The
//! only suspension point is the network/file I/O itself, and no partial
//! results are ever returned.

use traffic_map_source_models::Locator;

use crate::SourceError;

/// Fetches the raw CSV text for a source.
///
/// URL locators are fetched over HTTP(S); non-success statuses are reported
/// as fetch errors. File locators are read from disk.
///
/// # Errors
///
/// Returns [`SourceError::Fetch`] if the HTTP request fails or returns a
/// non-success status, or [`SourceError::Io`] if the file read fails.
pub async fn fetch_text(
    client: &reqwest::Client,
    locator: &Locator,
) -> Result<String, SourceError> {
    match locator {
        Locator::CsvUrl { url } => {
            log::info!("Fetching CSV from {url}");
            let response = client.get(url).send().await?.error_for_status()?;
            Ok(response.text().await?)
        }
        Locator::CsvFile { path } => {
            log::info!("Reading CSV from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
    }
}
