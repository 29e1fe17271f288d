//! Native HTTP client for the GDP document (enabled by the `api` feature).

use log::info;

use crate::dataset::Dataset;
use crate::error::LoadError;

/// Fetch and parse the GDP document with a single GET request.
///
/// No retries and no fallback source: the first failure is returned.
pub async fn fetch_dataset(client: &reqwest::Client, url: &str) -> Result<Dataset, LoadError> {
    info!("Fetching GDP data from {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LoadError::Status(response.status().as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Body(e.to_string()))?;

    let dataset = Dataset::from_json(&body)?;
    info!("Loaded {} GDP data points", dataset.len());
    Ok(dataset)
}
