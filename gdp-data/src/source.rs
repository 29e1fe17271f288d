//! Shape of the public GDP JSON document.

use serde::Deserialize;

/// Fixed location of the quarterly US GDP series.
pub const GDP_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";

/// The subset of the GDP document the chart reads.
///
/// Only `data` is required. The descriptive fields are optional and every
/// other field in the document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceDocument {
    /// Ordered `[dateString, value]` pairs.
    pub data: Vec<(String, f64)>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub from_date: Option<String>,
    #[serde(default)]
    pub to_date: Option<String>,
}

impl SourceDocument {
    /// Deserialize a response body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}
