//! Errors raised while loading the GDP document.

use thiserror::Error;

/// Everything that can go wrong between the network and a [`crate::Dataset`].
///
/// None of these are retried; callers log them and leave the chart unrendered.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request never produced a response (network or transport failure).
    #[error("GDP request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("GDP request returned HTTP {0}")]
    Status(u16),

    /// The response body could not be read as text.
    #[error("failed to read GDP response body: {0}")]
    Body(String),

    /// The body is not JSON or does not have the `{ data: [[date, value], ...] }` shape.
    #[error("malformed GDP document: {0}")]
    Json(#[from] serde_json::Error),

    /// A data pair carried a date that is not `YYYY-MM-DD`.
    #[error("invalid date {value:?} in GDP document")]
    Date {
        value: String,
        #[source]
        source: gdp_utils::dates::DateError,
    },
}
