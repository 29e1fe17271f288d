//! GDP time series model and loader.
//!
//! The public GDP document is a JSON object whose `data` field holds
//! `[dateString, value]` pairs. This crate turns that document into an
//! ordered, immutable [`Dataset`] of [`DataPoint`]s for the chart crates.
//!
//! The native `api` feature adds a `reqwest`-based fetch used by the CLI;
//! the web app fetches through the browser instead (see `gdp-chart-ui`).

pub mod data_point;
pub mod dataset;
pub mod error;
pub mod source;

#[cfg(feature = "api")]
pub mod api;

pub use data_point::DataPoint;
pub use dataset::{Dataset, DatasetInfo};
pub use error::LoadError;
pub use source::{SourceDocument, GDP_DATA_URL};
