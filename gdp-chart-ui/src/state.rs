//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use gdp_chart::{ChartConfig, Tooltip};
use gdp_data::Dataset;

/// Shared state for the GDP chart app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The loaded series; empty until the fetch completes
    pub dataset: Signal<Dataset>,
    /// Whether the fetch is still in flight
    pub loading: Signal<bool>,
    /// Error message if the fetch or parse failed
    pub error_msg: Signal<Option<String>>,
    /// Layout and visual constants
    pub config: Signal<ChartConfig>,
    /// The single hover tooltip
    pub tooltip: Signal<Tooltip>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(Dataset::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            config: Signal::new(ChartConfig::default()),
            tooltip: Signal::new(Tooltip::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
