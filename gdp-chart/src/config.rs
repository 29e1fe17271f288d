//! Layout and visual constants for the chart.

use serde::{Deserialize, Serialize};

/// Opacity of the tooltip while a bar is hovered.
pub const TOOLTIP_OPACITY: f64 = 0.8;

/// Fill used if a config is deserialized with an empty palette.
const FALLBACK_FILL: &str = "#000000";

/// Space between the canvas edge and the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 10.0,
            bottom: 20.0,
            left: 40.0,
        }
    }
}

/// Every option the chart recognizes. [`ChartConfig::default`] is the
/// shipped chart; the other values exist so tests and the CLI can be explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Canvas width including margins.
    pub width: f64,
    /// Canvas height including margins.
    pub height: f64,
    pub margin: Margin,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    /// Significant digits on value-axis labels.
    pub value_precision: usize,
    /// Bar fills, applied cyclically by bar index.
    pub palette: Vec<String>,
    /// Duration of the tooltip fade in and out.
    pub hover_transition_ms: u32,
    /// Text of the rotated value-axis label.
    pub axis_label: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margin: Margin::default(),
            tick_count: 10,
            value_precision: 2,
            palette: ["#FFECD6", "#4CB9E7", "#3559E0", "#0F2167"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            hover_transition_ms: 100,
            axis_label: "Gross Domestic Product".to_string(),
        }
    }
}

impl ChartConfig {
    /// Width of the plot area (canvas minus left and right margins).
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area (canvas minus top and bottom margins).
    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Fill for the bar at `index`: `palette[index % palette.len()]`.
    pub fn bar_fill(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return FALLBACK_FILL;
        }
        &self.palette[index % self.palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_area() {
        let config = ChartConfig::default();
        assert_eq!(config.plot_width(), 950.0);
        assert_eq!(config.plot_height(), 470.0);
    }

    #[test]
    fn test_bar_fill_cycles() {
        let config = ChartConfig::default();
        assert_eq!(config.bar_fill(0), "#FFECD6");
        assert_eq!(config.bar_fill(3), "#0F2167");
        assert_eq!(config.bar_fill(4), "#FFECD6");
        assert_eq!(config.bar_fill(6), "#3559E0");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ChartConfig =
            serde_json::from_str(r#"{"width": 600, "tickCount": 5}"#).unwrap();
        assert_eq!(config.width, 600.0);
        assert_eq!(config.tick_count, 5);
        assert_eq!(config.height, 500.0);
        assert_eq!(config.hover_transition_ms, 100);
        assert_eq!(config.palette.len(), 4);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let config = ChartConfig {
            palette: Vec::new(),
            ..ChartConfig::default()
        };
        assert_eq!(config.bar_fill(7), "#000000");
    }
}
