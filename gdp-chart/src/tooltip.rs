//! The single hover tooltip shared by every bar.

use serde::Serialize;

use crate::config::{ChartConfig, TOOLTIP_OPACITY};
use crate::scene::Bar;

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// One overlay, updated in place as bars are entered and left.
///
/// Idle: opacity 0. Hover: opacity [`TOOLTIP_OPACITY`], content and position
/// taken from the hovered bar. Leaving a bar only fades the overlay out; its
/// last content and position stay put until the next hover replaces them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tooltip {
    visible: bool,
    content: String,
    date: String,
    left: f64,
    top: f64,
}

impl Tooltip {
    /// idle -> hover, on pointer entering `bar`.
    pub fn show(&mut self, bar: &Bar, pointer: Pointer, config: &ChartConfig) {
        let margin = config.margin;
        self.visible = true;
        self.content = bar.tooltip_text();
        self.date = bar.date.clone();
        self.left = pointer.x - margin.left + margin.right;
        self.top = pointer.y - margin.top + margin.bottom;
    }

    /// hover -> idle, on pointer leaving the bar.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> f64 {
        if self.visible {
            TOOLTIP_OPACITY
        } else {
            0.0
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Date of the last hovered bar, "YYYY-MM-DD".
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Page position of the overlay's top-left corner.
    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    /// Inline CSS for the overlay; opacity changes fade over
    /// `config.hover_transition_ms`.
    pub fn style(&self, config: &ChartConfig) -> String {
        format!(
            "opacity: {}; transition: opacity {}ms; position: absolute; \
             left: {}px; top: {}px; background-color: black; color: white; \
             border: 1px solid #222; padding: 5px; font-size: 18px; pointer-events: none;",
            self.opacity(),
            config.hover_transition_ms,
            self.left,
            self.top
        )
    }
}
