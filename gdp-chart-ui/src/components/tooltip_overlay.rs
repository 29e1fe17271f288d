//! The single hover tooltip.

use crate::state::AppState;
use dioxus::prelude::*;

/// Absolutely positioned overlay driven by `AppState::tooltip`.
///
/// Exactly one instance is mounted; bars update its state in place and the
/// opacity change fades over `hover_transition_ms`.
#[component]
pub fn TooltipOverlay() -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.tooltip.read().clone();
    let style = tooltip.style(&state.config.read());
    let date = tooltip.date().to_string();
    let content = tooltip.content().to_string();

    rsx! {
        div {
            id: "tooltip",
            "data-date": "{date}",
            style: "{style}",
            "{content}"
        }
    }
}
