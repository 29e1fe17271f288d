//! Placeholder while the GDP document is in flight.

use crate::state::AppState;
use dioxus::prelude::*;

/// Reserves the chart's canvas so the page does not jump when the bars land.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<AppState>();
    let (width, height) = {
        let config = state.config.read();
        (config.width, config.height)
    };

    rsx! {
        div {
            id: "loading",
            style: "width: {width}px; height: {height}px; display: grid; place-items: center; color: #3559E0; font-style: italic;",
            "Fetching quarterly GDP figures\u{2026}"
        }
    }
}
