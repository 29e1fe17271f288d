//! Load failure notice.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown in place of the chart when the GDP document could not be loaded.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        section {
            id: "load-error",
            role: "alert",
            style: "margin: 12px 0; padding: 10px 14px; border-left: 4px solid #0F2167; background: #FFECD6; color: #0F2167;",
            h2 {
                style: "margin: 0 0 4px; font-size: 1em;",
                "GDP series unavailable"
            }
            p {
                style: "margin: 0; font-family: monospace; font-size: 0.85em;",
                "{props.message}"
            }
        }
    }
}
