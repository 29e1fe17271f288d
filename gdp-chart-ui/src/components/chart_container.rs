//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id of the container div
    #[props(default = "chart".to_string())]
    pub id: String,
    /// Minimum height in pixels, reserved before the chart mounts
    #[props(default = 500)]
    pub min_height: u32,
    pub children: Element,
}

/// A container div for the rendered chart.
///
/// Not positioned, so the absolutely-placed tooltip stays relative to the page.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; overflow-x: auto;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            {props.children}
        }
    }
}
