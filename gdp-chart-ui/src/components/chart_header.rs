//! Chart header component with title and dataset description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Page title
    pub title: String,
    /// Description from the source document, if any
    #[props(default = String::new())]
    pub description: String,
    /// Name of the data source, if any
    #[props(default = String::new())]
    pub source_name: String,
}

/// Title block above the chart.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h1 {
                id: "title",
                style: "margin: 0 0 4px 0;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    id: "description",
                    style: "margin: 0; font-size: 12px; color: #666; white-space: pre-line;",
                    "{props.description}"
                }
            }
            if !props.source_name.is_empty() {
                p {
                    style: "margin: 2px 0 0 0; font-size: 11px; color: #888;",
                    "Source: {props.source_name}"
                }
            }
        }
    }
}
